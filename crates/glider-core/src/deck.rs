//! Slide deck model
//!
//! A deck is an ordered list of slides loaded from a TOML file. The order of
//! `[[slides]]` tables is the visual order of the carousel and is fixed once
//! the deck is loaded.

use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};

/// Narrowest width a content-measured slide may get
const MIN_SLIDE_WIDTH: u16 = 16;
/// Widest width a content-measured slide may get
const MAX_SLIDE_WIDTH: u16 = 60;
/// Columns added around measured content for borders and padding
const SLIDE_CHROME: u16 = 4;

/// A single slide: a title and a block of body text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Slide {
    /// Display width of the widest line of this slide's content
    pub fn content_width(&self) -> u16 {
        let title_width = UnicodeWidthStr::width(self.title.as_str());
        let body_width = self
            .body
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        title_width.max(body_width).min(u16::MAX as usize) as u16
    }
}

/// An ordered slide deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Optional deck title, shown in the status bar
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Parse a deck from TOML content
    ///
    /// Rejects empty decks up front so the carousel's geometry invariant
    /// (there is always a current slide at scroll 0) holds from construction.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(content).map_err(|e| Error::Deck(e.to_string()))?;
        if deck.slides.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(deck)
    }

    /// Load a deck from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Per-slide strip widths
    ///
    /// With a configured width every slide gets the same number of columns.
    /// A configured width of 0 measures each slide's content instead, clamped
    /// to a sane range.
    pub fn slide_widths(&self, configured_width: u16) -> Vec<u16> {
        if configured_width > 0 {
            return vec![configured_width; self.slides.len()];
        }
        self.slides
            .iter()
            .map(|slide| {
                slide
                    .content_width()
                    .saturating_add(SLIDE_CHROME)
                    .clamp(MIN_SLIDE_WIDTH, MAX_SLIDE_WIDTH)
            })
            .collect()
    }

    /// Built-in demo deck, used when no deck file is given
    pub fn sample() -> Self {
        Self {
            title: Some("Glider".to_string()),
            slides: vec![
                Slide {
                    title: "Welcome".to_string(),
                    body: "A smooth-scrolling slide carousel\nfor your terminal.".to_string(),
                },
                Slide {
                    title: "Navigation".to_string(),
                    body: "l / → or the Next › button advances.\nh / ← or ‹ Prev goes back."
                        .to_string(),
                },
                Slide {
                    title: "Jumping".to_string(),
                    body: "g jumps to the first slide,\nG to the last.".to_string(),
                },
                Slide {
                    title: "Decks".to_string(),
                    body: "Write your own deck as TOML:\n\n[[slides]]\ntitle = \"...\"\nbody = \"...\"".to_string(),
                },
                Slide {
                    title: "That's it".to_string(),
                    body: "Press q to quit, ? for help.".to_string(),
                },
            ],
        }
    }
}
