use std::path::Path;

use anyhow::Result;

use glider_core::{AppConfig, Deck, StripLayout};

/// Validate a deck file and print its computed strip layout
pub fn run(config: &AppConfig, path: &Path) -> Result<()> {
    let deck = Deck::from_path(path)?;
    let widths = deck.slide_widths(config.ui.slide_width);
    let layout = StripLayout::from_widths(widths, config.ui.slide_gap);

    println!("Deck:        {}", deck.title.as_deref().unwrap_or("(untitled)"));
    println!("Slides:      {}", deck.len());
    println!("Strip width: {} columns", layout.total_width());
    println!();
    for (index, (slide, extent)) in deck.slides.iter().zip(layout.extents()).enumerate() {
        println!(
            "  {:>3}  col {:>5}  width {:>3}  {}",
            index + 1,
            extent.offset,
            extent.width,
            slide.title
        );
    }

    Ok(())
}
