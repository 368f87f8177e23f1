use anyhow::Result;
use juridraft_core::export::read_paragraphs;
use std::path::Path;

/// Handle the show command
pub fn handle_show_command(path: &Path) -> Result<()> {
    for paragraph in read_paragraphs(path)? {
        println!("{paragraph}");
        println!();
    }
    Ok(())
}
