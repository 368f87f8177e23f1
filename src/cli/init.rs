use anyhow::{Context, Result};
use console::style;
use juridraft_core::config::JuriDraftConfig;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize JuriDraft configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    match JuriDraftConfig::bootstrap(workspace, force)
        .context("failed to initialize configuration file")?
    {
        Some(path) => println!("{} {}", style("Created:").green().bold(), path.display()),
        None => println!(
            "{} juridraft.toml already exists (use --force to overwrite)",
            style("Skipped:").yellow().bold()
        ),
    }

    Ok(())
}
