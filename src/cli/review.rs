use crate::cli::args::ReviewArgs;
use crate::cli::output::{print_header, print_output, with_spinner};
use anyhow::{Context, Result};
use juridraft_core::{Assistant, CompletionClient, Feature};
use std::io::{self, IsTerminal, Read};

/// Handle the review command
pub async fn handle_review_command(
    assistant: &Assistant<CompletionClient>,
    args: &ReviewArgs,
) -> Result<()> {
    let draft = read_draft(args)?;

    print_header(Feature::Review, assistant.provider().model());

    let output = with_spinner("Reviewing draft...", assistant.review(&draft)).await;
    print_output(&output);
    Ok(())
}

fn read_draft(args: &ReviewArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft: {}", path.display()));
    }

    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the draft, then press Ctrl-D:");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read draft from stdin")?;
    Ok(buf)
}
