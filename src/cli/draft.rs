use crate::cli::args::DraftArgs;
use crate::cli::output::{print_header, print_output, with_spinner};
use anyhow::Result;
use juridraft_core::config::JuriDraftConfig;
use juridraft_core::{Assistant, CompletionClient, Feature};

/// Handle the draft command
pub async fn handle_draft_command(
    assistant: &Assistant<CompletionClient>,
    config: &JuriDraftConfig,
    args: &DraftArgs,
) -> Result<()> {
    print_header(Feature::Draft, assistant.provider().model());

    let export = config.export.enabled && !args.no_export;
    let output = with_spinner(
        "Drafting document...",
        assistant.draft(&args.document_type, &args.facts, &args.parties, export),
    )
    .await?;

    print_output(&output);
    Ok(())
}
