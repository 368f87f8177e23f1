use crate::cli::args::ResearchArgs;
use crate::cli::output::{print_header, print_output, with_spinner};
use anyhow::Result;
use juridraft_core::config::JuriDraftConfig;
use juridraft_core::{Assistant, CompletionClient, Feature};

/// Handle the research command
pub async fn handle_research_command(
    assistant: &Assistant<CompletionClient>,
    config: &JuriDraftConfig,
    args: &ResearchArgs,
) -> Result<()> {
    // Empty queries are sent as-is; the model's answer is shown like any other.
    let query = args.query.join(" ");
    print_header(Feature::Research, assistant.provider().model());

    let export = config.export.enabled && !args.no_export;
    let output = with_spinner("Researching...", assistant.research(&query, export)).await?;

    print_output(&output);
    Ok(())
}
