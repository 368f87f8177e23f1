//! JuriDraft - terminal legal drafting assistant
//!
//! Each subcommand runs one feature chain from `juridraft-core`: compose the
//! prompt, ask Gemini, clean the reply and, for drafts and research, export
//! it to a Word document under `outputs/`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "juridraft=debug,juridraft_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match &args.command {
        Commands::Init { force } => {
            let workspace = std::env::current_dir().context("cannot determine current dir")?;
            return cli::init::handle_init_command(&workspace, *force);
        }
        Commands::Show { path } => return cli::show::handle_show_command(path),
        _ => {}
    }

    let config = cli::load_config(&args)?;
    let assistant = cli::build_assistant(&config)?;

    match &args.command {
        Commands::Draft(draft) => {
            cli::draft::handle_draft_command(&assistant, &config, draft).await
        }
        Commands::Research(research) => {
            cli::research::handle_research_command(&assistant, &config, research).await
        }
        Commands::Review(review) => cli::review::handle_review_command(&assistant, review).await,
        Commands::Chat { question } => cli::chat::handle_chat_command(&assistant, question).await,
        Commands::Init { .. } | Commands::Show { .. } => Ok(()),
    }
}
