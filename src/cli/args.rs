use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "juridraft",
    version,
    about = "Legal drafting, research and review assistant powered by Gemini"
)]
pub struct Cli {
    /// Path to a juridraft.toml; defaults to ./juridraft.toml then ~/.juridraft/juridraft.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini model ID, e.g. gemini-2.0-flash
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API key env var to read (checks this, then GOOGLE_API_KEY)
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Directory receiving exported .docx files
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft a court process document and export it to .docx
    Draft(DraftArgs),

    /// Summarize Nigerian law on a research query and export it to .docx
    Research(ResearchArgs),

    /// Review a legal draft for errors, inconsistencies and improvements
    Review(ReviewArgs),

    /// Ask the legal assistant; interactive when no question is given
    Chat {
        question: Vec<String>,
    },

    /// Write a default juridraft.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the paragraphs of an exported document
    Show { path: PathBuf },
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Document type, e.g. Motion or Affidavit
    #[arg(long, short = 't')]
    pub document_type: String,

    /// Key facts of the matter
    #[arg(long, short = 'f')]
    pub facts: String,

    /// Parties involved
    #[arg(long, short = 'p')]
    pub parties: String,

    /// Print only; do not write a document
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Args, Debug)]
pub struct ResearchArgs {
    /// Research query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Print only; do not write a document
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Read the draft from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Draft text; read from stdin when neither this nor --file is given
    pub text: Vec<String>,
}
