use crate::cli::output::{print_header, with_spinner};
use anyhow::Result;
use console::style;
use juridraft_core::{Assistant, CompletionClient, Feature};
use std::io::{self, BufRead, Write};

/// Handle the chat command: one question, or an interactive loop
pub async fn handle_chat_command(
    assistant: &Assistant<CompletionClient>,
    question: &[String],
) -> Result<()> {
    print_header(Feature::Chat, assistant.provider().model());

    if !question.is_empty() {
        let output = with_spinner("Thinking...", assistant.chat(&question.join(" "))).await;
        println!("{}", output.text);
        return Ok(());
    }

    println!("Type 'exit' to quit");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", style("You:").blue().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if matches!(input, "exit" | "quit") {
            break;
        }

        let output = with_spinner("Thinking...", assistant.chat(input)).await;
        println!("{} {}\n", style("JuriDraft:").yellow().bold(), output.text);
    }

    Ok(())
}
