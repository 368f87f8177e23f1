use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use juridraft_core::{Feature, FeatureOutput};
use std::future::Future;
use std::time::Duration;

/// Run `task` behind a spinner on stderr
pub async fn with_spinner<F, T>(message: &str, task: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg:.dim}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = task.await;
    spinner.finish_and_clear();
    result
}

pub fn print_header(feature: Feature, model: &str) {
    println!("{}", style(feature.title()).blue().bold());
    println!("Model: {model}");
    println!();
}

pub fn print_output(output: &FeatureOutput) {
    println!("{}", output.text);
    if let Some(path) = &output.export_path {
        println!();
        println!("{} {}", style("Saved:").green().bold(), path.display());
    }
}
