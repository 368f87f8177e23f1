//! Word document export.
//!
//! Each export is a fresh `.docx` holding one paragraph. With
//! [`ExportNaming::Fixed`] the same path is reused on every call, so the last
//! writer wins; there is no locking between concurrent exports.

use crate::config::{ExportConfig, ExportNaming};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use docx_rs::{BreakType, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ExportWriter {
    output_dir: PathBuf,
    naming: ExportNaming,
}

impl ExportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            naming: ExportNaming::Fixed,
        }
    }

    pub fn with_naming(mut self, naming: ExportNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_dir.clone()).with_naming(config.naming)
    }

    /// Write `text` as a single paragraph into `<output_dir>/<filename>`,
    /// creating the directory if needed and replacing any existing file.
    pub fn write(&self, text: &str, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let path = self
            .output_dir
            .join(resolve_filename(filename, self.naming, Local::now()));
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create document: {}", path.display()))?;

        Docx::new()
            .add_paragraph(Paragraph::new().add_run(text_run(text)))
            .build()
            .pack(file)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        info!(path = %path.display(), chars = text.chars().count(), "exported document");
        Ok(path)
    }
}

/// Line breaks inside the text become in-run breaks so the paragraph keeps
/// its shape when opened in a word processor.
fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

/// File name for an export at time `now`
pub fn resolve_filename(filename: &str, naming: ExportNaming, now: DateTime<Local>) -> String {
    match naming {
        ExportNaming::Fixed => filename.to_string(),
        ExportNaming::Timestamped => {
            let stamp = now.format("%Y%m%d-%H%M%S");
            match filename.rsplit_once('.') {
                Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{stamp}.{ext}"),
                _ => format!("{filename}-{stamp}"),
            }
        }
    }
}

/// Read the paragraphs of a document back as plain strings
pub fn read_paragraphs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read document: {}", path.display()))?;
    let docx = docx_rs::read_docx(&bytes)
        .with_context(|| format!("Failed to parse document: {}", path.display()))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();
    Ok(paragraphs)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}
