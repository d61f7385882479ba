use owo_colors::OwoColorize;
use serde::Serialize;

use crate::parser::DocumentKind;
use crate::validator::InvalidResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextEntry {
    pub key: String,
    pub value: String,
}

/// One link of a failure chain, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainLink {
    #[serde(rename = "type")]
    pub result_type: String,
    pub reason: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<ContextEntry>,
}

impl ChainLink {
    pub fn chain_of(result: &InvalidResult) -> Vec<ChainLink> {
        result
            .chain()
            .map(|link| ChainLink {
                result_type: link.result_type().to_string(),
                reason: link.reason().to_string(),
                subject: link.subject().describe(),
                context: link
                    .context()
                    .iter()
                    .map(|(key, value)| ContextEntry {
                        key: key.clone(),
                        value: value.to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub status: Status,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<ChainLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub valid: usize,
    pub invalid: usize,
    pub load_errors: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LintOutput {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

impl LintOutput {
    pub fn new(files: Vec<FileReport>) -> Self {
        let count = |status| files.iter().filter(|f| f.status == status).count();
        let summary = Summary {
            files: files.len(),
            valid: count(Status::Valid),
            invalid: count(Status::Invalid),
            load_errors: count(Status::Error),
        };
        Self { files, summary }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.invalid > 0 || self.summary.load_errors > 0
    }
}

pub trait OutputFormatter {
    fn format(&self, output: &LintOutput) -> String;
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, output: &LintOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|e| {
            let escaped = serde_json::to_string(&e.to_string())
                .unwrap_or_else(|_| "\"serialization error\"".to_string());
            format!("{{\"error\": {}}}", escaped)
        })
    }
}

pub struct TextFormatter;

impl TextFormatter {
    fn format_file(file: &FileReport, result: &mut String) {
        let status = match file.status {
            Status::Valid => format!("{:<5}", "PASS").green().to_string(),
            Status::Invalid => format!("{:<5}", "FAIL").red().to_string(),
            Status::Error => format!("{:<5}", "ERROR").red().to_string(),
        };
        result.push_str(&format!("{} {}\n", status, file.file));

        for (depth, link) in file.chain.iter().enumerate() {
            let indent = "  ".repeat(depth + 3);
            result.push_str(&format!(
                "{}{} {}",
                indent,
                format!("{}:", link.result_type).dimmed(),
                link.reason.yellow()
            ));
            for entry in &link.context {
                result.push_str(&format!(" {}", format!("{}={}", entry.key, entry.value).dimmed()));
            }
            result.push('\n');
        }

        if let Some(error) = &file.error {
            result.push_str(&format!("      {} {}\n", "Error:".red(), error));
        }
    }

    fn format_summary(summary: &Summary) -> String {
        let files_text = if summary.files == 1 { "file" } else { "files" };

        if summary.files == 0 {
            return format!("{} No files to check", "!".yellow());
        }

        if summary.invalid == 0 && summary.load_errors == 0 {
            return format!(
                "{} {}/{} {} valid",
                "✓".green(),
                summary.valid,
                summary.files,
                files_text
            );
        }

        let mut line = format!(
            "{} {}/{} {} invalid",
            "✗".red(),
            summary.invalid,
            summary.files,
            files_text
        );
        if summary.load_errors > 0 {
            line.push_str(&format!(", {} failed to load", summary.load_errors));
        }
        line
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, output: &LintOutput) -> String {
        let mut result = String::new();
        for file in &output.files {
            Self::format_file(file, &mut result);
        }
        if !output.files.is_empty() {
            result.push('\n');
        }
        result.push_str(&Self::format_summary(&output.summary));
        result
    }
}

pub fn formatter(output_format: OutputFormat) -> Box<dyn OutputFormatter> {
    match output_format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
