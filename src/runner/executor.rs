use std::path::Path;

use anyhow::Context;

use crate::parser::{load_page, load_test, DocumentKind, LoadError};
use crate::runner::files::resolve_patterns;
use crate::runner::reporter::{formatter, ChainLink, FileReport, LintOutput, OutputFormat, Status};
use crate::validator::{PageValidator, TestValidator, ValidationResult};

#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Forces every file to be read as this kind; detected per file otherwise.
    pub kind: Option<DocumentKind>,
    pub output_format: OutputFormat,
}

/// Resolves `patterns`, validates every matched document and prints the
/// report in the requested format.
pub fn lint_files(patterns: Vec<String>, options: LintOptions) -> anyhow::Result<LintOutput> {
    let cwd = std::env::current_dir()?;
    let files = resolve_patterns(&patterns)?;

    if files.is_empty() {
        tracing::warn!(patterns = %patterns.join(", "), "no documents matched");
    }

    let reports = files
        .iter()
        .map(|file| {
            let label = display_path(file, &cwd);
            lint_file(Path::new(file), label, options.kind)
        })
        .collect();

    let output = LintOutput::new(reports);
    println!("{}", formatter(options.output_format).format(&output));

    Ok(output)
}

pub fn lint_file(path: &Path, label: String, kind: Option<DocumentKind>) -> FileReport {
    tracing::debug!(file = %path.display(), "linting document");

    match lint_path(path, kind) {
        Ok((kind, result)) => {
            let chain = result.as_invalid().map(ChainLink::chain_of).unwrap_or_default();
            let status = if result.is_valid() {
                Status::Valid
            } else {
                Status::Invalid
            };
            if let Some(invalid) = result.as_invalid() {
                tracing::debug!(
                    file = %label,
                    reason = %invalid.root_cause().reason(),
                    "document is invalid"
                );
            }

            FileReport {
                file: label,
                kind: Some(kind),
                status,
                chain,
                error: None,
            }
        }
        Err(error) => {
            tracing::debug!(file = %label, error = %format!("{:#}", error), "failed to load document");
            FileReport {
                file: label,
                kind,
                status: Status::Error,
                chain: vec![],
                error: Some(format!("{:#}", error)),
            }
        }
    }
}

fn lint_path(
    path: &Path,
    kind: Option<DocumentKind>,
) -> anyhow::Result<(DocumentKind, ValidationResult)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let import_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    lint_document(&content, &import_name, kind)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Loads `content` as a test or page document and validates it.
pub fn lint_document(
    content: &str,
    import_name: &str,
    kind: Option<DocumentKind>,
) -> Result<(DocumentKind, ValidationResult), LoadError> {
    let kind = match kind {
        Some(kind) => kind,
        None => {
            let document: serde_json::Value = serde_json::from_str(content)?;
            DocumentKind::detect(&document).ok_or_else(|| {
                LoadError::shape("document has neither a \"config\" nor a \"url\" key")
            })?
        }
    };

    let result = match kind {
        DocumentKind::Test => TestValidator::default().validate(&load_test(content)?),
        DocumentKind::Page => PageValidator::default().validate(&load_page(content, import_name)?),
    };

    Ok((kind, result))
}

fn display_path(file: &str, cwd: &Path) -> String {
    Path::new(file)
        .strip_prefix(cwd)
        .map(|relative| relative.to_string_lossy().into_owned())
        .unwrap_or_else(|_| file.to_string())
}
