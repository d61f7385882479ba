use std::collections::BTreeSet;
use std::path::Path;

const DOCUMENT_EXTENSION: &str = "json";

/// Resolves file patterns against the current directory. Directories expand
/// to every `.json` file below them. The result is sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> anyhow::Result<Vec<String>> {
    let cwd = std::env::current_dir()?;
    resolve_patterns_in(patterns, &cwd)
}

pub fn resolve_patterns_in(patterns: &[String], cwd: &Path) -> anyhow::Result<Vec<String>> {
    let mut all_files = BTreeSet::new();

    for pattern in patterns {
        let files = resolve_pattern(pattern, cwd)?;
        tracing::debug!(pattern = %pattern, matched = files.len(), "resolved pattern");
        all_files.extend(files);
    }

    Ok(all_files.into_iter().collect())
}

fn resolve_pattern(pattern: &str, cwd: &Path) -> anyhow::Result<Vec<String>> {
    let resolved = cwd.join(pattern);

    if let Ok(metadata) = std::fs::metadata(&resolved) {
        if metadata.is_file() {
            return Ok(vec![resolved.to_string_lossy().into_owned()]);
        }

        if metadata.is_dir() {
            let glob_pattern = format!(
                "{}/**/*.{}",
                resolved.to_string_lossy(),
                DOCUMENT_EXTENSION
            );
            return glob_files(&glob_pattern);
        }
    }

    let glob_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        resolved.to_string_lossy().into_owned()
    };

    glob_files(&glob_pattern)
}

fn glob_files(glob_pattern: &str) -> anyhow::Result<Vec<String>> {
    let paths = glob::glob(glob_pattern)?;
    Ok(paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .map(|p| p.to_string_lossy().into_owned())
        .collect())
}
