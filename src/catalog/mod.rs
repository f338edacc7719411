mod builtin;
mod category;
mod types;
mod validation;

pub use builtin::builtin_questions;
pub use category::{Category, Habit};
pub use types::{
    OptionValue, Question, QuestionId, QuestionOption, QuestionType, MAX_OPTION_SCORE,
    MIN_OPTION_SCORE, NONE_OPTION,
};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Whether a path should be read as YAML rather than JSON
pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load a question catalog from a YAML or JSON file and validate it.
///
/// The file holds a plain list of questions.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be parsed, or fails
/// [`validate_catalog`]. Validation errors are joined into one message.
pub fn load_catalog(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog at {}", path.display()))?;

    let questions: Vec<Question> = if is_yaml(path) {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))?
    };

    if let Err(errors) = validate_catalog(&questions) {
        anyhow::bail!(
            "Invalid catalog {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        );
    }

    tracing::debug!(path = %path.display(), questions = questions.len(), "loaded catalog");
    Ok(questions)
}

/// Load the catalog at `path`, or the built-in one when no path is given.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Vec<Question>> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(builtin_questions()),
    }
}
