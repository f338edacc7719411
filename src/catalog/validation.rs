use std::collections::HashSet;

use super::types::{Question, MAX_OPTION_SCORE, MIN_OPTION_SCORE};

/// Validate a question catalog before it is used for scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(questions: &[Question]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if questions.is_empty() {
        errors.push("catalog: must contain at least one question".to_string());
    }

    let mut seen_ids = HashSet::new();
    for (i, question) in questions.iter().enumerate() {
        let at = format!("questions[{}] (id {})", i, question.id);

        if !seen_ids.insert(question.id) {
            errors.push(format!("{}: duplicate question id", at));
        }

        if question.text.trim().is_empty() {
            errors.push(format!("{}.text: must not be empty", at));
        }

        if let (Some(min), Some(max)) = (question.min, question.max) {
            if min > max {
                errors.push(format!("{}: min {} is greater than max {}", at, min, max));
            }
        }

        if question.kind.uses_option_scores() && question.options.is_empty() {
            errors.push(format!("{}.options: scored question has no options", at));
        }

        let mut seen_values = HashSet::new();
        for (j, option) in question.options.iter().enumerate() {
            if !seen_values.insert(&option.value) {
                errors.push(format!(
                    "{}.options[{}].value: duplicate value '{}'",
                    at, j, option.value
                ));
            }

            match (question.kind.uses_option_scores(), option.score) {
                (true, None) => errors.push(format!(
                    "{}.options[{}].score: missing score for '{}'",
                    at, j, option.value
                )),
                (true, Some(score)) if !(MIN_OPTION_SCORE..=MAX_OPTION_SCORE).contains(&score) => {
                    errors.push(format!(
                        "{}.options[{}].score: {} is outside {}-{}",
                        at, j, score, MIN_OPTION_SCORE, MAX_OPTION_SCORE
                    ))
                }
                (false, Some(_)) => errors.push(format!(
                    "{}.options[{}].score: multi-select options are scored by count, remove the score",
                    at, j
                )),
                _ => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
