use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::path::Path;

use crate::catalog::is_yaml;
use crate::scoring::AnswerSet;

/// Load an answer set from a JSON or YAML file
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers at {}", path.display()))?;

    let answers: AnswerSet = if is_yaml(path) {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), answers = answers.len(), "loaded answers");
    Ok(answers)
}

/// Save an answer set as pretty JSON, atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_answers(path: &Path, answers: &AnswerSet) -> Result<()> {
    write_json(path, answers).context("Failed to save answers")
}

/// Write any serializable value as pretty JSON without leaving a partial file behind
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, value).context("Failed to serialize JSON")?;

    file.commit()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AnswerValue;
    use std::env;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("weight_profile_test_answers.json");
        let _ = fs::remove_file(&temp_path);

        let mut answers = AnswerSet::new();
        answers.insert(1, 4);
        answers.insert(29, AnswerValue::multi(["tiroides", "sop"]));

        save_answers(&temp_path, &answers).unwrap();
        let loaded = load_answers(&temp_path).unwrap();
        assert_eq!(loaded, answers);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_yaml_answers() {
        let temp_path = env::temp_dir().join("weight_profile_test_answers.yaml");
        fs::write(&temp_path, "19: 5\n20: 3\n29: [ninguna]\n").unwrap();

        let loaded = load_answers(&temp_path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.get(19), Some(&AnswerValue::from(5)));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp_path = env::temp_dir().join("weight_profile_test_answers_missing.json");
        let _ = fs::remove_file(&temp_path);
        let err = load_answers(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers"));
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let temp_path = env::temp_dir().join("weight_profile_test_answers_bad.json");
        fs::write(&temp_path, "{\"1\": {\"nested\": true}}").unwrap();
        assert!(load_answers(&temp_path).is_err());
        let _ = fs::remove_file(&temp_path);
    }
}
