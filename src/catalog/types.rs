use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

pub type QuestionId = u32;

/// Lowest and highest score an option may carry.
pub const MIN_OPTION_SCORE: u8 = 1;
pub const MAX_OPTION_SCORE: u8 = 5;

/// Option value that marks "none of these" in a multi-select question.
pub const NONE_OPTION: &str = "ninguna";

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multi,
    Likert,
    Numeric,
}

impl QuestionType {
    /// Multi-select questions derive their score from the selection size,
    /// every other type reads it from the chosen option.
    pub fn uses_option_scores(self) -> bool {
        !matches!(self, QuestionType::Multi)
    }
}

/// Value an option stores and an answer refers to.
///
/// Matching is strict: `3` and `"3"` are different values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n as i64)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuestionOption {
    pub value: OptionValue,
    pub label: String,

    /// Contribution on the 1-5 scale. Unset for multi-select options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

/// One quiz question.
///
/// Example YAML:
/// ```yaml
/// - id: 19
///   category: sueno
///   text: "¿Cuántas horas duermes habitualmente por noche?"
///   type: single
///   options:
///     - { value: 5, label: "Menos de 5 horas", score: 5 }
///     - { value: 1, label: "Más de 8 horas", score: 1 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub text: String,

    #[serde(rename = "type")]
    pub kind: QuestionType,

    #[serde(default)]
    pub options: Vec<QuestionOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

impl Question {
    /// Find the option whose value equals `value`
    pub fn option(&self, value: &OptionValue) -> Option<&QuestionOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    /// Find an option by its textual form (used for multi-select picks)
    pub fn option_by_text(&self, text: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value.to_string() == text)
    }
}
