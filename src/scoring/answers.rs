use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{OptionValue, QuestionId};

/// A raw answer as recorded by the quiz.
///
/// Scalars answer single, likert and numeric questions; sets answer
/// multi-select questions. Fractional numbers and `null` are kept so one odd
/// answer does not reject a whole file, but they never match an option.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Scalar(OptionValue),
    Multi(BTreeSet<String>),
    Fraction(f64),
    Empty,
}

impl AnswerValue {
    /// Whether this answer can ever match an option
    pub fn is_matchable(&self) -> bool {
        matches!(self, AnswerValue::Scalar(_) | AnswerValue::Multi(_))
    }

    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Multi(values.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Scalar(OptionValue::Number(n))
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        AnswerValue::Scalar(OptionValue::Number(n as i64))
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Scalar(OptionValue::Text(s.to_string()))
    }
}

impl From<OptionValue> for AnswerValue {
    fn from(value: OptionValue) -> Self {
        AnswerValue::Scalar(value)
    }
}

/// Answers keyed by question id. Questions without an entry are unanswered.
///
/// Serialized as an object, e.g. `{"1": 3, "29": ["tiroides", "diabetes"]}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: impl Into<AnswerValue>) {
        self.0.insert(id, value.into());
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<AnswerValue> {
        self.0.remove(&id)
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.0.iter()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
