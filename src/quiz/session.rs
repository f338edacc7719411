use anyhow::{bail, Result};
use std::collections::BTreeSet;

use crate::catalog::{OptionValue, Question, QuestionType};
use crate::scoring::{calculate_profile, AnswerSet, AnswerValue, Profile};

/// Walks a catalog one question at a time, collecting answers.
///
/// Unlike the scoring engine, the session rejects answers that do not match
/// the current question, so a finished session only holds scoreable input.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: &'a [Question],
    current: usize,
    answers: AnswerSet,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self::resume(questions, AnswerSet::new())
    }

    /// Continue from saved answers, positioned at the first unanswered question
    pub fn resume(questions: &'a [Question], answers: AnswerSet) -> Self {
        let current = questions
            .iter()
            .position(|q| !answers.get(q.id).is_some_and(AnswerValue::is_matchable))
            .unwrap_or_else(|| questions.len().saturating_sub(1));
        Self {
            questions,
            current,
            answers,
        }
    }

    pub fn current(&self) -> Option<&'a Question> {
        self.questions.get(self.current)
    }

    /// 1-based position of the current question
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.position() >= self.total()
    }

    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current().and_then(|q| self.answers.get(q.id))
    }

    /// Record the answer to a single, likert or numeric question.
    pub fn answer(&mut self, value: OptionValue) -> Result<()> {
        let Some(question) = self.current() else {
            bail!("The catalog has no questions");
        };
        if question.kind == QuestionType::Multi {
            bail!("Question {} takes several options, toggle them instead", question.id);
        }
        if question.option(&value).is_none() {
            bail!("'{}' is not an option of question {}", value, question.id);
        }
        self.answers.insert(question.id, value);
        Ok(())
    }

    /// Add or remove one option of a multi-select question.
    /// Removing the last selected option leaves the question unanswered.
    pub fn toggle(&mut self, value: &str) -> Result<()> {
        let Some(question) = self.current() else {
            bail!("The catalog has no questions");
        };
        if question.kind != QuestionType::Multi {
            bail!("Question {} takes a single option", question.id);
        }
        if question.option_by_text(value).is_none() {
            bail!("'{}' is not an option of question {}", value, question.id);
        }

        let mut selected = match self.answers.remove(question.id) {
            Some(AnswerValue::Multi(set)) => set,
            _ => BTreeSet::new(),
        };
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        if !selected.is_empty() {
            self.answers.insert(question.id, AnswerValue::Multi(selected));
        }
        Ok(())
    }

    /// Forget the answer to the current question
    pub fn clear(&mut self) {
        if let Some(question) = self.current() {
            self.answers.remove(question.id);
        }
    }

    /// Multi-select questions need at least one pick, the rest an answer.
    pub fn can_advance(&self) -> bool {
        match self.current_answer() {
            Some(AnswerValue::Multi(set)) => !set.is_empty(),
            Some(AnswerValue::Scalar(_)) => true,
            Some(AnswerValue::Fraction(_) | AnswerValue::Empty) | None => false,
        }
    }

    /// Move to the next question. Returns false when already on the last one.
    pub fn advance(&mut self) -> Result<bool> {
        if !self.can_advance() {
            let id = self.current().map(|q| q.id).unwrap_or_default();
            bail!("Question {} has not been answered", id);
        }
        if self.is_last() {
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Move to the previous question. Returns false when already on the first one.
    pub fn go_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn answered(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.get(q.id).is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.total()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn profile(&self) -> Profile {
        calculate_profile(self.questions, &self.answers)
    }

    pub fn finish(self) -> (AnswerSet, Profile) {
        let profile = calculate_profile(self.questions, &self.answers);
        (self.answers, profile)
    }
}
