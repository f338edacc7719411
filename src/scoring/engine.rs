use super::answers::{AnswerSet, AnswerValue};
use super::profile::{CategoryScore, Profile};
use crate::catalog::{
    Category, Question, QuestionType, MAX_OPTION_SCORE, MIN_OPTION_SCORE, NONE_OPTION,
};

/// Score an answer set against a question catalog.
///
/// Unanswered questions, answers that match no option, options without a
/// score and answers of the wrong shape contribute nothing. Categories with
/// no contribution are left out of the profile.
pub fn calculate_profile(questions: &[Question], answers: &AnswerSet) -> Profile {
    // Buckets in the order their category is first answered
    let mut buckets: Vec<(Category, Vec<u8>)> = Vec::new();

    for question in questions {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };

        let index = match buckets.iter().position(|(c, _)| *c == question.category) {
            Some(i) => i,
            None => {
                buckets.push((question.category, Vec::new()));
                buckets.len() - 1
            }
        };

        if let Some(contribution) = contribution(question, answer) {
            buckets[index].1.push(contribution);
        }
    }

    let scores = buckets
        .iter()
        .filter_map(|(category, contributions)| {
            CategoryScore::from_contributions(*category, contributions)
        })
        .collect();

    Profile::from_scores(scores)
}

/// Score one answered question on the 1-5 scale.
pub fn contribution(question: &Question, answer: &AnswerValue) -> Option<u8> {
    match (question.kind, answer) {
        (QuestionType::Multi, AnswerValue::Multi(selected)) => {
            if selected.contains(NONE_OPTION) {
                Some(MIN_OPTION_SCORE)
            } else {
                let breadth = selected.len().saturating_add(1);
                Some(breadth.min(MAX_OPTION_SCORE as usize) as u8)
            }
        }
        (QuestionType::Multi, AnswerValue::Scalar(_)) => None,
        (_, AnswerValue::Scalar(value)) => question
            .option(value)
            .and_then(|o| o.score)
            .filter(|s| (MIN_OPTION_SCORE..=MAX_OPTION_SCORE).contains(s)),
        (_, AnswerValue::Multi(_)) => None,
        (_, AnswerValue::Fraction(_) | AnswerValue::Empty) => None,
    }
}
