use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::session::QuizSession;
use crate::catalog::{Question, QuestionType};
use crate::scoring::AnswerValue;

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Completed,
    Aborted,
}

/// Prompt with a message and return the trimmed input, or None at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse 1-based option numbers separated by commas or spaces.
pub fn parse_picks(input: &str, option_count: usize) -> Result<Vec<usize>, String> {
    let mut picks = Vec::new();
    for part in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        let n: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
        if n < 1 || n > option_count {
            return Err(format!("Choose a number between 1 and {}", option_count));
        }
        if !picks.contains(&(n - 1)) {
            picks.push(n - 1);
        }
    }
    if picks.is_empty() {
        return Err("Please choose an option".to_string());
    }
    Ok(picks)
}

fn render_question<W: Write>(
    output: &mut W,
    session: &QuizSession<'_>,
    question: &Question,
) -> Result<()> {
    writeln!(output).context("Failed to write question")?;
    writeln!(
        output,
        "[{}/{}] {}",
        session.position(),
        session.total(),
        question.category.display_name()
    )?;
    writeln!(output, "{}", question.text)?;
    if let Some(ref helper) = question.helper_text {
        writeln!(output, "  ({})", helper)?;
    }

    let current = session.current_answer();
    for (i, option) in question.options.iter().enumerate() {
        let chosen = match current {
            Some(AnswerValue::Scalar(value)) => value == &option.value,
            Some(AnswerValue::Multi(set)) => set.contains(&option.value.to_string()),
            _ => false,
        };
        let marker = if chosen { "*" } else { " " };
        writeln!(output, " {} {:>2}. {}", marker, i + 1, option.label)?;
    }
    Ok(())
}

/// Apply parsed picks to the current question
fn apply_picks(
    session: &mut QuizSession<'_>,
    question: &Question,
    picks: &[usize],
) -> Result<()> {
    if question.kind == QuestionType::Multi {
        session.clear();
        for &i in picks {
            session.toggle(&question.options[i].value.to_string())?;
        }
        Ok(())
    } else {
        if picks.len() > 1 {
            anyhow::bail!("Choose only one option");
        }
        session.answer(question.options[picks[0]].value.clone())
    }
}

/// Run the quiz over any input/output pair.
///
/// An empty line keeps the existing answer, `b` goes back one question and
/// `q` (or end of input) stops without finishing.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut QuizSession<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<QuizOutcome> {
    while let Some(question) = session.current() {
        render_question(output, session, question)?;

        let hint = if question.kind == QuestionType::Multi {
            "Choose one or more, comma separated (b = back, q = quit): "
        } else {
            "Choose one (b = back, q = quit): "
        };

        let Some(line) = prompt(input, output, hint)? else {
            return Ok(QuizOutcome::Aborted);
        };

        match line.to_lowercase().as_str() {
            "q" => return Ok(QuizOutcome::Aborted),
            "b" => {
                if !session.go_back() {
                    writeln!(output, "Already at the first question.")?;
                }
                continue;
            }
            "" if session.can_advance() => {}
            "" => {
                writeln!(output, "Please choose an option.")?;
                continue;
            }
            picks => match parse_picks(picks, question.options.len()) {
                Ok(picks) => {
                    if let Err(e) = apply_picks(session, question, &picks) {
                        writeln!(output, "{}", e)?;
                        continue;
                    }
                }
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            },
        }

        if !session.advance()? {
            return Ok(QuizOutcome::Completed);
        }
    }

    // Empty catalog: nothing to ask
    Ok(QuizOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_questions, Category, OptionValue, QuestionOption};
    use std::io::Cursor;

    fn two_questions() -> Vec<Question> {
        let scored = |id: u32| Question {
            id,
            category: Category::Sleep,
            text: format!("question {}", id),
            kind: QuestionType::Likert,
            options: (1..=5)
                .map(|n| QuestionOption {
                    value: OptionValue::Number(n),
                    label: format!("level {}", n),
                    score: Some(n as u8),
                })
                .collect(),
            min: None,
            max: None,
            unit: None,
            helper_text: None,
        };
        let mut medical = scored(2);
        medical.category = Category::MedicalFactors;
        medical.kind = QuestionType::Multi;
        medical.options = ["ninguna", "tiroides", "diabetes"]
            .iter()
            .map(|v| QuestionOption {
                value: OptionValue::Text(v.to_string()),
                label: v.to_string(),
                score: None,
            })
            .collect();
        vec![scored(1), medical]
    }

    fn run<'a>(questions: &'a [Question], script: &str) -> (QuizOutcome, QuizSession<'a>, String) {
        let mut session = QuizSession::new(questions);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_interactive(&mut session, &mut input, &mut output).unwrap();
        (outcome, session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_picks() {
        assert_eq!(parse_picks("2", 5), Ok(vec![1]));
        assert_eq!(parse_picks("1, 3 3", 5), Ok(vec![0, 2]));
        assert!(parse_picks("0", 5).is_err());
        assert!(parse_picks("6", 5).is_err());
        assert!(parse_picks("abc", 5).is_err());
        assert!(parse_picks(" , ", 5).is_err());
    }

    #[test]
    fn test_completes_quiz() {
        let questions = two_questions();
        let (outcome, session, output) = run(&questions, "4\n2,3\n");
        assert_eq!(outcome, QuizOutcome::Completed);
        assert_eq!(session.answers().get(1), Some(&AnswerValue::from(4)));
        assert_eq!(
            session.answers().get(2),
            Some(&AnswerValue::multi(["tiroides", "diabetes"]))
        );
        assert!(output.contains("[1/2] Sueño y Ritmo Circadiano"));
        assert!(output.contains("[2/2] Factores Médicos"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let questions = two_questions();
        let (outcome, session, output) = run(&questions, "\n9\n1,2\n5\n1\n");
        assert_eq!(outcome, QuizOutcome::Completed);
        assert!(output.contains("Please choose an option."));
        assert!(output.contains("Choose a number between 1 and 5"));
        assert!(output.contains("Choose only one option"));
        assert_eq!(session.answers().get(1), Some(&AnswerValue::from(5)));
    }

    #[test]
    fn test_back_and_keep_answer() {
        let questions = two_questions();
        // answer 1, go back, keep it with an empty line, then answer 2
        let (outcome, session, output) = run(&questions, "3\nb\n\n1\n");
        assert_eq!(outcome, QuizOutcome::Completed);
        assert_eq!(session.answers().get(1), Some(&AnswerValue::from(3)));
        assert_eq!(session.answers().get(2), Some(&AnswerValue::multi(["ninguna"])));
        assert!(output.contains(" *  3. level 3"));
    }

    #[test]
    fn test_back_on_first_question() {
        let questions = two_questions();
        let (_, _, output) = run(&questions, "b\nq\n");
        assert!(output.contains("Already at the first question."));
    }

    #[test]
    fn test_quit_and_end_of_input_abort() {
        let questions = two_questions();
        let (outcome, session, _) = run(&questions, "2\nq\n");
        assert_eq!(outcome, QuizOutcome::Aborted);
        assert_eq!(session.answers().len(), 1);

        let (outcome, _, _) = run(&questions, "");
        assert_eq!(outcome, QuizOutcome::Aborted);
    }

    #[test]
    fn test_builtin_catalog_run() {
        let questions = builtin_questions();
        let script = "3\n".repeat(28) + "2\n3\n";
        let (outcome, session, _) = run(&questions, &script);
        assert_eq!(outcome, QuizOutcome::Completed);
        assert!(session.is_complete());
        assert_eq!(
            session.answers().get(29),
            Some(&AnswerValue::multi(["tiroides"]))
        );
    }
}
