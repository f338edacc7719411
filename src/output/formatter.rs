use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::{Category, Question, QuestionType};
use crate::scoring::{Profile, RiskLevel};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width for the score column: narrower on small terminals
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(w) if w < 70 => 10,
        _ => 20,
    }
}

/// Render a level padded to a fixed width, colored by severity
pub fn format_level(level: RiskLevel, use_colors: bool) -> String {
    let padded = format!("{:<6}", level.as_str());
    if !use_colors {
        return padded;
    }
    match level {
        RiskLevel::High => padded.red().bold().to_string(),
        RiskLevel::Medium => padded.yellow().to_string(),
        RiskLevel::Low => padded.green().to_string(),
    }
}

/// Horizontal bar for a 0-100 score, e.g. "########--" for 80 at width 10
pub fn format_score_bar(score: u8, width: usize) -> String {
    let filled = ((score.min(100) as usize * width) + 50) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format a profile for the terminal: overall level, ranked table, main
/// factors and a first habit to start with.
pub fn format_profile(profile: &Profile, use_colors: bool) -> String {
    if profile.is_empty() {
        return "No answers could be scored.".to_string();
    }

    let mut lines = Vec::new();

    let overall = profile.overall_risk_level.as_str().to_uppercase();
    let mean = profile
        .mean_score
        .map(|m| format!("{:.0}", m))
        .unwrap_or_else(|| "-".to_string());
    if use_colors {
        lines.push(format!(
            "Overall difficulty: {} (mean {})",
            overall.bold(),
            mean
        ));
    } else {
        lines.push(format!("Overall difficulty: {} (mean {})", overall, mean));
    }
    lines.push(profile.overall_risk_level.description().to_string());
    lines.push(String::new());

    let width = bar_width();
    for (idx, score) in profile.scores.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let bar = format_score_bar(score.normalized_score, width);
        let level = format_level(score.level, use_colors);
        if use_colors {
            lines.push(format!(
                "{} {:>3}  {}  {}  {}",
                index_str.dimmed(),
                score.normalized_score.bold(),
                bar,
                level,
                score.display_name
            ));
        } else {
            lines.push(format!(
                "{} {:>3}  {}  {}  {}",
                index_str, score.normalized_score, bar, level, score.display_name
            ));
        }
    }

    lines.push(String::new());
    if profile.main_factors.is_empty() {
        lines.push("Main factors: none above the low band".to_string());
    } else {
        lines.push("Main factors:".to_string());
        for (idx, factor) in profile.main_factors.iter().enumerate() {
            lines.push(format!(
                "{:>2}. {} ({}, {})",
                idx + 1,
                factor.display_name,
                factor.normalized_score,
                factor.level
            ));
            lines.push(format!("    {}", factor.category.factor_summary()));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Main trait: {} | Mechanism: {}",
        profile.main_trait(),
        profile.dominant_mechanism()
    ));

    // The top main factor picks the habit; caloric deficit when there is none
    let habit = profile
        .main_factors
        .first()
        .map(|f| f.category)
        .unwrap_or(Category::CaloricDeficit)
        .first_habit();
    if use_colors {
        lines.push(format!("First habit: {}", habit.title.bold()));
    } else {
        lines.push(format!("First habit: {}", habit.title));
    }
    lines.push(format!("  {}", habit.description));

    lines.join("\n")
}

/// Format category scores as tab-separated values for scripting
/// Columns: category tag, score, level, display name (no headers, no colors)
pub fn format_tsv(profile: &Profile) -> String {
    profile
        .scores
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}\t{}",
                s.category, s.normalized_score, s.level, s.display_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn type_label(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::Single => "single",
        QuestionType::Multi => "multi",
        QuestionType::Likert => "likert",
        QuestionType::Numeric => "numeric",
    }
}

/// Format the catalog as one line per question, grouped under category headers
pub fn format_question_list(questions: &[Question], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions found.".to_string();
    }

    let mut lines = Vec::new();
    let mut last_category = None;
    for question in questions {
        if last_category != Some(question.category) {
            if last_category.is_some() {
                lines.push(String::new());
            }
            let header = format!(
                "{} [{}]",
                question.category.display_name(),
                question.category
            );
            if use_colors {
                lines.push(header.bold().to_string());
            } else {
                lines.push(header);
            }
            last_category = Some(question.category);
        }

        let id = format!("{:>3}.", question.id);
        let kind = format!("{:<7}", type_label(question.kind));
        if use_colors {
            lines.push(format!("{} {} {}", id.dimmed(), kind.cyan(), question.text));
        } else {
            lines.push(format!("{} {} {}", id, kind, question.text));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_questions;
    use crate::scoring::{calculate_profile, AnswerSet, AnswerValue, CategoryScore};

    fn sample_profile() -> Profile {
        Profile::from_scores(vec![
            CategoryScore::from_contributions(Category::Sleep, &[5, 3]).unwrap(),
            CategoryScore::from_contributions(Category::Stress, &[1]).unwrap(),
        ])
    }

    #[test]
    fn test_format_score_bar() {
        assert_eq!(format_score_bar(80, 10), "########--");
        assert_eq!(format_score_bar(0, 5), "-----");
        assert_eq!(format_score_bar(100, 5), "#####");
        assert_eq!(format_score_bar(45, 10), "#####-----");
    }

    #[test]
    fn test_format_level_plain() {
        assert_eq!(format_level(RiskLevel::High, false), "high  ");
        assert_eq!(format_level(RiskLevel::Low, false), "low   ");
    }

    #[test]
    fn test_format_profile_empty() {
        let profile = Profile::from_scores(Vec::new());
        assert_eq!(format_profile(&profile, false), "No answers could be scored.");
    }

    #[test]
    fn test_format_profile_plain() {
        let output = format_profile(&sample_profile(), false);
        assert!(output.contains("Overall difficulty: MEDIUM (mean 50)"));
        assert!(output.contains(" 1.  80"));
        assert!(output.contains("Sueño y Ritmo Circadiano"));
        assert!(output.contains(" 2.  20"));
        assert!(output.contains("Main factors:"));
        assert!(output.contains(" 1. Sueño y Ritmo Circadiano (80, high)"));
        assert!(!output.contains(" 2. Estrés Percibido"));
        assert!(output.contains("Mechanism: Desregulación hormonal"));
        assert!(output.contains("First habit: Alarma para ir a dormir"));
    }

    #[test]
    fn test_format_profile_all_low_uses_default_habit() {
        let profile = Profile::from_scores(vec![
            CategoryScore::from_contributions(Category::Stress, &[1]).unwrap(),
        ]);
        let output = format_profile(&profile, false);
        assert!(output.contains("Main factors: none above the low band"));
        assert!(output.contains("First habit: Planifica tu comida principal del día"));
    }

    #[test]
    fn test_format_tsv() {
        let output = format_tsv(&sample_profile());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "sueno\t80\thigh\tSueño y Ritmo Circadiano");
        assert_eq!(lines[1], "estres\t20\tlow\tEstrés Percibido");
    }

    #[test]
    fn test_format_tsv_empty() {
        let profile = calculate_profile(&builtin_questions(), &AnswerSet::new());
        assert_eq!(format_tsv(&profile), "");
    }

    #[test]
    fn test_format_question_list() {
        let output = format_question_list(&builtin_questions(), false);
        assert!(output.starts_with("Déficit Calórico Inconsistente [deficit_calorico]"));
        assert!(output.contains("  1. likert  ¿Con qué frecuencia comes más"));
        assert!(output.contains(" 29. multi   ¿Tienes alguna condición médica"));
        assert_eq!(output.matches('[').count(), 10);
    }

    #[test]
    fn test_format_question_list_empty() {
        assert_eq!(format_question_list(&[], false), "No questions found.");
    }

    #[test]
    fn test_colored_output_still_has_text() {
        let mut answers = AnswerSet::new();
        answers.insert(19, AnswerValue::from(5));
        let profile = calculate_profile(&builtin_questions(), &answers);
        let output = format_profile(&profile, true);
        assert!(output.contains("Sueño y Ritmo Circadiano"));
    }
}
