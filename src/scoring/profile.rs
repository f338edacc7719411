use serde::{Deserialize, Serialize};

use super::levels::{RiskLevel, CATEGORY_BANDS, OVERALL_BANDS};
use crate::catalog::{Category, MAX_OPTION_SCORE};

/// Number of non-low categories reported as main factors.
pub const MAX_MAIN_FACTORS: usize = 3;

/// Aggregated result for one category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub raw_average: f64,
    pub normalized_score: u8,
    pub level: RiskLevel,
    pub display_name: String,
}

impl CategoryScore {
    /// Average the contributions and rescale to 0-100.
    /// Returns None when there is nothing to average.
    pub fn from_contributions(category: Category, contributions: &[u8]) -> Option<Self> {
        if contributions.is_empty() {
            return None;
        }
        let sum: f64 = contributions.iter().map(|&c| c as f64).sum();
        let raw_average = sum / contributions.len() as f64;
        Some(Self::from_raw_average(category, raw_average))
    }

    pub fn from_raw_average(category: Category, raw_average: f64) -> Self {
        let normalized = ((raw_average / MAX_OPTION_SCORE as f64) * 100.0).round();
        Self::from_normalized(category, raw_average, normalized.clamp(0.0, 100.0) as u8)
    }

    fn from_normalized(category: Category, raw_average: f64, normalized_score: u8) -> Self {
        Self {
            category,
            raw_average,
            normalized_score,
            level: CATEGORY_BANDS.classify(normalized_score as f64),
            display_name: category.display_name().to_string(),
        }
    }
}

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Highest score first; ties keep catalog order
    pub scores: Vec<CategoryScore>,
    pub overall_risk_level: RiskLevel,
    /// Leading non-low entries of `scores`
    pub main_factors: Vec<CategoryScore>,
    /// Mean of all normalized scores, None when nothing was scored
    pub mean_score: Option<f64>,
}

impl Profile {
    /// Rank category scores and derive the overall level and main factors.
    ///
    /// `scores` must be in catalog encounter order; the sort is stable so
    /// that order decides ties.
    pub fn from_scores(mut scores: Vec<CategoryScore>) -> Self {
        scores.sort_by(|a, b| b.normalized_score.cmp(&a.normalized_score));

        let mean_score = if scores.is_empty() {
            None
        } else {
            let total: f64 = scores.iter().map(|s| s.normalized_score as f64).sum();
            Some(total / scores.len() as f64)
        };

        let overall_risk_level = mean_score
            .map(|mean| OVERALL_BANDS.classify(mean))
            .unwrap_or(RiskLevel::Low);

        let main_factors = scores
            .iter()
            .filter(|s| s.level != RiskLevel::Low)
            .take(MAX_MAIN_FACTORS)
            .cloned()
            .collect();

        Self {
            scores,
            overall_risk_level,
            main_factors,
            mean_score,
        }
    }

    /// True when no category received a contribution
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest-ranked category, low or not
    pub fn root_factor(&self) -> Option<&CategoryScore> {
        self.scores.first()
    }

    pub fn main_trait(&self) -> &str {
        self.root_factor()
            .map(|s| s.display_name.as_str())
            .unwrap_or("No identificado")
    }

    pub fn dominant_mechanism(&self) -> &str {
        self.root_factor()
            .map(|s| s.category.mechanism())
            .unwrap_or("Múltiples factores")
    }

    pub fn score_for(&self, category: Category) -> Option<&CategoryScore> {
        self.scores.iter().find(|s| s.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(category: Category, score: u8) -> CategoryScore {
        CategoryScore::from_normalized(category, score as f64 / 20.0, score)
    }

    #[test]
    fn test_from_contributions_average() {
        let score = CategoryScore::from_contributions(Category::Sleep, &[5, 3]).unwrap();
        assert_eq!(score.raw_average, 4.0);
        assert_eq!(score.normalized_score, 80);
        assert_eq!(score.level, RiskLevel::High);
        assert_eq!(score.display_name, "Sueño y Ritmo Circadiano");
    }

    #[test]
    fn test_from_contributions_empty() {
        assert!(CategoryScore::from_contributions(Category::Sleep, &[]).is_none());
    }

    #[test]
    fn test_normalization_rounds_half_up() {
        // 3.5 / 5 * 100 = 70 exactly
        let score = CategoryScore::from_contributions(Category::Stress, &[3, 4]).unwrap();
        assert_eq!(score.normalized_score, 70);
        assert_eq!(score.level, RiskLevel::High);

        // 11/3 = 3.667 -> 73.33 -> 73
        let score = CategoryScore::from_contributions(Category::Stress, &[4, 4, 3]).unwrap();
        assert_eq!(score.normalized_score, 73);

        // 9/4 = 2.25 -> 45
        let score = CategoryScore::from_contributions(Category::Stress, &[1, 2, 3, 3]).unwrap();
        assert_eq!(score.normalized_score, 45);
        assert_eq!(score.level, RiskLevel::Medium);
    }

    #[test]
    fn test_two_categories_descending() {
        let profile = Profile::from_scores(vec![
            normalized(Category::Adherence, 10),
            normalized(Category::Sleep, 90),
        ]);
        let order: Vec<Category> = profile.scores.iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::Sleep, Category::Adherence]);
        assert_eq!(profile.mean_score, Some(50.0));
        assert_eq!(profile.overall_risk_level, RiskLevel::Medium);
        assert_eq!(profile.main_factors.len(), 1);
        assert_eq!(profile.main_factors[0].category, Category::Sleep);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let profile = Profile::from_scores(vec![
            normalized(Category::Stress, 60),
            normalized(Category::CaloricDeficit, 80),
            normalized(Category::Sleep, 60),
            normalized(Category::Adherence, 60),
        ]);
        let order: Vec<Category> = profile.scores.iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![
                Category::CaloricDeficit,
                Category::Stress,
                Category::Sleep,
                Category::Adherence
            ]
        );
    }

    #[test]
    fn test_main_factors_capped_at_three() {
        let profile = Profile::from_scores(vec![
            normalized(Category::Stress, 60),
            normalized(Category::CaloricDeficit, 80),
            normalized(Category::Sleep, 75),
            normalized(Category::Adherence, 45),
            normalized(Category::MedicalFactors, 20),
        ]);
        let main: Vec<Category> = profile.main_factors.iter().map(|s| s.category).collect();
        assert_eq!(
            main,
            vec![Category::CaloricDeficit, Category::Sleep, Category::Stress]
        );
    }

    #[test]
    fn test_all_low_has_no_main_factors() {
        let profile = Profile::from_scores(vec![
            normalized(Category::Stress, 20),
            normalized(Category::Sleep, 30),
        ]);
        assert!(profile.main_factors.is_empty());
        assert_eq!(profile.overall_risk_level, RiskLevel::Low);
        assert_eq!(profile.main_trait(), "Sueño y Ritmo Circadiano");
    }

    #[test]
    fn test_empty_profile_defaults() {
        let profile = Profile::from_scores(Vec::new());
        assert!(profile.is_empty());
        assert!(profile.main_factors.is_empty());
        assert_eq!(profile.overall_risk_level, RiskLevel::Low);
        assert_eq!(profile.mean_score, None);
        assert!(profile.root_factor().is_none());
        assert_eq!(profile.main_trait(), "No identificado");
        assert_eq!(profile.dominant_mechanism(), "Múltiples factores");
    }

    #[test]
    fn test_profile_json_shape() {
        let profile = Profile::from_scores(vec![normalized(Category::Sleep, 80)]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["overallRiskLevel"], "high");
        assert_eq!(json["scores"][0]["category"], "sueno");
        assert_eq!(json["scores"][0]["normalizedScore"], 80);
        assert_eq!(json["scores"][0]["level"], "high");
        assert_eq!(json["mainFactors"][0]["displayName"], "Sueño y Ritmo Circadiano");
        assert_eq!(json["meanScore"], 80.0);
    }
}
