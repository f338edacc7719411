pub mod answers;
pub mod engine;
pub mod levels;
pub mod profile;

pub use answers::{AnswerSet, AnswerValue};
pub use engine::{calculate_profile, contribution};
pub use levels::{Bands, RiskLevel, CATEGORY_BANDS, OVERALL_BANDS};
pub use profile::{CategoryScore, Profile, MAX_MAIN_FACTORS};
