pub mod formatter;

pub use formatter::{
    format_level, format_profile, format_question_list, format_score_bar, format_tsv,
    should_use_colors,
};
