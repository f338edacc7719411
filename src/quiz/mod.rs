pub mod prompt;
pub mod session;
pub mod storage;

pub use prompt::{parse_picks, run_interactive, QuizOutcome};
pub use session::QuizSession;
pub use storage::{load_answers, save_answers, write_json};
