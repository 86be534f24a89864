mod plan;
mod progress;
mod service;
mod summary;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{OPTION_COUNT, QuestionOrder, generate_options};
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionPhase};
pub use summary::{AggregateRow, compute_summary};
pub use workflow::{QuizLoopService, SessionAnswerResult};
