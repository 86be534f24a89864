#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use error::SessionError;

pub use sessions::{
    AggregateRow, OPTION_COUNT, QuestionOrder, QuizLoopService, QuizSession, SessionAnswerResult,
    SessionPhase, SessionProgress, compute_summary, generate_options,
};
