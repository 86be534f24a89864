mod answer;
mod ids;
mod mode;
mod phoneme;

pub use answer::AnswerRecord;
pub use ids::PhonemeId;
pub use mode::{ModeParseError, QuestionMode};
pub use phoneme::PhonemeEntry;
