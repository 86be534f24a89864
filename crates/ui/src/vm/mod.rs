mod quiz_vm;
mod summary_vm;
mod word_vm;

pub use quiz_vm::{OptionState, OptionVm, QuestionVm, QuizIntent, QuizScreen, QuizVm};
pub use summary_vm::{SummaryRowVm, map_summary_rows};
pub use word_vm::{HighlightedWordVm, map_highlighted_words};
