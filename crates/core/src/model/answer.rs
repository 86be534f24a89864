use crate::model::QuestionMode;

/// Outcome of one answered question. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// 1-based position of the question within its session.
    pub question_number: usize,
    pub entry_name: String,
    pub correct_symbol: String,
    pub chosen_label: Option<String>,
    pub is_correct: bool,
    pub examples: Vec<String>,
    pub mode: QuestionMode,
}
