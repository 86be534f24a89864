use rand::Rng;
use std::fmt;
use std::sync::Arc;

use vowel_core::Dataset;
use vowel_core::model::{AnswerRecord, PhonemeEntry, QuestionMode};

use crate::error::SessionError;
use super::plan::{OPTION_COUNT, QuestionOrder, generate_options};
use super::progress::SessionProgress;
use super::summary::{AggregateRow, compute_summary};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Quiz,
    Summary,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz run over a dataset.
///
/// Transitions never mutate in place: each takes `&self` and returns the
/// next state, leaving the original untouched when the transition is
/// rejected. Anything random (question order, option sets) draws from the
/// caller's `Rng`.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    dataset: Arc<Dataset>,
    order: QuestionOrder,
    current: usize,
    selected: Option<String>,
    options: Vec<String>,
    mode: QuestionMode,
    show_examples: bool,
    results: Vec<AnswerRecord>,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session in the default mode.
    pub fn start<R: Rng + ?Sized>(dataset: Arc<Dataset>, rng: &mut R) -> Self {
        Self::start_with_mode(dataset, QuestionMode::default(), rng)
    }

    /// Start a session with a freshly shuffled order and empty results.
    pub fn start_with_mode<R: Rng + ?Sized>(
        dataset: Arc<Dataset>,
        mode: QuestionMode,
        rng: &mut R,
    ) -> Self {
        let order = QuestionOrder::shuffled(dataset.len(), rng);
        let mut session = Self {
            dataset,
            order,
            current: 0,
            selected: None,
            options: Vec::new(),
            mode,
            show_examples: false,
            results: Vec::new(),
            phase: SessionPhase::Quiz,
        };
        session.options = session.build_options(rng);
        session
    }

    /// Fresh session over the same dataset. Mode and the examples toggle carry over.
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = Self::start_with_mode(Arc::clone(&self.dataset), self.mode, rng);
        next.show_examples = self.show_examples;
        next
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn order(&self) -> &QuestionOrder {
        &self.order
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn mode(&self) -> QuestionMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Summary
    }

    #[must_use]
    pub fn show_examples(&self) -> bool {
        self.show_examples
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn results(&self) -> &[AnswerRecord] {
        &self.results
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    /// Entry being asked about. Stays on the last entry once the summary is reached.
    #[must_use]
    pub fn current_entry(&self) -> Option<&PhonemeEntry> {
        self.order
            .get(self.current)
            .and_then(|id| self.dataset.get(id))
    }

    /// Question text for the current mode.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.current_entry().map(|entry| self.mode.prompt_for(entry))
    }

    /// Option that scores as correct for the current question and mode.
    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        self.current_entry().map(|entry| self.mode.answer_for(entry))
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.order.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total_questions();
        let answered = self.results.len();
        SessionProgress {
            position: (self.current + 1).min(total),
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    /// Per-entry counts over the answers given so far.
    #[must_use]
    pub fn summary(&self) -> Vec<AggregateRow> {
        compute_summary(&self.results, &self.dataset)
    }

    /// Switch question direction, dropping any pending selection.
    ///
    /// The option set is rebuilt only when the direction actually changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the summary has been reached.
    pub fn set_mode<R: Rng + ?Sized>(
        &self,
        mode: QuestionMode,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        self.ensure_in_quiz()?;
        let mut next = self.clone();
        next.selected = None;
        if mode != self.mode {
            next.mode = mode;
            next.options = next.build_options(rng);
        }
        Ok(next)
    }

    /// Record a tentative choice, replacing any earlier one. Not scored until `advance`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownOption` if `option` is not in the current
    /// option set and `SessionError::Completed` after the summary is reached.
    pub fn select_option(&self, option: &str) -> Result<Self, SessionError> {
        self.ensure_in_quiz()?;
        if !self.options.iter().any(|candidate| candidate == option) {
            return Err(SessionError::UnknownOption(option.to_string()));
        }
        let mut next = self.clone();
        next.selected = Some(option.to_string());
        Ok(next)
    }

    #[must_use]
    pub fn toggle_examples(&self) -> Self {
        let mut next = self.clone();
        next.show_examples = !self.show_examples;
        next
    }

    /// Score the current selection and move on.
    ///
    /// Appends an `AnswerRecord`, then either moves to the next question with a
    /// fresh option set or, after the last question, enters the summary phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when nothing has been selected; the
    /// session is left as it was. Returns `SessionError::Completed` in the
    /// summary phase.
    pub fn advance<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, SessionError> {
        self.ensure_in_quiz()?;
        let selected = self.selected.as_deref().ok_or(SessionError::NoSelection)?;
        let entry = self.current_entry().ok_or(SessionError::Completed)?;

        let record = AnswerRecord {
            question_number: self.results.len() + 1,
            entry_name: entry.name().to_string(),
            correct_symbol: entry.symbol().to_string(),
            chosen_label: Some(selected.to_string()),
            is_correct: selected == self.mode.answer_for(entry),
            examples: entry.examples().to_vec(),
            mode: self.mode,
        };

        let mut next = self.clone();
        next.results.push(record);
        if self.is_last_question() {
            next.phase = SessionPhase::Summary;
        } else {
            next.current += 1;
            next.selected = None;
            next.options = next.build_options(rng);
        }
        Ok(next)
    }

    fn ensure_in_quiz(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Quiz => Ok(()),
            SessionPhase::Summary => Err(SessionError::Completed),
        }
    }

    fn build_options<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let Some(correct) = self.correct_answer() else {
            return Vec::new();
        };
        let pool: Vec<&str> = match self.mode {
            QuestionMode::NameToSymbol => self.dataset.symbols().collect(),
            QuestionMode::SymbolToName => self.dataset.names().collect(),
        };
        generate_options(correct, &pool, OPTION_COUNT, rng)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("dataset_len", &self.dataset.len())
            .field("order", &self.order)
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("mode", &self.mode)
            .field("results_len", &self.results.len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
