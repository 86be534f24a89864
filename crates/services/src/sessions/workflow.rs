use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use vowel_core::Dataset;
use vowel_core::model::{AnswerRecord, PhonemeEntry, QuestionMode};

use crate::error::SessionError;
use super::service::QuizSession;

/// Result of advancing past one question.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub session: QuizSession,
    pub record: AnswerRecord,
    pub is_complete: bool,
}

/// Owns the dataset and the random source, and threads the latter through
/// session transitions.
///
/// Seeding makes question order and option sets reproducible.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    dataset: Arc<Dataset>,
    rng: StdRng,
}

impl QuizLoopService {
    /// Service over `dataset`, seeded from `seed` or from the OS when `None`.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { dataset, rng }
    }

    /// Service over the compiled-in vowel table.
    #[must_use]
    pub fn builtin(seed: Option<u64>) -> Self {
        Self::new(Arc::new(Dataset::builtin()), seed)
    }

    /// Validate `entries` and build a service over them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Dataset` when the entries do not form a valid dataset.
    pub fn from_entries(entries: Vec<PhonemeEntry>, seed: Option<u64>) -> Result<Self, SessionError> {
        let dataset = Dataset::new(entries)?;
        Ok(Self::new(Arc::new(dataset), seed))
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Start a new session in the default mode.
    pub fn start_session(&mut self) -> QuizSession {
        self.start_session_with_mode(QuestionMode::default())
    }

    /// Start a new session asking in `mode`.
    pub fn start_session_with_mode(&mut self, mode: QuestionMode) -> QuizSession {
        let session = QuizSession::start_with_mode(Arc::clone(&self.dataset), mode, &mut self.rng);
        tracing::debug!(
            questions = session.total_questions(),
            mode = %mode,
            "quiz session started"
        );
        session
    }

    /// Replace `previous` with a freshly shuffled session.
    pub fn restart(&mut self, previous: &QuizSession) -> QuizSession {
        let session = previous.restart(&mut self.rng);
        tracing::debug!(
            discarded_answers = previous.results().len(),
            mode = %session.mode(),
            "quiz session restarted"
        );
        session
    }

    /// Switch the question direction of `session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is in its summary phase.
    pub fn set_mode(
        &mut self,
        session: &QuizSession,
        mode: QuestionMode,
    ) -> Result<QuizSession, SessionError> {
        let next = session.set_mode(mode, &mut self.rng)?;
        if mode != session.mode() {
            tracing::debug!(mode = %mode, question = session.progress().position, "mode changed");
        }
        Ok(next)
    }

    /// Score the current selection and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` if nothing is selected and
    /// `SessionError::Completed` if the session already finished.
    pub fn advance(&mut self, session: &QuizSession) -> Result<SessionAnswerResult, SessionError> {
        let next = session.advance(&mut self.rng)?;
        let record = next
            .results()
            .last()
            .cloned()
            .ok_or(SessionError::Completed)?;

        tracing::debug!(
            question = record.question_number,
            entry = %record.entry_name,
            correct = record.is_correct,
            "answer recorded"
        );
        if next.is_complete() {
            let correct = next.results().iter().filter(|r| r.is_correct).count();
            tracing::debug!(
                correct,
                total = next.results().len(),
                "quiz session completed"
            );
        }

        Ok(SessionAnswerResult {
            is_complete: next.is_complete(),
            record,
            session: next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vowel_core::DatasetError;

    #[test]
    fn seeded_services_agree() {
        let mut a = QuizLoopService::builtin(Some(99));
        let mut b = QuizLoopService::builtin(Some(99));
        assert_eq!(a.start_session(), b.start_session());
        assert_eq!(a.start_session(), b.start_session());
    }

    #[test]
    fn advance_reports_record_and_completion() {
        let mut service = QuizLoopService::builtin(Some(1));
        let mut session = service.start_session();
        let mut completed = 0;
        while !session.is_complete() {
            let choice = session.options()[0].clone();
            let picked = session.select_option(&choice).unwrap();
            let result = service.advance(&picked).unwrap();
            assert_eq!(result.record.chosen_label.as_deref(), Some(choice.as_str()));
            assert_eq!(result.is_complete, result.session.is_complete());
            if result.is_complete {
                completed += 1;
            }
            session = result.session;
        }
        assert_eq!(completed, 1);
        assert_eq!(session.results().len(), 17);
    }

    #[test]
    fn restart_keeps_mode_and_clears_answers() {
        let mut service = QuizLoopService::builtin(Some(5));
        let session = service.start_session_with_mode(QuestionMode::SymbolToName);
        let correct = session.correct_answer().unwrap().to_string();
        let answered = service
            .advance(&session.select_option(&correct).unwrap())
            .unwrap()
            .session;

        let restarted = service.restart(&answered);
        assert!(restarted.results().is_empty());
        assert_eq!(restarted.mode(), QuestionMode::SymbolToName);
    }

    #[test]
    fn set_mode_through_service() {
        let mut service = QuizLoopService::builtin(Some(8));
        let session = service.start_session();
        let switched = service.set_mode(&session, QuestionMode::SymbolToName).unwrap();
        assert_eq!(switched.mode(), QuestionMode::SymbolToName);
    }

    #[test]
    fn from_entries_validates_dataset() {
        let err = QuizLoopService::from_entries(Vec::new(), None).unwrap_err();
        assert_eq!(err, SessionError::Dataset(DatasetError::Empty));

        let service = QuizLoopService::from_entries(
            vec![PhonemeEntry::new("short a", "/æ/", ["cat"])],
            Some(3),
        )
        .unwrap();
        assert_eq!(service.dataset().len(), 1);
    }
}
