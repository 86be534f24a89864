use std::sync::Arc;

use services::{QuizLoopService, QuizSession};
use vowel_core::HighlightResolver;
use vowel_core::model::QuestionMode;

use crate::views::ViewError;
use crate::vm::summary_vm::{SummaryRowVm, map_summary_rows};
use crate::vm::word_vm::{HighlightedWordVm, map_highlighted_words};

/// Example words shown under a question.
const EXAMPLES_SHOWN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(String),
    SetMode(QuestionMode),
    ToggleExamples,
    Advance,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    PickedCorrect,
    PickedWrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub state: OptionState,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            OptionState::Idle => "choice",
            OptionState::PickedCorrect => "choice picked correct",
            OptionState::PickedWrong => "choice picked wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub progress_label: String,
    pub mode: QuestionMode,
    pub show_examples: bool,
    pub examples: Vec<HighlightedWordVm>,
    pub options: Vec<OptionVm>,
    pub can_advance: bool,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Summary(Vec<SummaryRowVm>),
}

/// Holds the running session and turns it into render-ready data.
pub struct QuizVm {
    service: QuizLoopService,
    session: QuizSession,
    highlighter: Arc<HighlightResolver>,
}

impl QuizVm {
    #[must_use]
    pub fn start(
        mut service: QuizLoopService,
        highlighter: Arc<HighlightResolver>,
        mode: QuestionMode,
        show_examples: bool,
    ) -> Self {
        let mut session = service.start_session_with_mode(mode);
        if show_examples {
            session = session.toggle_examples();
        }
        Self {
            service,
            session,
            highlighter,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Apply a user intent. On error the current session is kept as is.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` matching the rejected transition.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        let next = match intent {
            QuizIntent::Choose(option) => self.session.select_option(&option)?,
            QuizIntent::SetMode(mode) => self.service.set_mode(&self.session, mode)?,
            QuizIntent::ToggleExamples => self.session.toggle_examples(),
            QuizIntent::Advance => self.service.advance(&self.session)?.session,
            QuizIntent::Restart => self.service.restart(&self.session),
        };
        self.session = next;
        Ok(())
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        if self.session.is_complete() {
            QuizScreen::Summary(self.summary_rows())
        } else {
            QuizScreen::Question(self.question())
        }
    }

    #[must_use]
    pub fn summary_rows(&self) -> Vec<SummaryRowVm> {
        map_summary_rows(&self.session.summary(), &self.highlighter)
    }

    fn question(&self) -> QuestionVm {
        let session = &self.session;
        let correct = session.correct_answer();
        let selected = session.selected_option();

        let options = session
            .options()
            .iter()
            .map(|label| {
                let state = match selected {
                    Some(choice) if choice == label.as_str() => {
                        if correct == Some(choice) {
                            OptionState::PickedCorrect
                        } else {
                            OptionState::PickedWrong
                        }
                    }
                    _ => OptionState::Idle,
                };
                OptionVm {
                    label: label.clone(),
                    state,
                }
            })
            .collect();

        let examples = session
            .current_entry()
            .map(|entry| {
                let shown = entry.examples().len().min(EXAMPLES_SHOWN);
                map_highlighted_words(&self.highlighter, &entry.examples()[..shown], entry.symbol())
            })
            .unwrap_or_default();

        QuestionVm {
            prompt: session.prompt().unwrap_or_default().to_string(),
            progress_label: session.progress().label(),
            mode: session.mode(),
            show_examples: session.show_examples(),
            examples,
            options,
            can_advance: selected.is_some(),
            advance_label: if session.is_last_question() {
                "See results"
            } else {
                "Next"
            },
        }
    }
}
