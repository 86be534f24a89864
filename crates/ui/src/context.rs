use std::sync::Arc;

use services::QuizLoopService;
use vowel_core::model::QuestionMode;
use vowel_core::{Dataset, HighlightResolver};

use crate::vm::QuizVm;

pub trait UiApp: Send + Sync {
    fn dataset(&self) -> Arc<Dataset>;
    fn highlighter(&self) -> Arc<HighlightResolver>;

    /// Fixed RNG seed; `None` draws from the OS.
    fn seed(&self) -> Option<u64>;
    fn initial_mode(&self) -> QuestionMode;
    fn show_examples_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    dataset: Arc<Dataset>,
    highlighter: Arc<HighlightResolver>,
    seed: Option<u64>,
    initial_mode: QuestionMode,
    show_examples_on_launch: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dataset: app.dataset(),
            highlighter: app.highlighter(),
            seed: app.seed(),
            initial_mode: app.initial_mode(),
            show_examples_on_launch: app.show_examples_on_launch(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn highlighter(&self) -> Arc<HighlightResolver> {
        Arc::clone(&self.highlighter)
    }

    /// Build the quiz view model with a fresh session.
    #[must_use]
    pub fn start_quiz(&self) -> QuizVm {
        let service = QuizLoopService::new(self.dataset(), self.seed);
        QuizVm::start(
            service,
            self.highlighter(),
            self.initial_mode,
            self.show_examples_on_launch,
        )
    }
}

// Provided by the desktop binary in `crates/app` and by the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
