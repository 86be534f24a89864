use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use vowel_core::model::QuestionMode;
use vowel_core::{Dataset, HighlightResolver};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::vm::{QuizIntent, QuizVm};
use super::quiz::QuizTestHandles;

pub const TEST_SEED: u64 = 7;

#[derive(Clone)]
struct TestApp {
    dataset: Arc<Dataset>,
    highlighter: Arc<HighlightResolver>,
    mode: QuestionMode,
    show_examples: bool,
}

impl UiApp for TestApp {
    fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    fn highlighter(&self) -> Arc<HighlightResolver> {
        Arc::clone(&self.highlighter)
    }

    fn seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }

    fn initial_mode(&self) -> QuestionMode {
        self.mode
    }

    fn show_examples_on_launch(&self) -> bool {
        self.show_examples
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Send an intent through the view's callback and let the dom settle.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Read the live view model.
    pub fn with_vm<T>(&self, f: impl FnOnce(&QuizVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.peek()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(mode: QuestionMode, show_examples: bool) -> ViewHarness {
    let app = Arc::new(TestApp {
        dataset: Arc::new(Dataset::builtin()),
        highlighter: Arc::new(HighlightResolver::builtin()),
        mode,
        show_examples,
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
