use dioxus::prelude::*;

use vowel_core::model::QuestionMode;

use crate::context::AppContext;
use crate::views::{HighlightedWord, SummaryTable, ViewError};
use crate::vm::{QuestionVm, QuizIntent, QuizScreen};

#[cfg(test)]
use crate::vm::QuizVm;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn mode_class(active: bool) -> &'static str {
    if active { "mode active" } else { "mode" }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| ctx.start_quiz());
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;

        let result = vm.write().apply(intent.clone());
        match result {
            Ok(()) => error.set(None),
            Err(err) => {
                tracing::warn!(?intent, error = ?err, "quiz intent rejected");
                error.set(Some(err));
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let screen = vm.read().screen();
    let error_message = error().map(ViewError::message);

    match screen {
        QuizScreen::Question(question) => question_card(&question, error_message, dispatch_intent),
        QuizScreen::Summary(rows) => rsx! {
            div { class: "page quiz",
                header { class: "quiz__header",
                    h1 { "IPA Vowel Quiz" }
                }
                SummaryTable {
                    rows,
                    on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                }
            }
        },
    }
}

fn question_card(
    question: &QuestionVm,
    error_message: Option<&'static str>,
    on_intent: Callback<QuizIntent>,
) -> Element {
    let examples_style = if question.show_examples {
        ""
    } else {
        "display: none;"
    };
    let toggle_label = if question.show_examples {
        "Hide examples"
    } else {
        "Show examples"
    };

    let mode_buttons = QuestionMode::ALL.into_iter().map(|mode| {
        rsx! {
            button {
                key: "{mode}",
                r#type: "button",
                class: mode_class(mode == question.mode),
                disabled: mode == question.mode,
                onclick: move |_| on_intent.call(QuizIntent::SetMode(mode)),
                "{mode.label()}"
            }
        }
    });

    let option_buttons = question.options.iter().map(|option| {
        let label = option.label.clone();
        rsx! {
            button {
                key: "{option.label}",
                r#type: "button",
                class: option.class(),
                onclick: move |_| on_intent.call(QuizIntent::Choose(label.clone())),
                "{option.label}"
            }
        }
    });

    rsx! {
        div { class: "page quiz",
            header { class: "quiz__header",
                h1 { "IPA Vowel Quiz" }
                span { class: "quiz__progress", "{question.progress_label}" }
            }
            nav { class: "quiz__modes", {mode_buttons} }
            p { class: "quiz__prompt", "{question.prompt}" }
            div { class: "quiz__options", {option_buttons} }
            div { class: "quiz__examples",
                button {
                    r#type: "button",
                    class: "btn btn-link",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleExamples),
                    "{toggle_label}"
                }
                ul { style: "{examples_style}",
                    for word in question.examples.iter().cloned() {
                        li { HighlightedWord { word } }
                    }
                }
            }
            if let Some(message) = error_message {
                p { class: "error", role: "alert", "{message}" }
            }
            button {
                r#type: "button",
                class: "btn btn-primary",
                disabled: !question.can_advance,
                onclick: move |_| on_intent.call(QuizIntent::Advance),
                "{question.advance_label}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
