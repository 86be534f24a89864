use dioxus::prelude::*;

use crate::views::QuizView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "IPA Vowel Quiz" }

        main { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    let report = format!("{errors:?}");
                    tracing::error!(%report, "quiz view crashed");
                    rsx! { QuizCrashPanel { report } }
                },
                QuizView {}
            }
        }
    }
}

/// Shown in place of the quiz when rendering fails.
#[component]
fn QuizCrashPanel(report: String) -> Element {
    rsx! {
        section { class: "page crash", role: "alert",
            h2 { "The quiz stopped unexpectedly" }
            p { "Your answers for this round are lost. Restart the app to begin a new round." }
            details {
                summary { "Technical details" }
                pre { "{report}" }
            }
        }
    }
}
