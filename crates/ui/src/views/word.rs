use dioxus::prelude::*;

use crate::vm::HighlightedWordVm;

#[component]
pub fn HighlightedWord(word: HighlightedWordVm) -> Element {
    rsx! {
        span { class: "word",
            "{word.prefix}"
            if word.has_highlight() {
                span { class: "vowel", "{word.highlighted}" }
            }
            "{word.suffix}"
        }
    }
}
