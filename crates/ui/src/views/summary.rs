use dioxus::prelude::*;

use crate::views::HighlightedWord;
use crate::vm::SummaryRowVm;

/// End-of-round table: one row per vowel in dataset order.
#[component]
pub fn SummaryTable(rows: Vec<SummaryRowVm>, on_restart: EventHandler<()>) -> Element {
    let correct: u32 = rows.iter().map(|row| row.correct).sum();
    let answered: u32 = rows.iter().map(|row| row.correct + row.incorrect).sum();

    rsx! {
        section { class: "summary",
            h2 { "Results" }
            p { class: "summary__score", "{correct} / {answered} correct" }
            table { class: "summary__table",
                thead {
                    tr {
                        th { "#" }
                        th { "Name" }
                        th { "IPA" }
                        th { "Examples" }
                        th { "Correct" }
                        th { "Incorrect" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.number}",
                            td { "{row.number}" }
                            td { "{row.name}" }
                            td { class: "ipa", "{row.symbol}" }
                            td { class: "examples",
                                for word in row.examples.iter().cloned() {
                                    HighlightedWord { word }
                                    " "
                                }
                            }
                            td { class: "count correct", "{row.correct}" }
                            td { class: "count wrong", "{row.incorrect}" }
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn btn-primary",
                onclick: move |_| on_restart.call(()),
                "Play again"
            }
        }
    }
}
