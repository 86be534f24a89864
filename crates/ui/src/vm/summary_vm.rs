use services::AggregateRow;
use vowel_core::HighlightResolver;

use crate::vm::word_vm::{HighlightedWordVm, map_highlighted_words};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    /// 1-based row number in dataset order.
    pub number: usize,
    pub name: String,
    pub symbol: String,
    pub examples: Vec<HighlightedWordVm>,
    pub correct: u32,
    pub incorrect: u32,
}

#[must_use]
pub fn map_summary_rows(rows: &[AggregateRow], resolver: &HighlightResolver) -> Vec<SummaryRowVm> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| SummaryRowVm {
            number: index + 1,
            name: row.name.clone(),
            symbol: row.symbol.clone(),
            examples: map_highlighted_words(resolver, &row.examples, &row.symbol),
            correct: row.correct_count,
            incorrect: row.incorrect_count,
        })
        .collect()
}
