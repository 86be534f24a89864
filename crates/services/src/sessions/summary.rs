use std::collections::HashMap;

use vowel_core::Dataset;
use vowel_core::model::AnswerRecord;

/// Per-entry correct/incorrect counts for the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub name: String,
    pub symbol: String,
    pub examples: Vec<String>,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl AggregateRow {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }
}

/// Fold `results` into one row per dataset entry, in dataset order.
///
/// Entries that were never answered get zero counts. Records whose name is
/// not in `dataset` are ignored.
#[must_use]
pub fn compute_summary(results: &[AnswerRecord], dataset: &Dataset) -> Vec<AggregateRow> {
    let mut counts: HashMap<&str, (u32, u32)> = HashMap::new();
    for record in results {
        let (correct, incorrect) = counts.entry(record.entry_name.as_str()).or_default();
        if record.is_correct {
            *correct = correct.saturating_add(1);
        } else {
            *incorrect = incorrect.saturating_add(1);
        }
    }

    dataset
        .entries()
        .iter()
        .map(|entry| {
            let (correct_count, incorrect_count) =
                counts.get(entry.name()).copied().unwrap_or_default();
            AggregateRow {
                name: entry.name().to_string(),
                symbol: entry.symbol().to_string(),
                examples: entry.examples().to_vec(),
                correct_count,
                incorrect_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vowel_core::model::QuestionMode;

    fn record(number: usize, name: &str, is_correct: bool) -> AnswerRecord {
        AnswerRecord {
            question_number: number,
            entry_name: name.to_string(),
            correct_symbol: String::new(),
            chosen_label: Some("x".to_string()),
            is_correct,
            examples: Vec::new(),
            mode: QuestionMode::NameToSymbol,
        }
    }

    #[test]
    fn empty_results_give_zero_rows_for_every_entry() {
        let dataset = Dataset::builtin();
        let rows = compute_summary(&[], &dataset);
        assert_eq!(rows.len(), dataset.len());
        assert!(rows.iter().all(|row| row.total() == 0));
    }

    #[test]
    fn counts_grouped_by_name_in_dataset_order() {
        let dataset = Dataset::builtin();
        let results = vec![
            record(1, "long o", true),
            record(2, "short a", false),
            record(3, "long o", false),
            record(4, "short a", false),
            record(5, "unknown", true),
        ];
        let rows = compute_summary(&results, &dataset);

        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].name, "short a");
        assert_eq!((rows[0].correct_count, rows[0].incorrect_count), (0, 2));
        assert_eq!(rows[0].examples, ["cat", "camp", "bath", "fan"]);

        let long_o = rows.iter().find(|row| row.name == "long o").unwrap();
        assert_eq!(long_o.symbol, "/oʊ/");
        assert_eq!((long_o.correct_count, long_o.incorrect_count), (1, 1));

        let total: u32 = rows.iter().map(AggregateRow::total).sum();
        assert_eq!(total, 4);
    }
}
