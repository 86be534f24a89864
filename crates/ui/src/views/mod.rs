mod quiz;
mod state;
mod summary;
mod word;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use state::ViewError;
pub use summary::SummaryTable;
pub use word::HighlightedWord;
