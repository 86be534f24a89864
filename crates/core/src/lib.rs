#![forbid(unsafe_code)]

pub mod dataset;
pub mod highlight;
pub mod model;

pub use dataset::{Dataset, DatasetError};
pub use highlight::{Highlight, HighlightResolver, SCHWA_SYMBOL, WordOverrides};
