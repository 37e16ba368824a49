//! Stats module - correlation testing and verdict classification

mod correlation;
mod verdict;

pub use correlation::{CorrelationEngine, CorrelationResult};
pub use verdict::{Verdict, SIGNIFICANCE_THRESHOLD};
