mod analyze;
mod examples;

pub use analyze::{run_analyze, AnalyzeSource};
pub use examples::run_examples;
