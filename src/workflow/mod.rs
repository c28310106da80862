pub mod analyzer;

pub use analyzer::{Analyzer, Phase, Snapshot};
