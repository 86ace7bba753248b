// casefinder - Table-driven Go test case extraction
//!
//! casefinder finds the table-driven test cases in a Go `_test.go` file,
//! works out which production function each test exercises and pulls that
//! function's source out of the companion implementation file. The result
//! feeds prompt construction for reviewing test case names.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use analysis::{analyze_test_file, FileReport, TestCase, TestCaseCollection, TestFunctionCases};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use extractors::SourceFile;
