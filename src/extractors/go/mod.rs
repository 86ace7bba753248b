//! Go table-driven test extraction.
//!
//! - `test_functions`: top-level `Test*` declarations
//! - `test_cases`: entries of `[]struct{...}{...}` tables inside them
//! - `resolver`: the function whose result lands in `got`
//! - `implementation`: that function's declaration in the companion file

pub mod implementation;
pub mod resolver;
pub mod syntax;
pub mod test_cases;
pub mod test_functions;

pub use implementation::{companion_path, find_function, FunctionSource};
pub use test_cases::ExtractedCase;
pub use test_functions::{FunctionLocation, TestFunction};

use crate::config::AnalyzerConfig;
use crate::extractors::base::SourceFile;

/// Extracts test functions and their cases from one parsed `_test.go` file
pub struct GoTestExtractor<'a> {
    source: &'a SourceFile,
    config: &'a AnalyzerConfig,
}

impl<'a> GoTestExtractor<'a> {
    pub fn new(source: &'a SourceFile, config: &'a AnalyzerConfig) -> Self {
        Self { source, config }
    }

    pub fn test_functions(&self) -> Vec<TestFunction<'a>> {
        test_functions::find_test_functions(self.source, &self.config.test_prefix, self.config.include_methods)
    }

    pub fn test_cases(&self, function: &TestFunction<'a>) -> Vec<ExtractedCase> {
        match function.body {
            Some(body) => test_cases::extract_test_cases(self.source, body, &self.config.name_field),
            None => Vec::new(),
        }
    }

    pub fn tested_function_name(&self, function: &TestFunction<'a>) -> Option<String> {
        let body = function.body?;
        resolver::find_tested_function_name(self.source, body, &self.config.result_variable)
    }
}
