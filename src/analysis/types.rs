use crate::extractors::go::FunctionLocation;
use serde::Serialize;
use std::path::PathBuf;

/// One entry of a table-driven test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// Declared label; empty when the entry has no name field
    pub name: String,
    /// Verbatim source of the entry's record literal
    pub literal_text: String,
    /// Declaration of the function under test, once resolved
    pub tested_function_text: Option<String>,
    pub start_line: u32,
    pub end_line: u32,
}

/// A test function and the cases found in its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestFunctionCases {
    pub name: String,
    pub receiver: Option<String>,
    pub location: FunctionLocation,
    /// Name picked by the `got`-assignment heuristic
    pub tested_function: Option<String>,
    pub cases: Vec<TestCase>,
}

impl TestFunctionCases {
    /// Cases whose tested function text is known
    pub fn resolved_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.cases
            .iter()
            .filter(|case| case.tested_function_text.as_deref().is_some_and(|text| !text.is_empty()))
    }
}

/// Test functions of one file in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TestCaseCollection {
    functions: Vec<TestFunctionCases>,
}

impl TestCaseCollection {
    pub fn push(&mut self, function: TestFunctionCases) {
        self.functions.push(function);
    }

    /// Cases of the first test function with this name
    pub fn get(&self, name: &str) -> Option<&[TestCase]> {
        self.function(name).map(|f| f.cases.as_slice())
    }

    pub fn function(&self, name: &str) -> Option<&TestFunctionCases> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestFunctionCases> {
        self.functions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TestFunctionCases> {
        self.functions.iter_mut()
    }

    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn case_count(&self) -> usize {
        self.functions.iter().map(|f| f.cases.len()).sum()
    }

    pub fn resolved_case_count(&self) -> usize {
        self.functions.iter().map(|f| f.resolved_cases().count()).sum()
    }
}

/// Everything learned from one test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub test_file: PathBuf,
    pub implementation_file: Option<PathBuf>,
    pub test_functions: TestCaseCollection,
}
