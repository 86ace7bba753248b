//! Test file analysis pipeline.
//!
//! Two passes over immutable trees:
//! 1. `extract_collection` walks the test file: test functions, their table
//!    entries and the name of the function each one exercises.
//! 2. `attach_implementations` looks those names up in the companion
//!    implementation file and fills in each case's tested function text.
//!
//! Only a parse failure on the test file itself is an error. Everything that
//! goes wrong around the implementation file is logged and leaves the
//! affected cases unresolved.

pub mod types;

pub use types::{FileReport, TestCase, TestCaseCollection, TestFunctionCases};

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::extractors::base::SourceFile;
use crate::extractors::go::{companion_path, find_function, GoTestExtractor};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Analyze a `_test.go` file and its companion implementation file
pub fn analyze_test_file(path: &Path, config: &AnalyzerConfig) -> Result<FileReport> {
    let source = SourceFile::read(path)?;
    let mut collection = extract_collection(&source, config);

    let implementation_file = companion_path(path, &config.test_suffix, &config.implementation_suffix);
    let wants_lookup = collection.iter().any(|f| f.tested_function.is_some());

    match (&implementation_file, wants_lookup) {
        (_, false) => debug!("No tested functions resolved in {}", path.display()),
        (None, true) => warn!(
            "{} does not end in {}; no implementation file to search",
            path.display(),
            config.test_suffix
        ),
        (Some(implementation), true) => match SourceFile::read(implementation) {
            Ok(implementation_source) => attach_implementations(&mut collection, &implementation_source),
            Err(e) => warn!("Skipping implementation lookup: {}", e),
        },
    }

    info!(
        "{}: {} test functions, {} cases, {} with tested function",
        path.display(),
        collection.len(),
        collection.case_count(),
        collection.resolved_case_count()
    );

    Ok(FileReport {
        test_file: path.to_path_buf(),
        implementation_file,
        test_functions: collection,
    })
}

/// First pass: test functions, their cases and the resolved tested names.
///
/// Every test function gets an entry, even when it has no table.
pub fn extract_collection(source: &SourceFile, config: &AnalyzerConfig) -> TestCaseCollection {
    let extractor = GoTestExtractor::new(source, config);
    let mut collection = TestCaseCollection::default();

    for function in extractor.test_functions() {
        let cases: Vec<TestCase> = extractor
            .test_cases(&function)
            .into_iter()
            .map(|case| TestCase {
                name: case.name,
                literal_text: case.literal_text,
                tested_function_text: None,
                start_line: case.start_line,
                end_line: case.end_line,
            })
            .collect();

        let tested_function = extractor.tested_function_name(&function);
        if tested_function.is_none() && !cases.is_empty() {
            warn!(
                "{}: no `{}` assignment from a call; cases left unresolved",
                function.name, config.result_variable
            );
        }

        collection.push(TestFunctionCases {
            location: function.location(source),
            name: function.name,
            receiver: function.receiver,
            tested_function,
            cases,
        });
    }

    collection
}

/// Second pass: fill in tested function text from the implementation file.
///
/// A name missing from the file is logged and only affects the cases of the
/// test functions that resolved to it.
pub fn attach_implementations(collection: &mut TestCaseCollection, implementation: &SourceFile) {
    let mut lookups: HashMap<String, Option<String>> = HashMap::new();

    for function in collection.iter_mut() {
        let Some(name) = function.tested_function.as_deref() else {
            continue;
        };

        let text = lookups
            .entry(name.to_string())
            .or_insert_with(|| match find_function(implementation, name) {
                Ok(found) => Some(found.text),
                Err(e) => {
                    warn!("Error finding function implementation: {}", e);
                    None
                }
            })
            .clone();

        if let Some(text) = text {
            for case in &mut function.cases {
                case.tested_function_text = Some(text.clone());
            }
        }
    }
}
