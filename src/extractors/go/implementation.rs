use super::syntax::GoSyntax;
use crate::error::{AnalysisError, Result};
use crate::extractors::base::SourceFile;
use std::path::{Path, PathBuf};

/// Full source of a production function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSource {
    pub name: String,
    /// Verbatim declaration: signature and body
    pub text: String,
}

/// Implementation file that sits next to a test file.
///
/// The first occurrence of `test_suffix` in the path is replaced with
/// `implementation_suffix` (`foo_test.go` -> `foo.go`). Paths without the
/// suffix have no companion.
pub fn companion_path(test_path: &Path, test_suffix: &str, implementation_suffix: &str) -> Option<PathBuf> {
    let path = test_path.to_str()?;
    if test_suffix.is_empty() || !path.contains(test_suffix) {
        return None;
    }
    Some(PathBuf::from(path.replacen(test_suffix, implementation_suffix, 1)))
}

/// Find a top-level function or method by exact name.
///
/// The first declaration in file order wins, so with several methods of the
/// same name on different receivers the earliest one is returned.
pub fn find_function(source: &SourceFile, name: &str) -> Result<FunctionSource> {
    let root = source.root_node();
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        if let GoSyntax::FunctionDecl { node, name: ident, .. } = GoSyntax::classify(child) {
            if source.node_str(&ident) == name {
                return Ok(FunctionSource {
                    name: name.to_string(),
                    text: source.get_node_text(&node),
                });
            }
        }
    }

    Err(AnalysisError::FunctionNotFound {
        name: name.to_string(),
        path: source.file_path.clone(),
    })
}
