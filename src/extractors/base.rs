// Parsed source files shared by every Go extractor.
//
// A SourceFile is built once per file and never mutated afterwards. Extractors
// borrow its tree and slice node text straight out of the original bytes, so
// anything they hand back is a verbatim copy of the source span.

use crate::error::{AnalysisError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

/// Longest excerpt of an ERROR node quoted in a parse diagnostic
const ERROR_EXCERPT_LEN: usize = 40;

/// A Go source file together with its syntax tree
pub struct SourceFile {
    pub file_path: PathBuf,
    pub content: String,
    tree: Tree,
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("file_path", &self.file_path)
            .field("bytes", &self.content.len())
            .finish()
    }
}

impl SourceFile {
    /// Parse raw bytes as Go source.
    ///
    /// Fails with `AnalysisError::Parse` when the bytes are not UTF-8 or the
    /// tree contains any ERROR/MISSING node. No partial tree is returned.
    pub fn parse(file_path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self> {
        let file_path = file_path.into();
        let content = String::from_utf8(bytes).map_err(|e| {
            let offset = e.utf8_error().valid_up_to();
            let prefix = &e.as_bytes()[..offset];
            let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
            let column = offset - prefix.iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1) + 1;
            AnalysisError::parse(&file_path, line, column, "source is not valid UTF-8")
        })?;

        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| AnalysisError::parse(&file_path, 1, 1, "parser produced no tree"))?;

        if let Some(bad) = first_syntax_error(tree.root_node()) {
            let pos = bad.start_position();
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                let text = content.get(bad.start_byte()..bad.end_byte()).unwrap_or_default();
                let excerpt: String = text
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .chars()
                    .take(ERROR_EXCERPT_LEN)
                    .collect();
                format!("unexpected `{}`", excerpt.trim())
            };
            return Err(AnalysisError::parse(&file_path, pos.row + 1, pos.column + 1, message));
        }

        debug!(
            "Parsed {} ({} bytes, {} top-level nodes)",
            file_path.display(),
            content.len(),
            tree.root_node().named_child_count()
        );

        Ok(Self {
            file_path,
            content,
            tree,
        })
    }

    /// Read a file from disk and parse it
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, bytes)
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Borrow the exact source text covered by a node
    pub fn node_str(&self, node: &Node) -> &str {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or_default()
    }

    /// Owned copy of the exact source text covered by a node
    pub fn get_node_text(&self, node: &Node) -> String {
        self.node_str(node).to_string()
    }

    /// 1-based (start, end) line numbers of a node
    pub fn line_span(&self, node: &Node) -> (u32, u32) {
        (
            (node.start_position().row + 1) as u32,
            (node.end_position().row + 1) as u32,
        )
    }
}

/// First ERROR or MISSING node in document order
fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }
    None
}
