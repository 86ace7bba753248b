use super::syntax::GoSyntax;
use crate::extractors::base::SourceFile;
use serde::Serialize;
use tree_sitter::Node;

/// A top-level Go test function found by naming convention
#[derive(Debug, Clone)]
pub struct TestFunction<'tree> {
    pub name: String,
    /// Receiver text for suite-style tests, e.g. `(s *StoreSuite)`
    pub receiver: Option<String>,
    pub node: Node<'tree>,
    pub body: Option<Node<'tree>>,
}

impl TestFunction<'_> {
    pub fn location(&self, source: &SourceFile) -> FunctionLocation {
        let (start_line, end_line) = source.line_span(&self.node);
        FunctionLocation {
            start_line,
            end_line,
        }
    }
}

/// 1-based line span of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionLocation {
    pub start_line: u32,
    pub end_line: u32,
}

/// Test functions declared directly at file level, in declaration order.
///
/// Only top-level declarations are considered; function literals inside
/// bodies are never test functions.
pub fn find_test_functions<'tree>(
    source: &'tree SourceFile,
    prefix: &str,
    include_methods: bool,
) -> Vec<TestFunction<'tree>> {
    let root = source.root_node();
    let mut cursor = root.walk();

    root.named_children(&mut cursor)
        .filter_map(|child| match GoSyntax::classify(child) {
            GoSyntax::FunctionDecl {
                node,
                name,
                receiver,
                body,
            } => {
                if receiver.is_some() && !include_methods {
                    return None;
                }
                let name = source.node_str(&name);
                name.starts_with(prefix).then(|| TestFunction {
                    name: name.to_string(),
                    receiver: receiver.map(|r| source.get_node_text(&r)),
                    node,
                    body,
                })
            }
            _ => None,
        })
        .collect()
}
