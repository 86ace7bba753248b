//! Typed view over the Go syntax tree.
//!
//! tree-sitter exposes every node as an untyped `Node` with a string kind.
//! The test extractors only care about a handful of shapes, so `GoSyntax`
//! classifies a node into one of them (pulling out the interesting fields up
//! front) and everything else lands in `Other`. `walk` drives a depth-first
//! visit over those classified nodes.

use tree_sitter::Node;

/// The Go node shapes relevant to table-driven test analysis
#[derive(Debug, Clone)]
pub enum GoSyntax<'tree> {
    /// `func Name(...)` or `func (r T) Name(...)`
    FunctionDecl {
        node: Node<'tree>,
        name: Node<'tree>,
        receiver: Option<Node<'tree>>,
        body: Option<Node<'tree>>,
    },
    /// `Type{...}`; `body` is the braced `literal_value`
    CompositeLiteral {
        node: Node<'tree>,
        type_node: Node<'tree>,
        body: Node<'tree>,
    },
    /// `a, b = x, y`, `a, b := x, y` or `var a, b = x, y`
    Assignment {
        node: Node<'tree>,
        targets: Vec<Node<'tree>>,
        first_value: Option<Node<'tree>>,
    },
    Call {
        node: Node<'tree>,
        function: Node<'tree>,
    },
    /// `operand.field`
    Selector {
        node: Node<'tree>,
        operand: Node<'tree>,
        field: Node<'tree>,
    },
    Identifier(Node<'tree>),
    StringLiteral(Node<'tree>),
    Other(Node<'tree>),
}

impl<'tree> GoSyntax<'tree> {
    pub fn classify(node: Node<'tree>) -> Self {
        match node.kind() {
            "function_declaration" | "method_declaration" => match node.child_by_field_name("name") {
                Some(name) => GoSyntax::FunctionDecl {
                    node,
                    name,
                    receiver: node.child_by_field_name("receiver"),
                    body: node.child_by_field_name("body"),
                },
                None => GoSyntax::Other(node),
            },
            "composite_literal" => {
                match (node.child_by_field_name("type"), node.child_by_field_name("body")) {
                    (Some(type_node), Some(body)) => GoSyntax::CompositeLiteral {
                        node,
                        type_node,
                        body,
                    },
                    _ => GoSyntax::Other(node),
                }
            }
            "assignment_statement" | "short_var_declaration" => {
                let targets = node
                    .child_by_field_name("left")
                    .map(expressions)
                    .unwrap_or_default();
                let first_value = node
                    .child_by_field_name("right")
                    .and_then(|right| expressions(right).into_iter().next());
                GoSyntax::Assignment {
                    node,
                    targets,
                    first_value,
                }
            }
            "var_spec" => {
                let mut cursor = node.walk();
                let targets = node.children_by_field_name("name", &mut cursor).collect();
                let first_value = node
                    .child_by_field_name("value")
                    .and_then(|value| expressions(value).into_iter().next());
                GoSyntax::Assignment {
                    node,
                    targets,
                    first_value,
                }
            }
            "call_expression" => match node.child_by_field_name("function") {
                Some(function) => GoSyntax::Call { node, function },
                None => GoSyntax::Other(node),
            },
            "selector_expression" => {
                match (node.child_by_field_name("operand"), node.child_by_field_name("field")) {
                    (Some(operand), Some(field)) => GoSyntax::Selector {
                        node,
                        operand,
                        field,
                    },
                    _ => GoSyntax::Other(node),
                }
            }
            "identifier" | "field_identifier" => GoSyntax::Identifier(node),
            "interpreted_string_literal" | "raw_string_literal" => GoSyntax::StringLiteral(node),
            _ => GoSyntax::Other(node),
        }
    }
}

/// What the visitor wants `walk` to do after seeing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Keep going into this node's children
    Descend,
    /// Abandon the whole traversal
    Stop,
}

/// Depth-first, pre-order visit of `node` and its named descendants.
///
/// Returns `false` if the visitor stopped the traversal early.
pub fn walk<'tree, F>(node: Node<'tree>, visitor: &mut F) -> bool
where
    F: FnMut(GoSyntax<'tree>) -> Walk,
{
    match visitor(GoSyntax::classify(node)) {
        Walk::Stop => return false,
        Walk::Descend => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if !walk(child, visitor) {
            return false;
        }
    }
    true
}

/// Expressions of an `expression_list`, or the node itself for a lone expression
pub fn expressions(node: Node<'_>) -> Vec<Node<'_>> {
    if node.kind() != "expression_list" {
        return vec![node];
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Strip the `literal_element` wrapper newer grammars put around keys and values
pub fn unwrap_literal_element(node: Node<'_>) -> Node<'_> {
    if node.kind() != "literal_element" {
        return node;
    }
    let mut cursor = node.walk();
    let inner = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    inner.unwrap_or(node)
}
