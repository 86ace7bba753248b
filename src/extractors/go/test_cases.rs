use super::syntax::{unwrap_literal_element, walk, GoSyntax, Walk};
use crate::extractors::base::SourceFile;
use tracing::debug;
use tree_sitter::Node;

/// Type shapes that make a composite literal a test table
const SEQUENCE_TYPES: &[&str] = &["slice_type", "array_type", "implicit_length_array_type"];

/// One entry of a table-driven test, as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCase {
    /// Unquoted value of the name field; empty when the entry has none
    pub name: String,
    /// Verbatim source of the whole entry
    pub literal_text: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// Collect every table entry inside a test function body.
///
/// Tables are visited depth-first, so the entries of an outer table come
/// before the entries of any table nested inside them.
pub fn extract_test_cases(source: &SourceFile, body: Node<'_>, name_field: &str) -> Vec<ExtractedCase> {
    let mut cases = Vec::new();

    walk(body, &mut |syntax| {
        if let GoSyntax::CompositeLiteral {
            node,
            type_node,
            body,
        } = syntax
        {
            if SEQUENCE_TYPES.contains(&type_node.kind()) {
                let before = cases.len();
                cases.extend(
                    table_entries(body)
                        .into_iter()
                        .map(|entry| extract_case(source, entry, name_field)),
                );
                debug!(
                    "Table `{}` at line {} yielded {} cases",
                    source.node_str(&type_node),
                    node.start_position().row + 1,
                    cases.len() - before
                );
            }
        }
        Walk::Descend
    });

    cases
}

/// Elements of a table literal that are themselves record literals.
///
/// Index-keyed elements (`0: {...}`) and plain values are not test cases.
fn table_entries(body: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .map(unwrap_literal_element)
        .filter(|element| matches!(element.kind(), "literal_value" | "composite_literal"))
        .collect()
}

fn extract_case(source: &SourceFile, entry: Node<'_>, name_field: &str) -> ExtractedCase {
    let (start_line, end_line) = source.line_span(&entry);
    ExtractedCase {
        name: case_name(source, entry, name_field).unwrap_or_default(),
        literal_text: source.get_node_text(&entry),
        start_line,
        end_line,
    }
}

/// Value of the `name_field` key when it is a string literal
fn case_name(source: &SourceFile, entry: Node<'_>, name_field: &str) -> Option<String> {
    let fields = match entry.kind() {
        "composite_literal" => entry.child_by_field_name("body")?,
        _ => entry,
    };

    let mut cursor = fields.walk();
    let keyed: Vec<Node<'_>> = fields
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "keyed_element")
        .collect();

    keyed.into_iter().find_map(|element| {
        let (key, value) = key_value(element)?;
        let is_name = matches!(GoSyntax::classify(key), GoSyntax::Identifier(_))
            && source.node_str(&key) == name_field;
        if !is_name {
            return None;
        }
        match GoSyntax::classify(value) {
            GoSyntax::StringLiteral(literal) => Some(unquote(source.node_str(&literal)).to_string()),
            _ => None,
        }
    })
}

/// Key and value of a `keyed_element`, with `literal_element` wrappers removed
fn key_value(element: Node<'_>) -> Option<(Node<'_>, Node<'_>)> {
    if let (Some(key), Some(value)) = (
        element.child_by_field_name("key"),
        element.child_by_field_name("value"),
    ) {
        return Some((unwrap_literal_element(key), unwrap_literal_element(value)));
    }

    let mut cursor = element.walk();
    let mut parts = element
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(unwrap_literal_element);
    let key = parts.next()?;
    let value = parts.next()?;
    Some((key, value))
}

/// Strip the delimiters of an interpreted or raw string literal. Escape
/// sequences are kept as written.
fn unquote(literal: &str) -> &str {
    for delimiter in ['"', '`'] {
        if let Some(inner) = literal
            .strip_prefix(delimiter)
            .and_then(|rest| rest.strip_suffix(delimiter))
        {
            return inner;
        }
    }
    literal
}
