//! The "first call assigned to the result variable" heuristic.
//!
//! Table-driven Go tests conventionally store the value under test in a
//! variable named `got`:
//!
//! ```go
//! got := strutil.Reverse(tt.in)
//! ```
//!
//! The callee of that assignment is taken to be the tested function. This is
//! pattern matching on one convention, not call-graph analysis: aliasing,
//! helper wrappers and results built over several statements are not
//! followed.

use super::syntax::{walk, GoSyntax, Walk};
use crate::extractors::base::SourceFile;
use tracing::debug;
use tree_sitter::Node;

/// Name of the function whose call result is assigned to `result_variable`.
///
/// Assignments are examined in source order and the first one that
/// qualifies wins. A qualifying assignment has `result_variable` among its
/// targets and a call as its first value; the callee must be a selector
/// (`pkg.Func`, `recv.Method`), whose trailing name is returned, or a bare
/// identifier. Accepting bare identifiers widens the selector-only rule so
/// same-package calls like `got := Add(a, b)` resolve too. Assignments that fail these checks are skipped. Returns
/// `None` when nothing qualifies.
pub fn find_tested_function_name(source: &SourceFile, body: Node<'_>, result_variable: &str) -> Option<String> {
    let mut resolved = None;

    walk(body, &mut |syntax| {
        let GoSyntax::Assignment {
            node,
            targets,
            first_value,
        } = syntax
        else {
            return Walk::Descend;
        };

        let assigns_result = targets.iter().any(|target| {
            matches!(GoSyntax::classify(*target), GoSyntax::Identifier(_))
                && source.node_str(target) == result_variable
        });
        if !assigns_result {
            return Walk::Descend;
        }

        match first_value.and_then(|value| callee_name(source, value)) {
            Some(name) => {
                debug!(
                    "`{}` assigned from {} at line {}",
                    result_variable,
                    name,
                    node.start_position().row + 1
                );
                resolved = Some(name);
                Walk::Stop
            }
            None => Walk::Descend,
        }
    });

    resolved
}

/// Trailing name of a call's callee, if the value is a call
fn callee_name(source: &SourceFile, value: Node<'_>) -> Option<String> {
    let GoSyntax::Call { function, .. } = GoSyntax::classify(value) else {
        return None;
    };

    match GoSyntax::classify(function) {
        GoSyntax::Selector { field, .. } => Some(source.get_node_text(&field)),
        GoSyntax::Identifier(ident) => Some(source.get_node_text(&ident)),
        _ => None,
    }
}
