/// Prompt text handed to the downstream model, one block per resolved case
use crate::analysis::FileReport;

/// Header printed before the prompts of a file
pub const REPORT_HEADER: &str = "Test cases found:";

/// Embed a tested function, a test case literal and its name in one prompt
pub fn create_prompt(test_name: &str, test_data: &str, fn_implementation: &str) -> String {
    format!(
        "Given this implementation:\n```go\n{}\n```\n\nAnd this test case:\n```go\n{}\n```\n\nThe name '{}' is a good choice?",
        fn_implementation, test_data, test_name
    )
}

/// Render a report as prompt text.
///
/// Test functions without any resolved case are left out entirely, as are
/// the unresolved cases of the others.
pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');

    for function in report.test_functions.iter() {
        let mut resolved = function.resolved_cases().peekable();
        if resolved.peek().is_none() {
            continue;
        }

        out.push_str(&function.name);
        out.push_str(":\n");
        for case in resolved {
            let implementation = case.tested_function_text.as_deref().unwrap_or_default();
            out.push_str(&create_prompt(&case.name, &case.literal_text, implementation));
            out.push_str("\n\n");
        }
    }

    out
}
