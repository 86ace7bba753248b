/// CLI plumbing for the casefinder binary
///
/// Modules:
/// - output: prompt / JSON / NDJSON writers
/// - parallel: directory scans fanned out with Rayon
/// - prompt: prompt text for a single test case
pub mod output;
pub mod parallel;
pub mod prompt;

pub use output::{OutputFormat, OutputWriter};
pub use parallel::{ParallelAnalyzer, ScanConfig};
pub use prompt::{create_prompt, render_report};
