// casefinder's test infrastructure
//
// Unit tests for every extraction stage live here, one file per component,
// driven by inline Go sources. CLI-level tests that run the binary live in
// the top-level tests/ directory.



// ============================================================================
// PIPELINE TESTS - Analysis passes, configuration and CLI output
// ============================================================================
pub mod analysis_tests; // End-to-end analysis over files on disk
pub mod config_tests; // AnalyzerConfig defaults and TOML loading
