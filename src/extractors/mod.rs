// casefinder's extractors module
//
// Tree-sitter based extraction over Go sources. `base` owns parsing and source
// text access; `go` holds the test-specific extractors built on top of it.

pub mod base;
pub mod go;

pub use base::SourceFile;
pub use go::{ExtractedCase, FunctionSource, GoTestExtractor, TestFunction};
