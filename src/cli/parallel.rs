/// Parallel analysis of every test file under a directory
///
/// Each file is analyzed independently (parse, extract, look up the companion)
/// so files fan out across a Rayon pool. Results come back in path order.
use crate::analysis::{analyze_test_file, FileReport};
use crate::config::AnalyzerConfig;
use anyhow::{anyhow, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Configuration for directory analysis
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of parallel threads (defaults to CPU count)
    pub num_threads: usize,

    pub analyzer: AnalyzerConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

pub struct ParallelAnalyzer {
    config: ScanConfig,
}

impl ParallelAnalyzer {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Analyze every test file under `directory`.
    ///
    /// A file that fails to parse is logged and skipped; it does not abort
    /// the others.
    pub fn analyze_directory(&self, directory: &Path) -> Result<Vec<FileReport>> {
        let files = self.discover_files(directory)?;
        info!("Found {} test files under {}", files.len(), directory.display());

        if files.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads.max(1))
            .build()
            .map_err(|e| anyhow!("Failed to build thread pool: {}", e))?;

        let analyzer = &self.config.analyzer;
        let results: Vec<_> = pool.install(|| {
            files
                .par_iter()
                .map(|file| (file, analyze_test_file(file, analyzer)))
                .collect()
        });

        let reports = results
            .into_iter()
            .filter_map(|(file, result)| match result {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    None
                }
            })
            .collect();

        Ok(reports)
    }

    /// Test files under `directory`, sorted by path
    pub fn discover_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let suffix = &self.config.analyzer.test_suffix;
        let mut files = Vec::new();

        for entry in WalkDir::new(directory).follow_links(false) {
            let entry = entry.map_err(|e| anyhow!("Failed to walk {}: {}", directory.display(), e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_test_file = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix.as_str()));
            if is_test_file {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}
