#[cfg(test)]
mod analyzer_config_tests {
    use crate::config::AnalyzerConfig;
    use crate::error::AnalysisError;
    use crate::tests::test_utils::write_file;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_go_conventions() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.test_prefix, "Test");
        assert_eq!(config.name_field, "name");
        assert_eq!(config.result_variable, "got");
        assert_eq!(config.test_suffix, "_test.go");
        assert_eq!(config.implementation_suffix, ".go");
        assert!(config.include_methods);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalyzerConfig::from_toml("result_variable = \"actual\"\ninclude_methods = false\n").unwrap();

        assert_eq!(config.result_variable, "actual");
        assert!(!config.include_methods);
        assert_eq!(config.test_prefix, "Test");
        assert_eq!(config.name_field, "name");
    }

    #[test]
    fn test_empty_test_suffix_is_rejected() {
        let err = AnalyzerConfig::from_toml("test_suffix = \"\"").unwrap_err();
        assert!(err.contains("test_suffix"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(AnalyzerConfig::from_toml("test_prefix = ").is_err());
        assert!(AnalyzerConfig::from_toml("include_methods = \"yes\"").is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = write_file(temp_dir.path(), "casefinder.toml", "name_field = \"desc\"\n");

        let config = AnalyzerConfig::load(&path)?;
        assert_eq!(config.name_field, "desc");
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = AnalyzerConfig::load(std::path::Path::new("/no/such/casefinder.toml"));
        assert!(matches!(result, Err(AnalysisError::Config { .. })));
    }
}
