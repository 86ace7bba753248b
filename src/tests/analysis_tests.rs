#[cfg(test)]
mod analysis_pipeline_tests {
    use crate::analysis::{analyze_test_file, attach_implementations, extract_collection};
    use crate::config::AnalyzerConfig;
    use crate::tests::test_utils::{parse_go, write_file, ADD_DECL, CALC_IMPL, CALC_TEST};
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_end_to_end_with_companion_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_file(temp_dir.path(), "calc.go", CALC_IMPL);
        let test_path = write_file(temp_dir.path(), "calc_test.go", CALC_TEST);

        let report = analyze_test_file(&test_path, &AnalyzerConfig::default())?;

        assert_eq!(report.test_file, test_path);
        assert_eq!(report.implementation_file, Some(temp_dir.path().join("calc.go")));

        let collection = &report.test_functions;
        assert_eq!(collection.names(), vec!["TestAdd", "TestSub", "TestNoTable"]);

        let add_cases = collection.get("TestAdd").unwrap();
        assert_eq!(add_cases.len(), 1);
        assert_eq!(add_cases[0].name, "positive");
        assert_eq!(add_cases[0].literal_text, r#"{name:"positive", a:2,b:3,want:5}"#);
        assert_eq!(add_cases[0].tested_function_text.as_deref(), Some(ADD_DECL));

        let sub_cases = collection.get("TestSub").unwrap();
        assert_eq!(sub_cases.len(), 2);
        assert!(sub_cases
            .iter()
            .all(|c| c.tested_function_text.as_deref().is_some_and(|t| t.starts_with("func Sub("))));

        // Retained even though it has no table
        assert_eq!(collection.get("TestNoTable"), Some(&[][..]));
        assert_eq!(collection.case_count(), 3);
        assert_eq!(collection.resolved_case_count(), 3);
        Ok(())
    }

    #[test]
    fn test_missing_implementation_file_is_not_fatal() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let test_path = write_file(temp_dir.path(), "calc_test.go", CALC_TEST);

        let report = analyze_test_file(&test_path, &AnalyzerConfig::default())?;

        assert_eq!(report.test_functions.case_count(), 3);
        assert_eq!(report.test_functions.resolved_case_count(), 0);
        Ok(())
    }

    #[test]
    fn test_broken_implementation_file_is_not_fatal() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_file(temp_dir.path(), "calc.go", "package calc\n\nfunc Add(a, b int int {\n");
        let test_path = write_file(temp_dir.path(), "calc_test.go", CALC_TEST);

        let report = analyze_test_file(&test_path, &AnalyzerConfig::default())?;

        assert_eq!(report.test_functions.resolved_case_count(), 0);
        assert_eq!(report.test_functions.get("TestSub").map(|c| c.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_missing_function_only_affects_its_test() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_file(
            temp_dir.path(),
            "calc.go",
            "package calc\n\nfunc Add(a, b int) int {\n\treturn a + b\n}\n",
        );
        let test_path = write_file(temp_dir.path(), "calc_test.go", CALC_TEST);

        let report = analyze_test_file(&test_path, &AnalyzerConfig::default())?;
        let collection = &report.test_functions;

        let add = collection.function("TestAdd").unwrap();
        assert_eq!(add.tested_function.as_deref(), Some("Add"));
        assert_eq!(add.resolved_cases().count(), 1);

        let sub = collection.function("TestSub").unwrap();
        assert_eq!(sub.tested_function.as_deref(), Some("Sub"));
        assert_eq!(sub.resolved_cases().count(), 0);
        assert!(sub.cases.iter().all(|c| c.tested_function_text.is_none()));
        Ok(())
    }

    #[test]
    fn test_test_file_parse_error_is_fatal() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_file(temp_dir.path(), "calc.go", CALC_IMPL);
        let test_path = write_file(temp_dir.path(), "calc_test.go", "package calc\n\nfunc TestX( {\n");

        let result = analyze_test_file(&test_path, &AnalyzerConfig::default());
        assert!(result.is_err_and(|e| e.is_parse()));
        Ok(())
    }

    #[test]
    fn test_file_without_test_suffix_has_no_companion() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_file(temp_dir.path(), "calc.go", CALC_IMPL);
        let test_path = write_file(temp_dir.path(), "calc_cases.go", CALC_TEST);

        let report = analyze_test_file(&test_path, &AnalyzerConfig::default())?;

        assert_eq!(report.implementation_file, None);
        assert_eq!(report.test_functions.len(), 3);
        assert_eq!(report.test_functions.resolved_case_count(), 0);
        Ok(())
    }

    #[test]
    fn test_passes_are_separable_and_deterministic() {
        let test_source = parse_go(CALC_TEST);
        let impl_source = parse_go(CALC_IMPL);
        let config = AnalyzerConfig::default();

        let mut first = extract_collection(&test_source, &config);
        assert_eq!(first.resolved_case_count(), 0);
        attach_implementations(&mut first, &impl_source);

        let mut second = extract_collection(&test_source, &config);
        attach_implementations(&mut second, &impl_source);

        assert_eq!(first, second);
        assert_eq!(first.resolved_case_count(), 3);
    }

    #[test]
    fn test_resolution_soundness() {
        let test_source = parse_go(CALC_TEST);
        let collection = extract_collection(&test_source, &AnalyzerConfig::default());

        for function in collection.iter() {
            if let Some(name) = &function.tested_function {
                let start = (function.location.start_line - 1) as usize;
                let end = function.location.end_line as usize;
                let body: Vec<&str> = CALC_TEST.lines().skip(start).take(end - start).collect();
                let needle = format!("got := {}(", name);
                assert!(
                    body.iter().any(|line| line.contains(&needle)),
                    "{} resolved to {} without a matching assignment",
                    function.name,
                    name
                );
            }
        }
    }
}
