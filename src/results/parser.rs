use crate::error::{GridError, Result};
use std::path::Path;

/// Read a per-sample results file.
///
/// See [`parse_results`] for the accepted layout.
pub fn load_results(path: &Path) -> Result<Vec<f64>> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| GridError::file_access(path, e))?;
    parse_results(&contents).map_err(|e| e.in_file(path))
}

/// Extract one value per non-blank line.
///
/// The value is the last whitespace-separated field, so both analysis
/// output (`x y z value`) and bare value columns are accepted. A value that
/// is not a number is reported as `Malformed`.
pub fn parse_results(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| line.split_whitespace().last().map(|field| (i, field)))
        .map(|(i, field)| {
            field.parse::<f64>().map_err(|_| {
                GridError::malformed(format!("line {}: {field:?} is not a number", i + 1))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_four_column_lines() {
        let text = "0 0 5 1.5\n0 10 5 2\n\n10 0 5 -0.25\n";
        assert_eq!(parse_results(text).unwrap(), vec![1.5, 2.0, -0.25]);
    }

    #[test]
    fn test_parse_bare_values() {
        let text = "3\n4.5\n  \n6e2\n";
        assert_eq!(parse_results(text).unwrap(), vec![3.0, 4.5, 600.0]);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = parse_results("1 2 3 4\n1 2 3 oops\n").unwrap_err();
        assert!(matches!(err, GridError::Malformed(ref reason) if reason.starts_with("line 2")));
    }

    #[test]
    fn test_load_results() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 0 5 7").unwrap();
        writeln!(file, "0 1 5 8").unwrap();

        assert_eq!(load_results(file.path()).unwrap(), vec![7.0, 8.0]);
    }

    #[test]
    fn test_load_results_malformed_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 0 5 n/a").unwrap();

        match load_results(file.path()).unwrap_err() {
            GridError::FileAccess { path, reason } => {
                assert_eq!(path, file.path());
                assert!(reason.starts_with("line 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_results_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_results(&dir.path().join("results.txt")).unwrap_err();
        assert!(matches!(err, GridError::FileAccess { .. }));
    }
}
