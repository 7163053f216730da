//! Error type shared by the loader, the sampler and the results reshaper.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    /// Input file is missing, unreadable or malformed.
    #[error("cannot use input file {}: {reason}", .path.display())]
    FileAccess { path: PathBuf, reason: String },

    /// Text that does not have the expected structure, before a path is known.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// No boundary points to derive a grid from.
    #[error("no boundary points found (expected Polygon or MultiPolygon features)")]
    EmptyInput,

    /// Invalid numeric argument.
    #[error("invalid {name}: {reason}")]
    Argument { name: &'static str, reason: String },
}

impl GridError {
    pub fn file_access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::Malformed(reason.to_string())
    }

    /// Attach the source file to a parse failure; other variants pass through
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Malformed(reason) => Self::FileAccess {
                path: path.into(),
                reason,
            },
            other => other,
        }
    }

    pub fn argument(name: &'static str, reason: impl ToString) -> Self {
        Self::Argument {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Parse a positive lattice dimension from a command-line string.
pub fn parse_dimension(name: &'static str, raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| GridError::argument(name, format!("expected a positive integer, got {raw:?}")))?;
    if value == 0 {
        return Err(GridError::argument(name, "must be at least 1"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("Nx", "100").unwrap(), 100);
        assert_eq!(parse_dimension("Nx", " 3 ").unwrap(), 3);
    }

    #[test]
    fn test_parse_dimension_rejects_bad_input() {
        for raw in ["abc", "-2", "1.5", "", "0"] {
            let err = parse_dimension("Ny", raw).unwrap_err();
            assert!(matches!(err, GridError::Argument { name: "Ny", .. }), "{raw}");
        }
    }

    #[test]
    fn test_malformed_gains_path() {
        let err = GridError::malformed("line 3: \"x\" is not a number").in_file("results.txt");
        match err {
            GridError::FileAccess { path, reason } => {
                assert_eq!(path, PathBuf::from("results.txt"));
                assert_eq!(reason, "line 3: \"x\" is not a number");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            GridError::EmptyInput.in_file("a.geojson"),
            GridError::EmptyInput
        ));
    }

    #[test]
    fn test_file_access_message() {
        let err = GridError::file_access("missing.geojson", "not found");
        assert_eq!(
            err.to_string(),
            "cannot use input file missing.geojson: not found"
        );
    }
}
