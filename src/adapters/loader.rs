//! File loading
//!
//! Reads the inputs for both utilities from disk:
//! - JSON documents to diff
//! - Feature vectors to cluster (a JSON array of numeric arrays)
//!
//! # Example
//! ```rust,ignore
//! let a = load_json(Path::new("a.json"))?;
//! let vectors = load_vectors(Path::new("points.json"))?;
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

/// Loader errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bad vector file {}: {reason}", .path.display())]
    Shape { path: PathBuf, reason: String },
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Load and parse a JSON document
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let value: Value = serde_json::from_reader(open(path)?).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded JSON document");
    Ok(value)
}

/// Load a non-empty JSON array of equal-length numeric arrays
pub fn load_vectors(path: &Path) -> Result<Vec<Vec<f32>>, LoadError> {
    let vectors: Vec<Vec<f32>> =
        serde_json::from_reader(open(path)?).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let shape = |reason: String| LoadError::Shape {
        path: path.to_path_buf(),
        reason,
    };

    let first = vectors
        .first()
        .ok_or_else(|| shape("no vectors".to_string()))?;
    let dims = first.len();
    if dims == 0 {
        return Err(shape("vectors must have at least one feature".to_string()));
    }
    if let Some((i, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != dims) {
        return Err(shape(format!(
            "vector {} has {} features, expected {}",
            i,
            v.len(),
            dims
        )));
    }

    debug!(path = %path.display(), count = vectors.len(), dims, "loaded vectors");
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(r#"{"a": [1, 2], "b": null}"#);
        let value = load_json(file.path()).unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": null}));
    }

    #[test]
    fn test_load_json_missing_file() {
        let result = load_json(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_json_malformed() {
        let file = write_temp("{not json");
        let err = load_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid JSON in"));
    }

    #[test]
    fn test_load_vectors() {
        let file = write_temp("[[1, 0], [0.5, 2.5]]");
        let vectors = load_vectors(file.path()).unwrap();
        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.5, 2.5]]);
    }

    #[test]
    fn test_load_vectors_ragged() {
        let file = write_temp("[[1, 0], [1, 2, 3]]");
        let err = load_vectors(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
        assert!(err.to_string().contains("vector 1 has 3 features, expected 2"));
    }

    #[test]
    fn test_load_vectors_empty() {
        let file = write_temp("[]");
        assert!(matches!(load_vectors(file.path()), Err(LoadError::Shape { .. })));
    }

    #[test]
    fn test_load_vectors_not_numeric() {
        let file = write_temp(r#"[["a", "b"]]"#);
        assert!(matches!(load_vectors(file.path()), Err(LoadError::Parse { .. })));
    }
}
