//! Error types for the sentinel engine crate.

use std::fmt;

pub type Result<T> = std::result::Result<T, SentinelError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SentinelError {
    UnknownAlgorithm(String),
    InvalidBenchmarkSpec(String),
    PrefilterBuild(String),
    IoError(String),
}

impl fmt::Display for SentinelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelError::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {name}"),
            SentinelError::InvalidBenchmarkSpec(msg) => {
                write!(f, "Invalid benchmark specification: {msg}")
            }
            SentinelError::PrefilterBuild(msg) => write!(f, "Prefilter build error: {msg}"),
            SentinelError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for SentinelError {}

impl From<std::io::Error> for SentinelError {
    fn from(err: std::io::Error) -> Self {
        SentinelError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_algorithm() {
        let error = SentinelError::UnknownAlgorithm("xyz".to_string());
        assert_eq!(error.to_string(), "Unknown algorithm: xyz");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_benchmark_spec() {
        let error = SentinelError::InvalidBenchmarkSpec("num_trials must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid benchmark specification: num_trials must be at least 1"
        );
    }

    #[test]
    fn test_prefilter_build() {
        let error = SentinelError::PrefilterBuild("automaton too large".to_string());
        assert_eq!(error.to_string(), "Prefilter build error: automaton too large");
    }

    #[test]
    fn test_io_error() {
        let error = SentinelError::IoError("file not found".to_string());
        assert_eq!(error.to_string(), "IO error: file not found");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sentinel_error: SentinelError = io_error.into();

        match sentinel_error {
            SentinelError::IoError(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_error_equality() {
        let error1 = SentinelError::UnknownAlgorithm("test".to_string());
        let error2 = SentinelError::UnknownAlgorithm("test".to_string());
        let error3 = SentinelError::UnknownAlgorithm("different".to_string());

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
        assert_ne!(
            SentinelError::UnknownAlgorithm("test".to_string()),
            SentinelError::PrefilterBuild("test".to_string())
        );
    }

    #[test]
    fn test_error_clone() {
        let errors = vec![
            SentinelError::UnknownAlgorithm("xyz".to_string()),
            SentinelError::InvalidBenchmarkSpec("bad".to_string()),
            SentinelError::PrefilterBuild("bad".to_string()),
            SentinelError::IoError("bad".to_string()),
        ];

        for error in errors {
            let cloned = error.clone();
            assert_eq!(error, cloned);
        }
    }

    #[test]
    fn test_error_debug() {
        let error = SentinelError::UnknownAlgorithm("xyz".to_string());
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("UnknownAlgorithm"));
        assert!(debug_str.contains("xyz"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<i32> {
            Ok(42)
        }

        let result = test_function();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<i32> {
            Err(SentinelError::UnknownAlgorithm("nope".to_string()))
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            SentinelError::UnknownAlgorithm(name) => assert_eq!(name, "nope"),
            _ => panic!("Expected UnknownAlgorithm"),
        }
    }
}
