use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{}: file not found", .path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: could not be opened", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Raised when close is invoked on a handle that was never assigned.
    #[error("null reference: close() invoked on an unset handle")]
    NullReference,
    #[error(transparent)]
    IOError(std::io::Error),
    #[error(transparent)]
    FailedToInitialiseLogger(log::SetLoggerError),
}

impl DemoError {
    /// Classify a failure to open `path`.
    pub fn opening(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();

        match source.kind() {
            std::io::ErrorKind::NotFound => DemoError::NotFound { path, source },
            _ => DemoError::Open { path, source },
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(value: std::io::Error) -> Self {
        DemoError::IOError(value)
    }
}

impl From<log::SetLoggerError> for DemoError {
    fn from(value: log::SetLoggerError) -> Self {
        DemoError::FailedToInitialiseLogger(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::DemoError;

    #[test]
    fn missing_path_is_not_found() {
        let err = DemoError::opening("nope.txt", Error::from(ErrorKind::NotFound));

        assert!(matches!(err, DemoError::NotFound { .. }));
        assert_eq!(err.to_string(), "nope.txt: file not found");
    }

    #[test]
    fn other_open_failures_keep_their_path() {
        let err = DemoError::opening("locked.txt", Error::from(ErrorKind::PermissionDenied));

        match err {
            DemoError::Open { path, .. } => assert_eq!(path.to_str(), Some("locked.txt")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn null_reference_carries_no_domain_detail() {
        let msg = DemoError::NullReference.to_string();

        assert!(msg.starts_with("null reference"));
        assert!(!msg.contains("not found"));
    }
}
