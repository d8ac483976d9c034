use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the language itself, before any scanning happens.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unable to open file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = SourceError::Read {
            path: PathBuf::from("missing.dtn"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "unable to open file 'missing.dtn'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
