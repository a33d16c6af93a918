// Error type for psalter file handling.
//
// The pointing engine itself cannot fail; everything fallible here is file
// access, JSON shape, or command-line usage. Paths are carried in the
// variants so the CLI can print a useful message without extra context.

use psalmody_pointing::ConfigError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PsalterError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "unrecognized input format in {}: expected a collection with psalms[] or a single psalm object",
        path.display()
    )]
    UnrecognizedFormat { path: PathBuf },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("missing required {0}")]
    MissingArgument(&'static str),
}

impl PsalterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PsalterError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PsalterError::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = PsalterError::UnrecognizedFormat {
            path: PathBuf::from("psalms/odd.json"),
        };
        assert!(err.to_string().contains("psalms/odd.json"));

        let err = PsalterError::io(
            "out/psalm_1.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to access out/psalm_1.json: denied");
    }

    #[test]
    fn test_missing_argument() {
        let err = PsalterError::MissingArgument("--input path");
        assert_eq!(err.to_string(), "missing required --input path");
    }
}
