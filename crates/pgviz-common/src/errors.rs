use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by a buffer source.
///
/// `Connection` happens once at startup; `Query` ends a running session.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("missing extension: {0}")]
    MissingExtension(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    #[error("unknown pointer button: {0}")]
    UnknownButton(String),
}

/// Errors that end the program before the window loop takes over.
///
/// Config and keybind problems never get here: they are logged and the
/// defaults are used.
#[derive(Debug, thiserror::Error)]
pub enum PgvizError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("grid.cell_size = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: grid.cell_size = 0"
        );
    }

    #[test]
    fn db_error_display() {
        let err = DbError::Connection("could not connect to server".into());
        assert_eq!(err.to_string(), "connection failed: could not connect to server");

        let err = DbError::Query("relation \"pg_buffercache\" does not exist".into());
        assert_eq!(
            err.to_string(),
            "query failed: relation \"pg_buffercache\" does not exist"
        );
    }

    #[test]
    fn pgviz_error_from_db() {
        let err: PgvizError = DbError::Connection("refused".into()).into();
        assert!(matches!(err, PgvizError::Db(_)));
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidKeybind("unrecognized modifier: Hyper".into());
        assert_eq!(
            err.to_string(),
            "invalid keybind: unrecognized modifier: Hyper"
        );

        let err = PlatformError::UnknownButton("back".into());
        assert_eq!(err.to_string(), "unknown pointer button: back");
    }

    #[test]
    fn pgviz_error_other() {
        let err = PgvizError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
