use std::path::PathBuf;

use sheet_widgets::SheetConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] SheetConfigError),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid script {path}: {source}")]
    Script {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::Script { .. } | Self::Config(_) => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HarnessError;
    use sheet_widgets::SheetConfigError;

    #[test]
    fn invalid_argument_exits_with_usage_code() {
        let error = HarnessError::invalid("frame-ms must be > 0");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "invalid argument: frame-ms must be > 0");
    }

    #[test]
    fn config_errors_map_to_input_code() {
        let error = HarnessError::from(SheetConfigError::Validation(vec!["bad".into()]));
        assert_eq!(error.exit_code(), 3);
        assert!(error.to_string().contains("validation errors: bad"));
    }

    #[test]
    fn io_errors_default_to_one() {
        let error = HarnessError::from(std::io::Error::other("disk"));
        assert_eq!(error.exit_code(), 1);
    }
}
