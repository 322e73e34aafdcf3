use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Payload error: {0}")]
    Payload(String),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Payload(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Payload: {}", msg)));
        }
        AppError::Logger(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Logger: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = AppError::Config("log level cannot be empty".into());
        assert_eq!(e.to_string(), "Config error: log level cannot be empty");

        let e = AppError::Payload("expected value".into());
        assert!(e.to_string().contains("expected value"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(matches!(e, AppError::Io(_)));
        assert!(e.to_string().contains("file missing"));
    }
}
