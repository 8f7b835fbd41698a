//! Stable error codes for callers.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        let details = match self {
            Self::Db(rusqlite::Error::SqliteFailure(e, _)) => Some(serde_json::json!({
                "sqliteCode": format!("{:?}", e.code),
                "extendedCode": e.extended_code,
            })),
            _ => None,
        };
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        }
    }

    /// True when SQLite rejected the statement for a constraint (FK, UNIQUE, NOT NULL).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Db(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::Io("x".into()).code(), "IO_ERROR");
        assert_eq!(AppError::Config("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::Db(rusqlite::Error::QueryReturnedNoRows).code(),
            "DB_ERROR"
        );
    }

    #[test]
    fn serializes_code_and_message() {
        let err = AppError::Config("SHIPMENTS_DB_PATH is empty".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CONFIG_ERROR");
        assert_eq!(
            json["message"],
            "Invalid configuration: SHIPMENTS_DB_PATH is empty"
        );
        assert!(json["details"].is_null());
    }

    #[test]
    fn db_error_message_is_unmodified() {
        let inner = rusqlite::Error::QueryReturnedNoRows;
        let expected = inner.to_string();
        let err: AppError = inner.into();
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_constraint_violation());
    }
}
