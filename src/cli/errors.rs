//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use handlebars::TemplateError;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Bad or incomplete configuration
    ConfigError,
    /// Database unreachable or query failed
    DatabaseError,
    /// Template compilation failed
    TemplateError,
    /// Runtime, socket or listener failure
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "QUOTEBOOK_CONFIG_ERROR",
            Self::DatabaseError => "QUOTEBOOK_DATABASE_ERROR",
            Self::TemplateError => "QUOTEBOOK_TEMPLATE_ERROR",
            Self::IoError => "QUOTEBOOK_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Database error
    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DatabaseError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(sqlx::Error::Configuration(inner)) => {
                Self::config_error(format!("Invalid database configuration: {}", inner))
            }
            other => Self::database_error(other.to_string()),
        }
    }
}

impl From<TemplateError> for CliError {
    fn from(e: TemplateError) -> Self {
        Self::new(CliErrorCode::TemplateError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
