//! Error handling for the har2case generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use har2case_core::error::{Error, Result};
//!
//! fn check_verb(verb: &str) -> Result<()> {
//!     if verb.eq_ignore_ascii_case("patch") {
//!         return Err(Error::unsupported_method(verb));
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(
//!     check_verb("PATCH"),
//!     Err(Error::UnsupportedMethod { .. })
//! ));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for har2case operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for har2case operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// HAR document could not be parsed
    #[error("HAR error: {0}")]
    Har(String),

    /// HAR document contains no entries to turn into test cases
    #[error("HAR file {} contains no entries", .0.display())]
    EmptyHar(PathBuf),

    /// Request method outside GET/POST/PUT/DELETE
    #[error("Unsupported method '{method}': only POST/GET/PUT/DELETE methods are supported")]
    UnsupportedMethod { method: String },

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new HAR error
    pub fn har<S: Into<String>>(msg: S) -> Self {
        Self::Har(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Create an unsupported method error for the offending verb
    pub fn unsupported_method<S: Into<String>>(method: S) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }
}
