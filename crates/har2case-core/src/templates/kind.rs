//! Template kinds and entry modes for har2case.
//!
//! # Examples
//!
//! ```
//! use har2case_core::templates::{EntryMode, TemplateKind};
//! use std::str::FromStr;
//!
//! let template = TemplateKind::from_str("seldom").unwrap();
//! assert_eq!(template, TemplateKind::Seldom);
//! assert_eq!(template.to_string(), "seldom");
//! assert_eq!(TemplateKind::default(), TemplateKind::Seldom);
//!
//! assert_eq!("all".parse::<EntryMode>().unwrap(), EntryMode::All);
//! assert_eq!(EntryMode::default(), EntryMode::Last);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Supported template kinds (test frameworks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Built-in seldom (Python) test case
    #[default]
    Seldom,
    /// User-supplied Tera template file
    Custom,
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seldom" => Ok(TemplateKind::Seldom),
            "custom" => Ok(TemplateKind::Custom),
            _ => Err(format!("Unknown template kind: {}", s)),
        }
    }
}

impl TemplateKind {
    /// Returns the template identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seldom => "seldom",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which HAR entries end up in the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    /// Only the last entry is rendered; earlier ones are still validated
    #[default]
    Last,
    /// Every entry becomes its own test method in one class
    All,
}

impl FromStr for EntryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last" => Ok(EntryMode::Last),
            "all" => Ok(EntryMode::All),
            _ => Err(format!("Unknown entry mode: {}", s)),
        }
    }
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::All => "all",
        }
    }
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
