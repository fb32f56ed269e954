//! HAR loading for test case generation.
//!
//! This module parses HAR (HTTP Archive) files into a typed model of the
//! fields the extractor needs. Every field a capture may legitimately omit is
//! an `Option`, so the extractor decides each default explicitly instead of
//! probing for keys at runtime. Fields the generator does not use are ignored
//! and no schema validation is attempted beyond what deserialization needs.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tokio::fs;

use crate::Error;

/// Top level structure for a HAR file.
#[derive(Debug, Deserialize)]
struct HarFile {
    log: HarLog,
}

#[derive(Debug, Deserialize)]
struct HarLog {
    #[serde(default)]
    entries: Vec<HarEntry>,
}

/// One recorded request/response exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: Option<Vec<NameValue>>,
    #[serde(default)]
    pub cookies: Option<Vec<NameValue>>,
    #[serde(default)]
    pub query_string: Option<Vec<NameValue>>,
    #[serde(default)]
    pub post_data: Option<HarPostData>,
}

/// Request body as recorded in `request.postData`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarPostData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub params: Option<Vec<NameValue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarResponse {
    pub status: i64,
}

/// A `{name, value}` pair as used by headers, cookies, query strings and
/// form parameters.
///
/// The value is kept as raw JSON; captures occasionally record numbers or
/// nulls where strings are expected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NameValue {
    pub name: String,
    #[serde(default)]
    pub value: JsonValue,
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parsed representation of a HAR file.
#[derive(Debug)]
pub struct HarContext {
    entries: Vec<HarEntry>,
}

impl HarContext {
    /// Load a HAR file from disk.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(&path).await?;
        Self::from_str(&content).map_err(|e| {
            Error::har(format!(
                "Failed to parse HAR {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Parse HAR content that is already in memory.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> crate::Result<Self> {
        let har: HarFile = serde_json::from_str(content)?;
        Ok(Self {
            entries: har.log.entries,
        })
    }

    /// Recorded entries in capture order.
    pub fn entries(&self) -> &[HarEntry] {
        &self.entries
    }
}
