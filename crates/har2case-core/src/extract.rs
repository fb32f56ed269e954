//! Entry extraction: turns one HAR entry into the pieces of a test case.
//!
//! The extractor is framework neutral. It resolves the request URL, the HTTP
//! verb, the header and cookie mapping literals, the data argument and the
//! expected status. Builders in [`crate::builders`] then shape the result for
//! a particular template.

use std::fmt;
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    har::{HarEntry, HarPostData},
    mapping::{optional_mapping_literal, to_mapping_literal},
};

const JSON_MIME_TYPE: &str = "application/json";

/// HTTP verbs a test case can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(Error::unsupported_method(s)),
        }
    }
}

impl HttpMethod {
    /// Lower-cased verb, as used for the generated call
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The request payload argument of the generated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataArgument {
    /// `data=<mapping>` form body
    Form(String),
    /// `json=<text>` raw JSON body, emitted verbatim
    Json(String),
    /// `params=<mapping>` query string
    Query(String),
}

impl fmt::Display for DataArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form(mapping) => write!(f, "data={}", mapping),
            Self::Json(text) => write!(f, "json={}", text),
            Self::Query(mapping) => write!(f, "params={}", mapping),
        }
    }
}

/// Everything a template needs to know about one recorded exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    /// Request URL without its query string
    pub url: String,
    pub method: HttpMethod,
    /// Header mapping literal
    pub headers: String,
    /// Cookie mapping literal
    pub cookies: String,
    pub data: DataArgument,
    /// Recorded response status
    pub status: i64,
}

/// Extract the test case pieces from a single HAR entry.
///
/// Fails with [`Error::UnsupportedMethod`] for verbs other than
/// GET/POST/PUT/DELETE.
pub fn extract_entry(entry: &HarEntry) -> Result<ExtractedEntry> {
    let request = &entry.request;
    let method: HttpMethod = request.method.parse()?;

    let data = match method {
        HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => {
            body_argument(request.post_data.as_ref())
        }
        HttpMethod::Get => DataArgument::Query(optional_mapping_literal(
            request.query_string.as_deref(),
        )),
    };

    Ok(ExtractedEntry {
        url: strip_query(&request.url).to_string(),
        method,
        headers: optional_mapping_literal(request.headers.as_deref()),
        cookies: optional_mapping_literal(request.cookies.as_deref()),
        data,
        status: entry.response.status,
    })
}

/// Extract every entry, failing on the first unsupported one.
pub fn extract_entries(entries: &[HarEntry]) -> Result<Vec<ExtractedEntry>> {
    entries.iter().map(extract_entry).collect()
}

/// Truncate a URL at its first `?`.
pub fn strip_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

// Form params first, then the mime type decides. A missing mime type forces
// an empty JSON body even when form params were recorded.
fn body_argument(post_data: Option<&HarPostData>) -> DataArgument {
    let form = match post_data.and_then(|p| p.params.as_deref()) {
        Some(params) => DataArgument::Form(to_mapping_literal(params)),
        None => DataArgument::Form("{}".to_string()),
    };

    match post_data.and_then(|p| p.mime_type.as_deref()) {
        Some(JSON_MIME_TYPE) => {
            let text = post_data
                .and_then(|p| p.text.clone())
                .unwrap_or_else(|| "{}".to_string());
            DataArgument::Json(text)
        }
        Some(_) => form,
        None => DataArgument::Json("{}".to_string()),
    }
}
