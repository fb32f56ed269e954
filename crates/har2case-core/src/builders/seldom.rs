//! seldom-specific case context builder.

use super::CaseContextBuilder;
use crate::extract::ExtractedEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Context for one seldom test method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeldomCaseContext {
    /// Request URL without its query string
    pub url: String,
    /// Header mapping literal
    pub header: String,
    /// Cookie mapping literal
    pub cookie: String,
    /// Lower-cased verb, called as `self.<method>(...)`
    pub method: String,
    /// Data argument, e.g. `params={}` or `json={...}`
    pub params: String,
    /// Status passed to `assertStatusCode`
    pub resp_status: i64,
    /// Test method suffix, rendered as `test_<test_name>`
    pub test_name: String,
}

#[derive(Debug, Clone)]
pub struct SeldomCaseContextBuilder;

impl CaseContextBuilder for SeldomCaseContextBuilder {
    fn build(&self, entry: &ExtractedEntry, test_name: &str) -> crate::Result<JsonValue> {
        let context = SeldomCaseContext {
            url: entry.url.clone(),
            header: entry.headers.clone(),
            cookie: entry.cookies.clone(),
            method: entry.method.as_str().to_string(),
            params: entry.data.to_string(),
            resp_status: entry.status,
            test_name: test_name.to_string(),
        };

        Ok(serde_json::to_value(&context)?)
    }
}
