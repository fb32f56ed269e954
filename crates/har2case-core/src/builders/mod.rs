//! Context builder traits and adapters for framework-specific codegen.
pub mod seldom;

use crate::extract::ExtractedEntry;
use crate::templates::{EntryMode, TemplateKind};
use serde_json::Value as JsonValue;

/// Trait for converting an extracted entry into a template context.
pub trait CaseContextBuilder {
    /// `test_name` identifies the generated test method within its class.
    fn build(&self, entry: &ExtractedEntry, test_name: &str) -> crate::Result<JsonValue>;
}

pub struct CaseContext;

impl CaseContext {
    /// Transform extracted entries into template contexts.
    /// In [`EntryMode::All`] with several entries they are numbered `case_1`,
    /// `case_2`, ... in capture order; otherwise every case is named `case`.
    pub fn transform_entries(
        template: TemplateKind,
        entries: &[ExtractedEntry],
        mode: EntryMode,
    ) -> crate::Result<Vec<JsonValue>> {
        let builder = Self::get_builder(template);
        let numbered = mode == EntryMode::All && entries.len() > 1;
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let test_name = if numbered {
                    format!("case_{}", i + 1)
                } else {
                    "case".to_string()
                };
                builder.build(entry, &test_name)
            })
            .collect()
    }

    pub fn get_builder(template: TemplateKind) -> Box<dyn CaseContextBuilder> {
        match template {
            // Custom templates are rendered against the seldom context shape
            TemplateKind::Seldom | TemplateKind::Custom => {
                Box::new(seldom::SeldomCaseContextBuilder)
            }
        }
    }
}
