//! Template rendering for generated test cases

// Internal imports (std, crate)
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::error::{Error, Result};

use super::{EntryMode, TemplateKind};

// External imports (alphabetized)
use serde_json::{Map, Value as JsonValue};
use tera::{Context, Tera};

const SELDOM_CASE: &str = "seldom/testcase.py.tera";
const SELDOM_SUITE: &str = "seldom/testsuite.py.tera";
const CUSTOM: &str = "custom";

const SELDOM_CASE_SOURCE: &str = include_str!("../../templates/seldom/testcase.py.tera");
const SELDOM_SUITE_SOURCE: &str = include_str!("../../templates/seldom/testsuite.py.tera");

const DEFAULT_EXTENSION: &str = "py";

/// Loads and renders test case templates
#[derive(Debug, Clone)]
pub struct TemplateManager {
    /// Tera instance holding the templates for `kind`
    tera: Arc<Tera>,
    kind: TemplateKind,
    /// Template file backing a custom kind
    template_path: Option<PathBuf>,
}

impl TemplateManager {
    /// Create a new TemplateManager for the given template kind
    ///
    /// # Arguments
    /// * `template_kind` - The kind of template to use
    /// * `template_path` - Tera template file, required for [`TemplateKind::Custom`]
    ///   and ignored otherwise.
    pub async fn new(template_kind: TemplateKind, template_path: Option<PathBuf>) -> Result<Self> {
        let mut tera = Tera::default();

        let template_path = match template_kind {
            TemplateKind::Seldom => {
                tera.add_raw_templates(vec![
                    (SELDOM_CASE, SELDOM_CASE_SOURCE),
                    (SELDOM_SUITE, SELDOM_SUITE_SOURCE),
                ])?;
                None
            }
            TemplateKind::Custom => {
                let path = template_path.ok_or_else(|| {
                    Error::config("a template file is required for the custom template kind")
                })?;
                let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
                    Error::template(format!(
                        "Failed to read template {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                tera.add_raw_template(CUSTOM, &source).map_err(|e| {
                    Error::template(format!(
                        "Failed to parse template {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Some(path)
            }
        };

        Ok(TemplateManager {
            tera: Arc::new(tera),
            kind: template_kind,
            template_path,
        })
    }

    /// Get the template kind this template manager is configured for
    pub fn template_kind(&self) -> TemplateKind {
        self.kind
    }

    /// Template file backing a custom kind
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    /// Extension of the generated source file, without the leading dot.
    ///
    /// Custom templates take it from their own file name, so `case.py.tera`
    /// generates `.py` files.
    pub fn output_extension(&self) -> String {
        self.template_path
            .as_deref()
            .and_then(extension_from_template)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Render the generated file for `cases` according to `mode`.
    ///
    /// `cases` holds every entry of the capture. In [`EntryMode::Last`] the
    /// single-case template is rendered against the final case; custom
    /// templates still see the full list under `cases`.
    pub fn render(&self, cases: &[JsonValue], mode: EntryMode) -> Result<String> {
        if cases.is_empty() {
            return Err(Error::template("No test cases to render"));
        }
        match mode {
            EntryMode::Last => self.render_template(self.case_template_name(), cases),
            EntryMode::All => self.render_suite(cases),
        }
    }

    /// Render a file holding a single test case
    pub fn render_case(&self, case: &JsonValue) -> Result<String> {
        self.render_template(self.case_template_name(), std::slice::from_ref(case))
    }

    /// Render a file holding one test method per case
    pub fn render_suite(&self, cases: &[JsonValue]) -> Result<String> {
        let name = match self.kind {
            TemplateKind::Seldom => SELDOM_SUITE,
            TemplateKind::Custom => CUSTOM,
        };
        self.render_template(name, cases)
    }

    fn case_template_name(&self) -> &'static str {
        match self.kind {
            TemplateKind::Seldom => SELDOM_CASE,
            TemplateKind::Custom => CUSTOM,
        }
    }

    fn render_template(&self, template_name: &str, cases: &[JsonValue]) -> Result<String> {
        let context = build_context(cases)?;

        log::debug!("Rendering template: {}", template_name);
        self.tera.render(template_name, &context).map_err(|e| {
            log::error!("Template rendering failed for '{}': {}", template_name, e);
            Error::template(format!(
                "Failed to render template '{}': {}",
                template_name, e
            ))
        })
    }
}

// The last case's fields sit at the top level, every case under `cases`.
fn build_context(cases: &[JsonValue]) -> Result<Context> {
    let mut context_map = match cases.last() {
        Some(JsonValue::Object(obj)) => obj.clone(),
        Some(_) => return Err(Error::template("Case context must be a JSON object")),
        None => Map::new(),
    };
    context_map.insert("cases".to_string(), JsonValue::Array(cases.to_vec()));

    let mut tera_context = Context::new();
    for (k, v) in &context_map {
        tera_context.insert(k, v);
    }
    Ok(tera_context)
}

fn extension_from_template(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name = name.strip_suffix(".tera").unwrap_or(name);
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}
