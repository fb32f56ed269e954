//! har2case Core Library
//!
//! This library turns HAR (HTTP Archive) captures into test case source
//! files for the seldom test framework, or for any framework through a
//! custom Tera template.

pub mod builders;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod har;
pub mod mapping;
pub mod templates;

pub use crate::{
    config::Config,
    error::{Error, Result},
    extract::{extract_entry, DataArgument, ExtractedEntry, HttpMethod},
    generate::generate,
    har::HarContext,
    templates::{EntryMode, TemplateKind, TemplateManager},
};
