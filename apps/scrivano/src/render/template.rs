//! Template store — handlebars templates filling the text block ahead of
//! pagination.
//!
//! Two templates ship embedded in the binary (one per document kind); any
//! `.hbs` file in the configured templates directory is registered next to
//! them under its file stem and may shadow neither built-in name.

use handlebars::Handlebars;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::errors::DocError;

const COMMISSION_TEMPLATE: &str = include_str!("../../templates/commission_acknowledgement.hbs");
const CREDIT_NOTE_TEMPLATE: &str = include_str!("../../templates/credit_note.hbs");

const BUILTIN_NAMES: &[&str] = &["commission_acknowledgement", "credit_note"];

/// Registry of named text templates.
pub struct TemplateStore {
    registry: Handlebars<'static>,
    dir: PathBuf,
}

impl TemplateStore {
    /// Builds the store: registers the embedded templates, then every `.hbs`
    /// file found in `dir` (the directory is optional and not created).
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DocError> {
        let dir = dir.into();
        let mut registry = Handlebars::new();
        // Output is plain text for a PDF, not HTML.
        registry.register_escape_fn(handlebars::no_escape);

        registry
            .register_template_string("commission_acknowledgement", COMMISSION_TEMPLATE)
            .map_err(|e| DocError::Template(e.to_string()))?;
        registry
            .register_template_string("credit_note", CREDIT_NOTE_TEMPLATE)
            .map_err(|e| DocError::Template(e.to_string()))?;

        let mut store = TemplateStore { registry, dir };
        store.load_directory()?;
        Ok(store)
    }

    fn load_directory(&mut self) -> Result<(), DocError> {
        if !self.dir.is_dir() {
            return Ok(());
        }
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if BUILTIN_NAMES.contains(&stem) {
                // Built-ins win; a user file of the same name is ignored.
                continue;
            }
            self.registry
                .register_template_file(stem, &path)
                .map_err(|e| DocError::Template(e.to_string()))?;
        }
        Ok(())
    }

    /// Renders a template by name against a flattened document context.
    pub fn render(&self, name: &str, context: &Value) -> Result<String, DocError> {
        let name = normalize_name(name);
        if !self.registry.has_template(name) {
            return Err(DocError::TemplateNotFound(name.to_string()));
        }
        self.registry
            .render(name, context)
            .map_err(|e| DocError::Template(e.to_string()))
    }

    /// All registered template names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.get_templates().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Accepts both bare names and `name.hbs`.
fn normalize_name(name: &str) -> &str {
    name.strip_suffix(".hbs").unwrap_or(name)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
