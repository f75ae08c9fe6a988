//! Document builder — the assembly facade tying validation, content
//! production, pagination, and PDF output together.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::DocError;
use crate::layout::{paginate, PageGeometry};
use crate::models::{CommissionAcknowledgementData, CreditNoteData};
use crate::render::pdf::write_pdf;
use crate::render::{DocumentContent, TemplateStore};

/// Builds PDF commercial documents (commission acknowledgements, credit
/// notes) into a fixed output directory.
///
/// Construction is explicit and fallible: the output directory is created
/// (idempotently) in [`DocumentBuilder::create`], never as a hidden
/// constructor side effect. A builder holds no mutable state, so concurrent
/// calls are safe as long as they target distinct output files.
pub struct DocumentBuilder {
    output_dir: PathBuf,
    templates: TemplateStore,
    geometry: PageGeometry,
}

impl DocumentBuilder {
    /// Creates a builder, making sure `output_dir` exists and loading any
    /// user templates from `templates_dir`.
    pub fn create(
        output_dir: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
    ) -> Result<Self, DocError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(DocumentBuilder {
            output_dir,
            templates: TemplateStore::new(templates_dir)?,
            geometry: PageGeometry::a4(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Names of all available templates.
    pub fn list_templates(&self) -> Vec<String> {
        self.templates.list()
    }

    // ── commission acknowledgements ─────────────────────────────────────────

    /// Generates a commission acknowledgement from a typed record.
    /// With no `filename`, a timestamped name is derived.
    pub fn create_commission_acknowledgement(
        &self,
        data: &CommissionAcknowledgementData,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        data.validate()?;
        self.write_document(data.title(), &data.direct_text(), filename, "commission_ack")
    }

    /// Same as [`Self::create_commission_acknowledgement`], from an untyped
    /// key/value mapping.
    pub fn create_commission_acknowledgement_from_value(
        &self,
        value: serde_json::Value,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        let data = CommissionAcknowledgementData::from_value(value)?;
        self.create_commission_acknowledgement(&data, filename)
    }

    /// Generates a commission acknowledgement through a named template.
    pub fn create_commission_acknowledgement_from_template(
        &self,
        data: &CommissionAcknowledgementData,
        template_name: &str,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        data.validate()?;
        let text = self.templates.render(template_name, &data.context())?;
        self.write_document(data.title(), &text, filename, "commission_ack")
    }

    // ── credit notes ────────────────────────────────────────────────────────

    /// Generates a credit note from a typed record.
    pub fn create_credit_note(
        &self,
        data: &CreditNoteData,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        data.validate()?;
        self.write_document(data.title(), &data.direct_text(), filename, "credit_note")
    }

    /// Same as [`Self::create_credit_note`], from an untyped mapping.
    pub fn create_credit_note_from_value(
        &self,
        value: serde_json::Value,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        let data = CreditNoteData::from_value(value)?;
        self.create_credit_note(&data, filename)
    }

    /// Generates a credit note through a named template.
    pub fn create_credit_note_from_template(
        &self,
        data: &CreditNoteData,
        template_name: &str,
        filename: Option<&str>,
    ) -> Result<PathBuf, DocError> {
        data.validate()?;
        let text = self.templates.render(template_name, &data.context())?;
        self.write_document(data.title(), &text, filename, "credit_note")
    }

    // ── templates ───────────────────────────────────────────────────────────

    /// Renders a template against a record without producing a PDF.
    pub fn render_template(
        &self,
        template_name: &str,
        data: &dyn DocumentContent,
    ) -> Result<String, DocError> {
        self.templates.render(template_name, &data.context())
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn write_document(
        &self,
        title: &str,
        text: &str,
        filename: Option<&str>,
        default_stem: &str,
    ) -> Result<PathBuf, DocError> {
        let layout = paginate(text, &self.geometry);
        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!(
                "{default_stem}_{}.pdf",
                Local::now().format("%Y%m%d_%H%M%S")
            ),
        };
        let path = self.output_dir.join(filename);
        write_pdf(&path, title, &layout)?;
        info!(
            path = %path.display(),
            pages = layout.page_count,
            ops = layout.ops.len(),
            "document written"
        );
        Ok(path)
    }
}
