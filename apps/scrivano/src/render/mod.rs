// Rendering: turns a validated record into a flat text block (directly or
// through a template), then into a PDF file via the paginator.

pub mod content;
pub mod pdf;
pub mod template;

pub use content::{format_amount, format_date, DocumentContent};
pub use template::TemplateStore;
