//! Scrivano — fixed-layout PDF business documents from validated records.
//!
//! The pipeline: a caller supplies a typed record or an untyped key/value
//! mapping → the schema validates (or rejects) it → the record becomes a flat
//! text block, either by direct field formatting or by handlebars template
//! substitution → the paginator lays the block onto A4 pages → the PDF
//! backend writes a single output file.

pub mod builder;
pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod render;

pub use builder::DocumentBuilder;
pub use config::Config;
pub use errors::DocError;
pub use models::{
    AgencyInfo, CommissionAcknowledgementData, CreditNoteData, DealType, PropertyInfo,
    RecipientInfo, RecipientRole, SignatoryInfo,
};
pub use render::DocumentContent;
