//! Validated, immutable document records.
//!
//! Every record is constructed once from caller-supplied data (typed or via
//! the `from_value` parse boundary), validated, then passed read-only through
//! formatting and rendering.

pub mod commission;
pub mod common;
pub mod credit_note;

pub use commission::CommissionAcknowledgementData;
pub use common::{AgencyInfo, DealType, PropertyInfo, RecipientInfo, RecipientRole, SignatoryInfo};
pub use credit_note::CreditNoteData;

use crate::errors::DocError;

/// Rejects empty or whitespace-only strings, naming the offending field.
pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), DocError> {
    if value.trim().is_empty() {
        Err(DocError::invalid(field, "must not be empty"))
    } else {
        Ok(())
    }
}
