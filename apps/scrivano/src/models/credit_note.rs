use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{AgencyInfo, RecipientInfo};
use super::non_empty;
use crate::errors::DocError;

/// Complete record for a credit note document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteData {
    pub document_date: NaiveDate,
    pub document_number: String,
    pub agency: AgencyInfo,
    pub recipient: RecipientInfo,
    /// Strictly positive, exact decimal.
    pub amount: Decimal,
    pub description: String,
    /// Invoice or document this note refers to.
    #[serde(default)]
    pub reference_document: Option<String>,
}

impl CreditNoteData {
    /// Parse boundary for untyped key/value input.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocError> {
        let data: Self = serde_json::from_value(value)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), DocError> {
        non_empty("document_number", &self.document_number)?;
        self.agency.validate()?;
        self.recipient.validate("recipient")?;
        if self.amount <= Decimal::ZERO {
            return Err(DocError::invalid("amount", "must be strictly positive"));
        }
        non_empty("description", &self.description)?;
        Ok(())
    }
}
