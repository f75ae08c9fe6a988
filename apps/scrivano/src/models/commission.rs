use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{AgencyInfo, DealType, PropertyInfo, RecipientInfo, SignatoryInfo};
use super::non_empty;
use crate::errors::DocError;

/// Complete record for a commission acknowledgement document.
///
/// Supports multiple recipients and multiple signatories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionAcknowledgementData {
    pub document_date: NaiveDate,
    pub agency: AgencyInfo,
    /// Ordered, non-empty list of recipients (sellers/buyers/...).
    pub recipients: Vec<RecipientInfo>,
    pub property: PropertyInfo,
    /// Ordered, non-empty list of signatories.
    pub signatories: Vec<SignatoryInfo>,
    pub deal_type: DealType,
    /// Strictly positive. Accepts integer, float, or numeric-string input;
    /// stored as an exact decimal to avoid float rounding in currency output.
    pub commission_amount: Decimal,
    /// When the commission is due, e.g. "notary deed".
    pub commission_due_on: String,
    #[serde(default)]
    pub payment_reference: Option<String>,
}

impl CommissionAcknowledgementData {
    /// Parse boundary for untyped key/value input. Deserializes the mapping
    /// and runs the same validation as the typed path.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocError> {
        let data: Self = serde_json::from_value(value)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), DocError> {
        self.agency.validate()?;

        if self.recipients.is_empty() {
            return Err(DocError::invalid("recipients", "must not be empty"));
        }
        for (i, recipient) in self.recipients.iter().enumerate() {
            recipient.validate(&format!("recipients[{i}]"))?;
        }

        self.property.validate()?;

        if self.signatories.is_empty() {
            return Err(DocError::invalid("signatories", "must not be empty"));
        }
        for (i, signatory) in self.signatories.iter().enumerate() {
            signatory.validate(&format!("signatories[{i}]"))?;
        }

        if self.commission_amount <= Decimal::ZERO {
            return Err(DocError::invalid(
                "commission_amount",
                "must be strictly positive",
            ));
        }
        non_empty("commission_due_on", &self.commission_due_on)?;
        Ok(())
    }
}
