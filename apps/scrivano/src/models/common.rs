use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::errors::DocError;

// ────────────────────────────────────────────────────────────────────────────
// Enumerated fields
// ────────────────────────────────────────────────────────────────────────────

/// Role of a recipient in the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientRole {
    Buyer,
    Seller,
    Landlord,
    Tenant,
}

impl RecipientRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientRole::Buyer => "Buyer",
            RecipientRole::Seller => "Seller",
            RecipientRole::Landlord => "Landlord",
            RecipientRole::Tenant => "Tenant",
        }
    }
}

/// Type of deal the commission refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    Sale,
    Lease,
}

impl DealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::Sale => "sale",
            DealType::Lease => "lease",
        }
    }

    /// Italian label used in the document body ("vendita" / "locazione").
    pub fn italian_label(&self) -> &'static str {
        match self {
            DealType::Sale => "vendita",
            DealType::Lease => "locazione",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record components
// ────────────────────────────────────────────────────────────────────────────

/// Agency letterhead and bank details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyInfo {
    pub name: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    /// IBAN code, at least 15 characters.
    pub iban: String,
    pub bank: String,
    pub bank_account_beneficiary: String,
}

impl AgencyInfo {
    pub fn validate(&self) -> Result<(), DocError> {
        non_empty("agency.name", &self.name)?;
        non_empty("agency.street", &self.street)?;
        non_empty("agency.street_number", &self.street_number)?;
        non_empty("agency.city", &self.city)?;
        non_empty("agency.bank", &self.bank)?;
        non_empty("agency.bank_account_beneficiary", &self.bank_account_beneficiary)?;
        if self.iban.trim().len() < 15 {
            return Err(DocError::invalid(
                "agency.iban",
                "must be at least 15 characters",
            ));
        }
        Ok(())
    }
}

/// One recipient of the document, either a company or an individual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientInfo {
    pub role: RecipientRole,
    #[serde(default)]
    pub is_company: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Codice Fiscale (Italian tax identifier).
    pub codice_fiscale: String,
    pub street: String,
    pub city: String,
}

impl RecipientInfo {
    /// Validates this recipient. `field` is the path used in error messages,
    /// e.g. `recipients[1]`.
    ///
    /// The company/person invariant is enforced strictly: a company must have
    /// a company name, an individual must have both first and last name.
    pub fn validate(&self, field: &str) -> Result<(), DocError> {
        non_empty(&format!("{field}.codice_fiscale"), &self.codice_fiscale)?;
        non_empty(&format!("{field}.street"), &self.street)?;
        non_empty(&format!("{field}.city"), &self.city)?;

        if self.is_company {
            match &self.company_name {
                Some(name) if !name.trim().is_empty() => Ok(()),
                _ => Err(DocError::invalid(
                    format!("{field}.company_name"),
                    "required when is_company is true",
                )),
            }
        } else {
            let first_ok = matches!(&self.first_name, Some(n) if !n.trim().is_empty());
            let last_ok = matches!(&self.last_name, Some(n) if !n.trim().is_empty());
            if first_ok && last_ok {
                Ok(())
            } else {
                Err(DocError::invalid(
                    format!("{field}.first_name"),
                    "first_name and last_name are required for individuals",
                ))
            }
        }
    }

    /// Display name: company name, or "first last" for individuals.
    pub fn display_name(&self) -> String {
        if self.is_company {
            self.company_name.clone().unwrap_or_default()
        } else {
            format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or(""),
                self.last_name.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        }
    }
}

/// The property the deal refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub city_or_location: String,
    pub street: String,
    pub street_number: String,
    /// Optional free text identifying the unit (floor, staircase, ...).
    #[serde(default)]
    pub notes: Option<String>,
}

impl PropertyInfo {
    pub fn validate(&self) -> Result<(), DocError> {
        non_empty("property.city_or_location", &self.city_or_location)?;
        non_empty("property.street", &self.street)?;
        non_empty("property.street_number", &self.street_number)?;
        Ok(())
    }
}

/// A person signing the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatoryInfo {
    pub name: String,
    pub role: String,
}

impl SignatoryInfo {
    pub fn validate(&self, field: &str) -> Result<(), DocError> {
        non_empty(&format!("{field}.name"), &self.name)?;
        non_empty(&format!("{field}.role"), &self.role)?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
