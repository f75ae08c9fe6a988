//! Content producers — the two rendering strategies feeding the paginator.
//!
//! A record either formats itself field-by-field (`direct_text`) or exposes a
//! flattened context (`context`) for template substitution. Both produce the
//! same line-marker markup (`# ` title, `## ` heading) consumed by
//! `layout::paginate`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::fmt::Write;

use crate::models::{CommissionAcknowledgementData, CreditNoteData, RecipientInfo};

// ────────────────────────────────────────────────────────────────────────────
// Field formatting
// ────────────────────────────────────────────────────────────────────────────

/// Formats a monetary amount as fixed-point with exactly 2 decimal places.
pub fn format_amount(amount: &Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a date as DD/MM/YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Singular/plural recipient label. The plural form is used for 2+ recipients.
fn recipients_label(count: usize) -> &'static str {
    if count > 1 {
        "Recipients:"
    } else {
        "Recipient:"
    }
}

fn recipient_context(recipient: &RecipientInfo) -> Value {
    json!({
        "role": recipient.role.as_str(),
        "is_company": recipient.is_company,
        "display_name": recipient.display_name(),
        "codice_fiscale": &recipient.codice_fiscale,
        "street": &recipient.street,
        "city": &recipient.city,
    })
}

fn recipient_line(recipient: &RecipientInfo) -> String {
    format!(
        "- {}: {} (CF {}), {}, {}",
        recipient.role.as_str(),
        recipient.display_name(),
        recipient.codice_fiscale,
        recipient.street,
        recipient.city
    )
}

// ────────────────────────────────────────────────────────────────────────────
// DocumentContent
// ────────────────────────────────────────────────────────────────────────────

/// A validated record that can be rendered to a text block, either directly
/// or through a named template.
pub trait DocumentContent {
    /// Document title, also used as the PDF metadata title.
    fn title(&self) -> &'static str;

    /// Name of the built-in template for this document kind.
    fn default_template(&self) -> &'static str;

    /// Flattened template context: dates as DD/MM/YYYY, amounts as 2-dp
    /// strings, nested lists in stored order.
    fn context(&self) -> Value;

    /// Direct field-by-field rendering to the paginator's line markup.
    fn direct_text(&self) -> String;
}

impl DocumentContent for CommissionAcknowledgementData {
    fn title(&self) -> &'static str {
        "COMMISSION ACKNOWLEDGEMENT"
    }

    fn default_template(&self) -> &'static str {
        "commission_acknowledgement"
    }

    fn context(&self) -> Value {
        json!({
            "document_date": format_date(self.document_date),
            "agency": &self.agency,
            "recipients": self.recipients.iter().map(recipient_context).collect::<Vec<_>>(),
            "recipients_label": recipients_label(self.recipients.len()),
            "property": &self.property,
            "signatories": &self.signatories,
            "deal_type": self.deal_type.as_str(),
            "deal_type_label": self.deal_type.italian_label(),
            "commission_amount": format_amount(&self.commission_amount),
            "commission_due_on": &self.commission_due_on,
            "payment_reference": &self.payment_reference,
        })
    }

    fn direct_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "# {}", self.title());
        let _ = writeln!(text);
        let _ = writeln!(text, "Date: {}", format_date(self.document_date));
        let _ = writeln!(text);

        let _ = writeln!(text, "## Agency");
        let _ = writeln!(text, "{}", self.agency.name);
        let _ = writeln!(
            text,
            "{} {}, {}",
            self.agency.street, self.agency.street_number, self.agency.city
        );
        let _ = writeln!(text, "IBAN: {} ({})", self.agency.iban, self.agency.bank);
        let _ = writeln!(text, "Beneficiary: {}", self.agency.bank_account_beneficiary);
        let _ = writeln!(text);

        let _ = writeln!(text, "## {}", recipients_label(self.recipients.len()));
        for recipient in &self.recipients {
            let _ = writeln!(text, "{}", recipient_line(recipient));
        }
        let _ = writeln!(text);

        let _ = writeln!(text, "## Property");
        let _ = writeln!(
            text,
            "{} {}, {}",
            self.property.street, self.property.street_number, self.property.city_or_location
        );
        if let Some(notes) = &self.property.notes {
            let _ = writeln!(text, "Notes: {notes}");
        }
        let _ = writeln!(text);

        let _ = writeln!(text, "## Deal");
        let _ = writeln!(
            text,
            "Type: {} ({})",
            self.deal_type.as_str(),
            self.deal_type.italian_label()
        );
        let _ = writeln!(
            text,
            "Commission amount: EUR {}",
            format_amount(&self.commission_amount)
        );
        let _ = writeln!(text, "Due on: {}", self.commission_due_on);
        if let Some(reference) = &self.payment_reference {
            let _ = writeln!(text, "Causale: {reference}");
        }
        let _ = writeln!(text);

        let _ = writeln!(text, "## Signatories");
        for signatory in &self.signatories {
            let _ = writeln!(text, "- {}, {}", signatory.name, signatory.role);
        }
        text
    }
}

impl DocumentContent for CreditNoteData {
    fn title(&self) -> &'static str {
        "CREDIT NOTE"
    }

    fn default_template(&self) -> &'static str {
        "credit_note"
    }

    fn context(&self) -> Value {
        json!({
            "document_date": format_date(self.document_date),
            "document_number": &self.document_number,
            "agency": &self.agency,
            "recipient": recipient_context(&self.recipient),
            "amount": format_amount(&self.amount),
            "description": &self.description,
            "reference_document": &self.reference_document,
        })
    }

    fn direct_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "# {}", self.title());
        let _ = writeln!(text);
        let _ = writeln!(text, "Number: {}", self.document_number);
        let _ = writeln!(text, "Date: {}", format_date(self.document_date));
        let _ = writeln!(text);

        let _ = writeln!(text, "## Agency");
        let _ = writeln!(text, "{}", self.agency.name);
        let _ = writeln!(
            text,
            "{} {}, {}",
            self.agency.street, self.agency.street_number, self.agency.city
        );
        let _ = writeln!(text, "IBAN: {} ({})", self.agency.iban, self.agency.bank);
        let _ = writeln!(text, "Beneficiary: {}", self.agency.bank_account_beneficiary);
        let _ = writeln!(text);

        let _ = writeln!(text, "## Recipient:");
        let _ = writeln!(text, "{}", recipient_line(&self.recipient));
        let _ = writeln!(text);

        let _ = writeln!(text, "## Details");
        let _ = writeln!(text, "Amount: EUR {}", format_amount(&self.amount));
        let _ = writeln!(text, "Description: {}", self.description);
        if let Some(reference) = &self.reference_document {
            let _ = writeln!(text, "Reference document: {reference}");
        }
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
