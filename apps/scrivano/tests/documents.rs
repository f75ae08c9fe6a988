//! End-to-end document generation through the builder facade.

use serde_json::json;
use tempfile::TempDir;

use scrivano::{CommissionAcknowledgementData, CreditNoteData, DocumentBuilder, DocError};

fn make_builder(dir: &TempDir) -> DocumentBuilder {
    DocumentBuilder::create(dir.path().join("output"), dir.path().join("templates")).unwrap()
}

fn make_commission_value() -> serde_json::Value {
    json!({
        "document_date": "2026-02-10",
        "agency": {
            "name": "Premium Real Estate Agency",
            "street": "Via Roma",
            "street_number": "123",
            "city": "Milano",
            "iban": "IT60X0542811101000000123456",
            "bank": "Intesa Sanpaolo",
            "bank_account_beneficiary": "Premium Real Estate S.r.l."
        },
        "recipients": [
            {
                "role": "Seller",
                "is_company": true,
                "company_name": "Seller Properties S.r.l.",
                "codice_fiscale": "12345678901",
                "street": "Via Dante 7",
                "city": "Milano"
            },
            {
                "role": "Buyer",
                "is_company": false,
                "first_name": "Marco",
                "last_name": "Bianchi",
                "codice_fiscale": "BNCMRC80A01H501X",
                "street": "Via Buyer 2",
                "city": "Roma"
            }
        ],
        "property": {
            "city_or_location": "Milano",
            "street": "Corso Buenos Aires",
            "street_number": "45"
        },
        "signatories": [
            { "name": "Mario Rossi", "role": "Legal Representative" }
        ],
        "deal_type": "sale",
        "commission_amount": "8500.00",
        "commission_due_on": "notary deed",
        "payment_reference": "Commission payment - Property Milano"
    })
}

fn make_credit_note_value() -> serde_json::Value {
    json!({
        "document_date": "2026-03-01",
        "document_number": "NC-2026-014",
        "agency": {
            "name": "Premium Real Estate Agency",
            "street": "Via Roma",
            "street_number": "123",
            "city": "Milano",
            "iban": "IT60X0542811101000000123456",
            "bank": "Intesa Sanpaolo",
            "bank_account_beneficiary": "Premium Real Estate S.r.l."
        },
        "recipient": {
            "role": "Buyer",
            "is_company": false,
            "first_name": "Marco",
            "last_name": "Bianchi",
            "codice_fiscale": "BNCMRC80A01H501X",
            "street": "Via Buyer 2",
            "city": "Roma"
        },
        "amount": "350.50",
        "description": "Partial refund of commission",
        "reference_document": "Invoice 2026/88"
    })
}

// ── commission acknowledgements ─────────────────────────────────────────────

#[test]
fn test_commission_written_under_requested_name() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let path = builder
        .create_commission_acknowledgement_from_value(make_commission_value(), Some("ack.pdf"))
        .unwrap();
    assert_eq!(path, builder.output_dir().join("ack.pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
    assert!(bytes.len() > 500, "suspiciously small output: {}", bytes.len());
}

#[test]
fn test_commission_default_filename_is_timestamped() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let path = builder
        .create_commission_acknowledgement_from_value(make_commission_value(), None)
        .unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("commission_ack_"), "got: {name}");
    assert!(name.ends_with(".pdf"), "got: {name}");
    // commission_ack_YYYYMMDD_HHMMSS.pdf
    assert_eq!(name.len(), "commission_ack_".len() + 15 + 4, "got: {name}");
}

#[test]
fn test_commission_from_template_matches_builtin() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let data = CommissionAcknowledgementData::from_value(make_commission_value()).unwrap();
    let path = builder
        .create_commission_acknowledgement_from_template(
            &data,
            "commission_acknowledgement",
            Some("templated.pdf"),
        )
        .unwrap();
    assert!(path.is_file());
}

#[test]
fn test_empty_recipients_rejected_without_output() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let mut value = make_commission_value();
    value["recipients"] = json!([]);
    let err = builder
        .create_commission_acknowledgement_from_value(value, Some("bad.pdf"))
        .unwrap_err();
    assert!(matches!(err, DocError::Validation { .. }), "got: {err}");
    assert!(!builder.output_dir().join("bad.pdf").exists());
}

#[test]
fn test_negative_amount_rejected_without_output() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let mut value = make_commission_value();
    value["commission_amount"] = json!(-100);
    let err = builder
        .create_commission_acknowledgement_from_value(value, Some("bad.pdf"))
        .unwrap_err();
    assert!(err.to_string().contains("commission_amount"), "got: {err}");
    assert!(!builder.output_dir().join("bad.pdf").exists());
}

// ── credit notes ────────────────────────────────────────────────────────────

#[test]
fn test_credit_note_written() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let path = builder
        .create_credit_note_from_value(make_credit_note_value(), Some("note.pdf"))
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_credit_note_default_filename_is_timestamped() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let path = builder
        .create_credit_note_from_value(make_credit_note_value(), None)
        .unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("credit_note_"), "got: {name}");
    assert!(name.ends_with(".pdf"), "got: {name}");
}

// ── templates ───────────────────────────────────────────────────────────────

#[test]
fn test_render_template_exposes_record_fields() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let mut value = make_commission_value();
    value["deal_type"] = json!("lease");
    let data = CommissionAcknowledgementData::from_value(value).unwrap();
    let rendered = builder
        .render_template("commission_acknowledgement", &data)
        .unwrap();
    assert!(rendered.contains("Premium Real Estate Agency"));
    assert!(rendered.contains("Seller Properties S.r.l."));
    assert!(rendered.contains("8500.00"));
    assert!(rendered.contains("Causale: Commission payment - Property Milano"));
    assert!(rendered.contains("locazione"));
    assert!(rendered.contains("Recipients:"));
}

#[test]
fn test_render_credit_note_template() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let data = CreditNoteData::from_value(make_credit_note_value()).unwrap();
    let rendered = builder.render_template("credit_note", &data).unwrap();
    assert!(rendered.contains("NC-2026-014"));
    assert!(rendered.contains("Marco Bianchi"));
    assert!(rendered.contains("350.50"));
}

#[test]
fn test_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    let builder = make_builder(&dir);
    let data = CreditNoteData::from_value(make_credit_note_value()).unwrap();
    let err = builder.render_template("does_not_exist", &data).unwrap_err();
    assert!(matches!(err, DocError::TemplateNotFound(_)), "got: {err}");
}

#[test]
fn test_user_template_directory_is_picked_up() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(
        templates.join("summary.hbs"),
        "# SUMMARY\nAgency: {{agency.name}}\nAmount: EUR {{commission_amount}}\n",
    )
    .unwrap();
    let builder = DocumentBuilder::create(dir.path().join("output"), &templates).unwrap();
    assert!(builder.list_templates().contains(&"summary".to_string()));

    let data = CommissionAcknowledgementData::from_value(make_commission_value()).unwrap();
    let path = builder
        .create_commission_acknowledgement_from_template(&data, "summary", Some("summary.pdf"))
        .unwrap();
    assert!(path.is_file());
}
