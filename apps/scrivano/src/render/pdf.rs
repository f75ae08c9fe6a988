//! PDF backend — writes positioned draw operations into an A4 document.
//!
//! Uses the two builtin Type1 faces (Helvetica as F1, Helvetica-Bold as F2)
//! with WinAnsi encoding, so no font program is embedded and the output stays
//! small. Draw operations arrive in millimeters (bottom-left origin) and are
//! converted to points here.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::path::Path;

use crate::errors::DocError;
use crate::layout::{DrawOp, FontStyle, Layout};

/// Millimeters to points (1 inch = 25.4 mm = 72 pt).
const MM_TO_PT: f32 = 72.0 / 25.4;

/// A4 portrait media box in points.
const A4_WIDTH_PT: f32 = 595.276;
const A4_HEIGHT_PT: f32 = 841.890;

fn font_resource_name(style: FontStyle) -> &'static [u8] {
    match style {
        FontStyle::Regular => b"F1",
        FontStyle::Bold => b"F2",
    }
}

/// Encodes text for the WinAnsi (CP-1252) string space of the builtin faces.
/// Characters outside it degrade to '?'.
fn winansi_string(text: &str) -> Object {
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // euro sign
            c if (c as u32) < 0x100 => c as u8,
            _ => b'?',
        })
        .collect();
    Object::String(bytes, StringFormat::Literal)
}

fn text_operations(ops: &[&DrawOp]) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(ops.len() * 5);
    for op in ops {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(font_resource_name(op.style).to_vec()),
                Object::Real(op.size_pt.into()),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                Object::Real((op.x_mm * MM_TO_PT).into()),
                Object::Real((op.y_mm * MM_TO_PT).into()),
            ],
        ));
        operations.push(Operation::new("Tj", vec![winansi_string(&op.text)]));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

/// Writes the layout to `path` as a finished PDF file.
pub fn write_pdf(path: &Path, title: &str, layout: &Layout) -> Result<(), DocError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular_id,
            "F2" => font_bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.page_count);
    for page_index in 0..layout.page_count {
        let page_ops: Vec<&DrawOp> = layout.ops.iter().filter(|o| o.page == page_index).collect();
        let content = Content {
            operations: text_operations(&page_ops),
        };
        let encoded = content.encode().map_err(|e| DocError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(A4_WIDTH_PT.into()),
                Object::Real(A4_HEIGHT_PT.into()),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal("scrivano"),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();
    doc.save(path).map_err(|e| DocError::Pdf(e.to_string()))?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{paginate, PageGeometry};

    #[test]
    fn test_winansi_maps_euro_and_fallback() {
        let euro = winansi_string("€");
        assert_eq!(euro, Object::String(vec![0x80], StringFormat::Literal));
        let cjk = winansi_string("漢");
        assert_eq!(cjk, Object::String(vec![b'?'], StringFormat::Literal));
    }

    #[test]
    fn test_write_pdf_produces_nonempty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let layout = paginate("# TITLE\n\nbody line", &PageGeometry::a4());
        write_pdf(&path, "TITLE", &layout).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
        assert!(bytes.len() > 0);
    }

    #[test]
    fn test_multi_page_layout_writes_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.pdf");
        let text = (0..120)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let layout = paginate(&text, &PageGeometry::a4());
        assert!(layout.page_count >= 2);
        write_pdf(&path, "LONG", &layout).unwrap();
        let reloaded = Document::load(&path).unwrap();
        assert_eq!(reloaded.get_pages().len(), layout.page_count);
    }
}
