//! Paginator — lays a multi-line text block onto fixed-size pages.
//!
//! # Algorithm
//! - A vertical cursor starts at `height - margin_top` and walks downward.
//! - Blank lines consume a reduced increment (0.65× line height) and emit
//!   nothing; they are spacing only.
//! - Non-blank lines are greedily word-wrapped against the printable width,
//!   and every wrapped sub-line gets its own page-break check, so a long
//!   paragraph spans pages correctly.
//! - Line-start markers select the face: `# ` renders as a bold title,
//!   `## ` as a bold heading; both add trailing space after the line.
//!
//! Layout never fails: a single word wider than the printable width is
//! emitted as-is (no character-level hyphenation) and degrades visually.

use serde::{Deserialize, Serialize};

use super::font_metrics::{get_metrics, FontMetricTable, FontStyle};

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry in millimeters. Origin is the bottom-left corner of the
/// page (PDF native); the cursor walks from the top down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    /// Vertical advance per body line.
    pub line_height_mm: f32,
}

impl PageGeometry {
    /// A4 portrait with the default document margins.
    pub fn a4() -> Self {
        PageGeometry {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 25.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 20.0,
            margin_right_mm: 20.0,
            line_height_mm: 6.0,
        }
    }

    pub fn printable_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }
}

/// Fraction of the line height a blank line consumes.
const BLANK_LINE_FACTOR: f32 = 0.65;

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

/// Visual class of a logical line, selected by its start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `# ` marker — document title.
    Title,
    /// `## ` marker — section heading.
    Heading,
    Body,
}

impl LineKind {
    fn face(self) -> (FontStyle, f32) {
        match self {
            LineKind::Title => (FontStyle::Bold, 16.0),
            LineKind::Heading => (FontStyle::Bold, 11.0),
            LineKind::Body => (FontStyle::Regular, 10.0),
        }
    }

    /// Extra vertical space after the whole logical line.
    fn trailing_space_mm(self) -> f32 {
        match self {
            LineKind::Title => 4.0,
            LineKind::Heading => 2.0,
            LineKind::Body => 0.0,
        }
    }
}

/// Splits the marker off a logical line.
fn classify(line: &str) -> (LineKind, &str) {
    if let Some(rest) = line.strip_prefix("## ") {
        (LineKind::Heading, rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        (LineKind::Title, rest)
    } else {
        (LineKind::Body, line)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// An instruction to place a piece of text at a position on a page.
/// `y_mm` is measured from the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOp {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub text: String,
    pub style: FontStyle,
    pub size_pt: f32,
}

/// The positioned draw operations for a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub ops: Vec<DrawOp>,
    pub page_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Lays `text` onto pages. An empty text block produces one empty page.
pub fn paginate(text: &str, geometry: &PageGeometry) -> Layout {
    let top = geometry.height_mm - geometry.margin_top_mm;
    let printable_width = geometry.printable_width_mm();

    let mut ops: Vec<DrawOp> = Vec::new();
    let mut page = 0usize;
    let mut cursor = top;

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            cursor -= BLANK_LINE_FACTOR * geometry.line_height_mm;
            continue;
        }

        let (kind, content) = classify(raw_line);
        let (style, size_pt) = kind.face();
        let metrics = get_metrics(style);

        for subline in wrap_line(content, metrics, size_pt, printable_width) {
            if cursor < geometry.margin_bottom_mm {
                page += 1;
                cursor = top;
            }
            ops.push(DrawOp {
                page,
                x_mm: geometry.margin_left_mm,
                y_mm: cursor,
                text: subline,
                style,
                size_pt,
            });
            cursor -= geometry.line_height_mm;
        }
        cursor -= kind.trailing_space_mm();
    }

    Layout {
        ops,
        page_count: page + 1,
    }
}

/// Greedy word wrap. A line that already fits is returned untouched
/// (internal spacing preserved); a single word wider than `max_width_mm`
/// occupies its own sub-line unsplit.
fn wrap_line(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    if metrics.width_mm(text, size_pt) <= max_width_mm {
        return vec![text.to_string()];
    }

    let mut sublines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if metrics.width_mm(&candidate, size_pt) <= max_width_mm {
            current = candidate;
        } else {
            sublines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        sublines.push(current);
    }
    sublines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
