// Text layout engine: measures text with static font-metric tables and lays
// logical lines onto fixed-size pages with margins, wrapping, and page breaks.

pub mod font_metrics;
pub mod paginator;

// Re-export the public API consumed by the renderer and builder.
pub use font_metrics::{get_metrics, FontMetricTable, FontStyle};
pub use paginator::{paginate, DrawOp, Layout, PageGeometry};
