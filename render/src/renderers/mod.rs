//! The per-value-type rendering strategies.

mod color;
mod datetime;
mod geometry;
mod geoname;
mod hlist;
mod resource;
mod richtext;
mod scalar;
mod stub;
mod unsupported;

pub use color::ColorRenderer;
pub use datetime::{DateRenderer, TimeRenderer};
pub use geometry::GeometryRenderer;
pub use geoname::GeonameRenderer;
pub use hlist::HlistRenderer;
pub use resource::{ResourceRenderer, PART_OF_PROPERTY};
pub use richtext::RichTextRenderer;
pub use scalar::LiteralRenderer;
pub use stub::NotImplementedRenderer;
pub use unsupported::UnsupportedRenderer;

/// Literal text of a raw JSON payload: strings unquoted, scalars via their
/// display form, anything structured as compact JSON.
pub(crate) fn literal_text(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
