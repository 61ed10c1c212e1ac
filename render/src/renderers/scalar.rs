//! Literal rendering for integer, float and iconclass values.

use arca_core::types::PropertyValue;

use crate::node::Fragment;
use crate::registry::{RenderOptions, ValueRenderer};
use crate::renderers::literal_text;

/// Renders the raw value as literal text, no widget, no transformation.
pub struct LiteralRenderer;

impl ValueRenderer for LiteralRenderer {
    fn render(
        &self,
        out: &mut Fragment,
        value: &PropertyValue,
        index: usize,
        _options: &RenderOptions,
    ) {
        let Some(raw) = value.values.get(index) else {
            return;
        };
        out.push_text(literal_text(raw));
    }
}
