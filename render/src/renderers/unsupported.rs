//! Fallback for value-type tags the registry does not know.

use arca_core::types::PropertyValue;

use crate::node::{Fragment, Node};
use crate::registry::{RenderOptions, ValueRenderer};

/// Emits exactly one visible marker carrying the raw tag, so an unexpected
/// server-side type shows up in the UI instead of vanishing.
pub struct UnsupportedRenderer;

impl ValueRenderer for UnsupportedRenderer {
    fn render(
        &self,
        out: &mut Fragment,
        value: &PropertyValue,
        _index: usize,
        _options: &RenderOptions,
    ) {
        tracing::warn!(tag = value.value_type, property = %value.name, "no renderer for value type");
        out.push(Node::Error {
            message: format!("unknown value type {}", value.value_type),
        });
    }
}
