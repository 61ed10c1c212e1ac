//! Placeholder for period and interval values.
//!
//! Both types are accepted by the server but have no presentation yet; the
//! placeholder is deliberate, not an error marker.

use arca_core::types::PropertyValue;

use crate::node::Fragment;
use crate::registry::{RenderOptions, ValueRenderer};

pub struct NotImplementedRenderer;

impl ValueRenderer for NotImplementedRenderer {
    fn render(
        &self,
        out: &mut Fragment,
        _value: &PropertyValue,
        _index: usize,
        _options: &RenderOptions,
    ) {
        out.push_text("not yet implemented");
    }
}
