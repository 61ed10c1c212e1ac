//! Geoname values delegate to the geographic-name lookup widget.

use arca_core::types::PropertyValue;

use crate::node::{Fragment, Node, Widget};
use crate::registry::{RenderOptions, ValueRenderer};

pub struct GeonameRenderer;

impl ValueRenderer for GeonameRenderer {
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
        out.push(Node::Widget {
            widget: Widget::GeonameLookup { value: raw.clone() },
        });
    }
}
