//! Color values delegate to the color-picker widget.

use arca_core::types::PropertyValue;

use crate::node::{Fragment, Node, Widget};
use crate::registry::{RenderOptions, ValueRenderer};
use crate::renderers::literal_text;

pub struct ColorRenderer;

impl ValueRenderer for ColorRenderer {
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
            widget: Widget::ColorPicker { value: literal_text(raw) },
        });
    }
}
