//! Date and time values delegate to their picker widgets.

use arca_core::types::PropertyValue;

use crate::node::{Fragment, Node, Widget};
use crate::registry::{RenderOptions, ValueRenderer};

pub struct DateRenderer;

impl ValueRenderer for DateRenderer {
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
            widget: Widget::DatePicker { value: raw.clone() },
        });
    }
}

pub struct TimeRenderer;

impl ValueRenderer for TimeRenderer {
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
            widget: Widget::TimePicker { value: raw.clone() },
        });
    }
}
