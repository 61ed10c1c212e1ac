//! Hierarchical-list rendering.
//!
//! The list identifier comes from the property's `hlist=(…)` attribute; the
//! GUI element hint selects the concrete input widget. All three widgets are
//! initialized with the same (list id, current value) pair.

use arca_core::types::PropertyValue;

use crate::attributes::parse_attributes;
use crate::node::{Fragment, Node, Widget};
use crate::registry::{RenderOptions, ValueRenderer};

pub struct HlistRenderer;

impl ValueRenderer for HlistRenderer {
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
        let list = value
            .attributes
            .as_deref()
            .map(parse_attributes)
            .and_then(|attrs| attrs.get("hlist").cloned())
            .filter(|list| !list.is_empty());
        let Some(list) = list else {
            out.push(Node::Error {
                message: format!("property {} has no hlist attribute", value.name),
            });
            return;
        };

        let widget = match value.gui_element.as_deref() {
            Some("radio") => Widget::RadioGroup { list, value: raw.clone() },
            Some("pulldown") => Widget::Pulldown { list, value: raw.clone() },
            // "hlist" and anything unspecified get the full tree widget.
            _ => Widget::HlistTree { list, value: raw.clone() },
        };
        out.push(Node::Widget { widget });
    }
}
