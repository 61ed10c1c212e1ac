//! Resource-pointer rendering.
//!
//! The value payload is the server-side summary of the pointed-to resource
//! (id, label, optional icon). Click behavior branches three ways: simple
//! view hands the id to the host's selection callback; a part-of relation
//! with a known sequence number opens the target positioned at that
//! sequence; everything else opens a plain resource view.

use arca_core::types::PropertyValue;
use serde::Deserialize;

use crate::node::{Action, Fragment, Node};
use crate::registry::{RenderOptions, ValueRenderer};

/// Property name of the part-of relation between compound-resource parts
/// and their container.
pub const PART_OF_PROPERTY: &str = "arca:part_of";

#[derive(Debug, Deserialize)]
struct ResourceSummary {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

pub struct ResourceRenderer;

impl ValueRenderer for ResourceRenderer {
    fn render(
        &self,
        out: &mut Fragment,
        value: &PropertyValue,
        index: usize,
        options: &RenderOptions,
    ) {
        let Some(raw) = value.values.get(index) else {
            return;
        };
        let summary = match parse_summary(raw) {
            Some(summary) => summary,
            None => {
                out.push(Node::Error {
                    message: "unrenderable resource pointer".to_string(),
                });
                return;
            }
        };

        let click = if options.simple_view {
            Action::Select { id: summary.id.clone() }
        } else if value.name == PART_OF_PROPERTY && options.sequence_number.is_some() {
            Action::OpenResource {
                id: summary.id.clone(),
                sequence: options.sequence_number,
            }
        } else {
            Action::OpenResource { id: summary.id.clone(), sequence: None }
        };

        let label = summary.label.unwrap_or_else(|| summary.id.clone());
        out.push(Node::Resource {
            id: summary.id.clone(),
            label,
            icon: summary.icon,
            click,
            hover: Action::PreviewResource { id: summary.id },
            draggable: true,
        });
    }
}

/// A bare string payload is treated as a resource id without a resolved
/// summary.
fn parse_summary(raw: &serde_json::Value) -> Option<ResourceSummary> {
    if let Some(id) = raw.as_str() {
        return Some(ResourceSummary {
            id: id.to_string(),
            label: None,
            icon: None,
        });
    }
    serde_json::from_value(raw.clone()).ok()
}
