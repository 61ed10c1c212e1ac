//! Geometry rendering.
//!
//! The value is a JSON figure record (`{"type": "rectangle", …}`, possibly
//! delivered as a JSON-encoded string). With a drawing surface in the
//! options, hovering the figure label highlights the matching region,
//! looked up by the value's identifier. Without one there is nothing to
//! highlight on, so a textual hint points at the associated resource.

use arca_core::types::PropertyValue;
use serde::Deserialize;

use crate::node::{Action, Fragment, Node};
use crate::registry::{RenderOptions, ValueRenderer};

#[derive(Debug, Deserialize)]
struct Figure {
    #[serde(rename = "type")]
    kind: String,
}

pub struct GeometryRenderer;

impl ValueRenderer for GeometryRenderer {
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
        let figure = match parse_figure(raw) {
            Some(figure) => figure,
            None => {
                out.push(Node::Error { message: "unrenderable geometry value".to_string() });
                return;
            }
        };

        if options.canvas.is_some() {
            let hover = value
                .ids
                .get(index)
                .map(|value_id| Action::HighlightRegion { value_id: value_id.clone() });
            out.push(Node::Figure { label: figure.kind, hover });
        } else {
            out.push(Node::Figure { label: figure.kind, hover: None });
            out.push_text("open associated resource");
        }
    }
}

fn parse_figure(raw: &serde_json::Value) -> Option<Figure> {
    match raw {
        serde_json::Value::String(encoded) => serde_json::from_str(encoded).ok(),
        other => serde_json::from_value(other.clone()).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(raw: serde_json::Value, ids: Vec<&str>) -> PropertyValue {
        PropertyValue {
            name: "arca:region".to_string(),
            value_type: 10,
            ids: ids.into_iter().map(str::to_string).collect(),
            values: vec![raw],
            attributes: None,
            gui_element: None,
        }
    }

    fn rect() -> serde_json::Value {
        serde_json::json!({"type": "rectangle", "points": [[0, 0], [10, 10]]})
    }

    #[test]
    fn with_canvas_hover_highlights_by_value_id() {
        let options = RenderOptions { canvas: Some("surface-1".to_string()), ..Default::default() };
        let mut out = Fragment::new();
        GeometryRenderer.render(&mut out, &property(rect(), vec!["v-5"]), 0, &options);
        assert_eq!(
            out.nodes(),
            &[Node::Figure {
                label: "rectangle".to_string(),
                hover: Some(Action::HighlightRegion { value_id: "v-5".to_string() }),
            }]
        );
    }

    #[test]
    fn without_canvas_a_hint_is_shown_instead() {
        let mut out = Fragment::new();
        GeometryRenderer.render(
            &mut out,
            &property(rect(), vec!["v-5"]),
            0,
            &RenderOptions::default(),
        );
        assert_eq!(out.len(), 2);
        assert_eq!(
            out.nodes()[0],
            Node::Figure { label: "rectangle".to_string(), hover: None }
        );
        assert_eq!(
            out.nodes()[1],
            Node::Text { value: "open associated resource".to_string() }
        );
    }

    #[test]
    fn json_encoded_string_payloads_are_accepted() {
        let encoded = serde_json::json!(r#"{"type": "circle", "radius": 4}"#);
        let mut out = Fragment::new();
        GeometryRenderer.render(
            &mut out,
            &property(encoded, vec![]),
            0,
            &RenderOptions::default(),
        );
        assert_eq!(
            out.nodes()[0],
            Node::Figure { label: "circle".to_string(), hover: None }
        );
    }

    #[test]
    fn malformed_geometry_degrades_to_a_marker() {
        let mut out = Fragment::new();
        GeometryRenderer.render(
            &mut out,
            &property(serde_json::json!("{oops"), vec![]),
            0,
            &RenderOptions::default(),
        );
        assert!(matches!(out.nodes()[0], Node::Error { .. }));
    }

    #[test]
    fn missing_value_id_renders_without_hover() {
        let options = RenderOptions { canvas: Some("surface-1".to_string()), ..Default::default() };
        let mut out = Fragment::new();
        GeometryRenderer.render(&mut out, &property(rect(), vec![]), 0, &options);
        assert_eq!(
            out.nodes(),
            &[Node::Figure { label: "rectangle".to_string(), hover: None }]
        );
    }
}
