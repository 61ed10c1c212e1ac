//! Codec for rich-text values.
//!
//! # Wire format
//! A rich-text value is a JSON object with two fields: `utf8str`, the plain
//! text, and `textattr`, a JSON-*encoded string* holding the span
//! annotations. Decoded, `textattr` is a map from span kind (`"bold"`,
//! `"_link"`, …) to a list of `{start, end, …}` ranges over the characters
//! of `utf8str`. Link spans additionally carry `resid` (internal
//! cross-reference) or `href` (external anchor).
//!
//! Malformed `textattr` JSON decodes to an empty span set with a warning;
//! a single bad annotation should degrade the styling, not blank the text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Span kind used for anchors in the wire format.
pub const LINK_KIND: &str = "_link";

/// One annotated character range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    /// Resource id of an internal cross-reference anchor.
    pub resid: Option<String>,
    /// Target of an external anchor.
    pub href: Option<String>,
}

impl Span {
    pub fn is_internal_link(&self) -> bool {
        self.kind == LINK_KIND && self.resid.is_some()
    }
}

/// Decoded rich-text value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub text: String,
    pub spans: Vec<Span>,
}

/// Range payload as it appears inside `textattr`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRange {
    start: usize,
    end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

/// Decode a raw rich-text value payload.
pub fn decode(raw: &serde_json::Value) -> RichText {
    let text = raw
        .get("utf8str")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let spans = match raw.get("textattr").and_then(|v| v.as_str()) {
        None | Some("") => Vec::new(),
        Some(encoded) => match serde_json::from_str::<HashMap<String, Vec<WireRange>>>(encoded) {
            Ok(by_kind) => flatten(by_kind),
            Err(e) => {
                tracing::warn!(error = %e, "malformed textattr, dropping annotations");
                Vec::new()
            }
        },
    };

    RichText { text, spans }
}

/// Encode a rich-text value back into its wire shape.
pub fn encode(richtext: &RichText) -> serde_json::Value {
    let mut by_kind: HashMap<String, Vec<WireRange>> = HashMap::new();
    for span in &richtext.spans {
        by_kind.entry(span.kind.clone()).or_default().push(WireRange {
            start: span.start,
            end: span.end,
            resid: span.resid.clone(),
            href: span.href.clone(),
        });
    }
    // Serializing a string-keyed map of plain ranges cannot fail.
    let textattr = serde_json::to_string(&by_kind).unwrap_or_else(|_| "{}".to_string());
    serde_json::json!({
        "utf8str": richtext.text,
        "textattr": textattr,
    })
}

fn flatten(by_kind: HashMap<String, Vec<WireRange>>) -> Vec<Span> {
    let mut spans: Vec<Span> = by_kind
        .into_iter()
        .flat_map(|(kind, ranges)| {
            ranges.into_iter().map(move |r| Span {
                kind: kind.clone(),
                start: r.start,
                end: r.end,
                resid: r.resid,
                href: r.href,
            })
        })
        .collect();
    // Renderers walk spans left to right.
    spans.sort_by_key(|s| (s.start, s.end));
    spans
}
