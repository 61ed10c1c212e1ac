//! Rich-text rendering: styled spans and post-processed anchors.
//!
//! Spans are walked left to right over the decoded text. Anchor spans
//! (`_link`) bearing a resource id become internal cross-references with
//! hover-preview and click-to-navigate wiring; anchors with only an `href`
//! are forced to open in a new browsing context. Overlapping spans are not
//! nested — the later span wins from where the earlier one ended.

use arca_core::types::PropertyValue;

use crate::node::{Action, Fragment, Node};
use crate::registry::{RenderOptions, ValueRenderer};
use crate::richtext::{decode, Span};

pub struct RichTextRenderer;

impl ValueRenderer for RichTextRenderer {
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
        let richtext = decode(raw);
        let chars: Vec<char> = richtext.text.chars().collect();

        let mut cursor = 0usize;
        for span in &richtext.spans {
            let start = span.start.min(chars.len());
            let end = span.end.min(chars.len());
            if start < cursor || end <= start {
                // Overlapping or empty range; keep the text from the
                // previous span onwards and skip the annotation.
                continue;
            }
            if start > cursor {
                out.push_text(slice(&chars, cursor, start));
            }
            out.push(span_node(span, slice(&chars, start, end)));
            cursor = end;
        }
        if cursor < chars.len() {
            out.push_text(slice(&chars, cursor, chars.len()));
        }
    }
}

fn slice(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

fn span_node(span: &Span, covered: String) -> Node {
    if span.is_internal_link() {
        let id = span.resid.clone().unwrap_or_default();
        return Node::Link {
            label: covered,
            click: Action::OpenResource { id: id.clone(), sequence: None },
            hover: Some(Action::PreviewResource { id }),
            new_context: false,
        };
    }
    if span.kind == crate::richtext::LINK_KIND {
        return Node::Link {
            label: covered,
            click: Action::OpenUrl {
                url: span.href.clone().unwrap_or_default(),
            },
            hover: None,
            new_context: true,
        };
    }
    Node::Styled {
        style: span.kind.clone(),
        children: vec![Node::Text { value: covered }],
    }
}
