//! Declarative output model for rendered property values.
//!
//! # Design
//! Renderers never touch a real UI. They append [`Node`] values to a
//! [`Fragment`], and interactive nodes carry [`Action`] descriptors instead
//! of event-handler closures. The host interprets the fragment: it decides
//! what "open a resource" or "highlight a region" means on its surface, and
//! wires actual event handlers from the descriptors. Everything serializes,
//! so fragments can cross a process or wire boundary unchanged.

use serde::{Deserialize, Serialize};

/// What the host should do when the user activates or hovers a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Open a resource view, optionally positioned at a sequence number
    /// within a compound resource.
    OpenResource {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sequence: Option<u64>,
    },
    /// Show a transient preview of a resource (hover affordance).
    PreviewResource { id: String },
    /// Hand the resource id to the host's selection callback instead of
    /// opening it (simple-view mode).
    Select { id: String },
    /// Highlight the drawing-surface region belonging to a value.
    HighlightRegion { value_id: String },
    /// Navigate to an external URL.
    OpenUrl { url: String },
}

/// Delegated sub-renderer placeholders. Each widget owns its own editing
/// affordance on the host side; the render layer only names the widget and
/// its initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    DatePicker { value: serde_json::Value },
    TimePicker { value: serde_json::Value },
    ColorPicker { value: String },
    GeonameLookup { value: serde_json::Value },
    /// Full tree widget over a hierarchical list.
    HlistTree { list: String, value: serde_json::Value },
    /// Radio group over the nodes of a hierarchical list.
    RadioGroup { list: String, value: serde_json::Value },
    /// Pulldown over the nodes of a hierarchical list.
    Pulldown { list: String, value: serde_json::Value },
}

/// One piece of rendered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Literal text, exactly as stored.
    Text { value: String },
    /// Styled span of rich-text content.
    Styled { style: String, children: Vec<Node> },
    /// Anchor. `new_context` forces the host to open the target in a new
    /// browsing context.
    Link {
        label: String,
        click: Action,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hover: Option<Action>,
        #[serde(default)]
        new_context: bool,
    },
    /// Icon + label summary of a linked resource.
    Resource {
        id: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        click: Action,
        hover: Action,
        /// The host may let the user drag this summary onto another
        /// property to re-target the link.
        draggable: bool,
    },
    /// Geometry figure label, optionally hover-wired to a drawing surface.
    Figure {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hover: Option<Action>,
    },
    /// Delegated sub-renderer.
    Widget { widget: Widget },
    /// Visible inline error marker. Rendering never throws; it degrades to
    /// one of these so the surrounding UI stays usable.
    Error { message: String },
}

/// Ordered sequence of nodes produced by one render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Convenience for the common literal-text case.
    pub fn push_text(&mut self, value: impl Into<String>) {
        self.nodes.push(Node::Text { value: value.into() });
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
