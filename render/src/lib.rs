//! Value rendering for the data-management client.
//!
//! # Overview
//! Turns tagged property-value records (see
//! [`arca_core::types::PropertyValue`]) into a declarative [`Fragment`] of
//! nodes and action descriptors. The host UI interprets the fragment — this
//! crate knows nothing about a real DOM, terminal or canvas.
//!
//! # Design
//! - Dispatch is a [`RendererRegistry`] of [`ValueRenderer`] trait objects
//!   keyed by value type; unknown tags degrade to a visible error marker.
//! - Renderers are infallible: malformed payloads become inline
//!   [`Node::Error`] markers, never panics or results.
//! - Interactivity is data: nodes carry [`Action`] descriptors
//!   (open/preview/select/highlight) instead of event-handler closures.

pub mod attributes;
pub mod node;
pub mod registry;
pub mod renderers;
pub mod richtext;

pub use node::{Action, Fragment, Node, Widget};
pub use registry::{RenderOptions, RendererRegistry, ValueRenderer};
pub use renderers::PART_OF_PROPERTY;
pub use richtext::{RichText, Span};
