//! Renderer registry: one strategy per value type.
//!
//! # Design
//! `RendererRegistry` replaces a switch-on-tag with a lookup of
//! [`ValueRenderer`] trait objects keyed by [`ValueType`]. Unknown tags
//! resolve to a fallback that emits a visible error marker — rendering a
//! property never aborts, so the surrounding UI stays usable whatever the
//! server sends.

use std::collections::HashMap;

use arca_core::types::{PropertyValue, ValueType};

use crate::node::Fragment;
use crate::renderers::{
    ColorRenderer, DateRenderer, GeometryRenderer, GeonameRenderer, HlistRenderer,
    LiteralRenderer, NotImplementedRenderer, ResourceRenderer, RichTextRenderer, TimeRenderer,
    UnsupportedRenderer,
};

/// Per-call rendering options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// When set, activating a resource pointer emits
    /// [`Action::Select`](crate::node::Action::Select) for the host's
    /// selection callback instead of opening the resource.
    pub simple_view: bool,
    /// Identifier of the drawing surface geometry values highlight on.
    /// Without one, geometry renders a textual hint instead.
    pub canvas: Option<String>,
    /// Value of the sibling sequence-number property, when the rendered
    /// resource is part of a compound resource.
    pub sequence_number: Option<u64>,
}

/// One rendering strategy.
///
/// Implementations append to `out` and must not panic on malformed input;
/// anything unrenderable becomes an inline error marker.
pub trait ValueRenderer {
    fn render(
        &self,
        out: &mut Fragment,
        value: &PropertyValue,
        index: usize,
        options: &RenderOptions,
    );
}

/// Lookup from value-type tag to rendering strategy.
pub struct RendererRegistry {
    renderers: HashMap<ValueType, Box<dyn ValueRenderer>>,
    fallback: Box<dyn ValueRenderer>,
}

impl RendererRegistry {
    /// An empty registry; every tag falls through to the unsupported-type
    /// marker until strategies are registered.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Box::new(UnsupportedRenderer),
        }
    }

    /// The standard registry with all thirteen strategies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ValueType::Integer, Box::new(LiteralRenderer));
        registry.register(ValueType::Float, Box::new(LiteralRenderer));
        registry.register(ValueType::IconClass, Box::new(LiteralRenderer));
        registry.register(ValueType::Date, Box::new(DateRenderer));
        registry.register(ValueType::Time, Box::new(TimeRenderer));
        registry.register(ValueType::Period, Box::new(NotImplementedRenderer));
        registry.register(ValueType::Interval, Box::new(NotImplementedRenderer));
        registry.register(ValueType::RichText, Box::new(RichTextRenderer));
        registry.register(ValueType::ResourcePointer, Box::new(ResourceRenderer));
        registry.register(ValueType::HierarchicalList, Box::new(HlistRenderer));
        registry.register(ValueType::Geometry, Box::new(GeometryRenderer));
        registry.register(ValueType::Color, Box::new(ColorRenderer));
        registry.register(ValueType::GeoName, Box::new(GeonameRenderer));
        registry
    }

    /// Register (or replace) the strategy for a tag.
    pub fn register(&mut self, tag: ValueType, renderer: Box<dyn ValueRenderer>) {
        self.renderers.insert(tag, renderer);
    }

    /// Render `value.values[index]` into `out` using the strategy selected
    /// by the value's type tag.
    pub fn render_value(
        &self,
        out: &mut Fragment,
        value: &PropertyValue,
        index: usize,
        options: &RenderOptions,
    ) {
        let renderer = ValueType::try_from(value.value_type)
            .ok()
            .and_then(|tag| self.renderers.get(&tag))
            .unwrap_or(&self.fallback);
        renderer.render(out, value, index, options);
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
