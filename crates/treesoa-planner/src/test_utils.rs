//! Test fixtures.

use treesoa_core::{ClassId, InterfaceId, Model};

/// Load a model fixture, panicking on malformed JSON.
pub fn model(json: &str) -> Model {
    Model::from_json(json).unwrap_or_else(|e| panic!("invalid fixture: {e}"))
}

pub fn class(model: &Model, name: &str) -> ClassId {
    model
        .grammar
        .class_by_name(name)
        .unwrap_or_else(|| panic!("no class {name}"))
}

pub fn interface(model: &Model, name: &str) -> InterfaceId {
    model
        .grammar
        .interface_by_name(name)
        .unwrap_or_else(|| panic!("no interface {name}"))
}

/// `(ident, buffer, offset)` of every field, in creation order.
pub fn layout(plan: &crate::LayoutPlan<'_>) -> Vec<(String, Option<String>, Option<u32>)> {
    plan.fields()
        .iter()
        .map(|f| {
            (
                f.ident().to_string(),
                f.buffer_name().map(str::to_string),
                f.offset(),
            )
        })
        .collect()
}
