//! JSON loading for grammar models.
//!
//! One document carries both the grammar and its evaluation schedule.
//! Names are resolved to handles here; anything referring to an undeclared
//! interface or class is rejected.

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Class, Grammar, Interface, Properties, Property};
use crate::schedule::{Schedule, SinkRef};

/// Error while loading a grammar model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("class `{class}` implements unknown interface `{name}`")]
    UnknownInterface { class: String, name: String },

    #[error("child role `{role}` of class `{class}` requires unknown interface `{name}`")]
    UnknownChildInterface {
        class: String,
        role: String,
        name: String,
    },

    #[error("schedule refers to unknown class `{0}`")]
    UnknownScheduledClass(String),

    #[error("interface `{0}` is declared more than once")]
    DuplicateInterface(String),

    #[error("class `{0}` is declared more than once")]
    DuplicateClass(String),
}

/// A grammar together with its evaluation schedule.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub grammar: Grammar,
    pub schedule: Schedule,
}

impl Model {
    /// Parse a model from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw: RawModel = serde_json::from_str(json)?;
        raw.resolve()
    }
}

#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(default)]
    interfaces: Vec<RawInterface>,
    #[serde(default)]
    classes: Vec<RawClass>,
    #[serde(default)]
    schedule: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawInterface {
    name: String,
    #[serde(default)]
    inputs: IndexMap<String, RawProperty>,
    #[serde(default)]
    attributes: IndexMap<String, RawProperty>,
    #[serde(default)]
    fields: IndexMap<String, RawProperty>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,
    interface: String,
    #[serde(default)]
    fields: IndexMap<String, RawProperty>,
    #[serde(default)]
    attributes: IndexMap<String, RawProperty>,
    #[serde(default)]
    children: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    maybe: bool,
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        Self {
            ty: raw.ty,
            maybe: raw.maybe,
        }
    }
}

fn properties(raw: IndexMap<String, RawProperty>) -> Properties {
    raw.into_iter().map(|(k, v)| (k, v.into())).collect()
}

impl RawModel {
    fn resolve(self) -> Result<Model, ModelError> {
        let mut grammar = Grammar::new();

        // Interfaces first: classes and child roles refer to them by name.
        for raw in self.interfaces {
            grammar.add_interface(Interface {
                name: raw.name,
                inputs: properties(raw.inputs),
                attributes: properties(raw.attributes),
                fields: properties(raw.fields),
            })?;
        }

        for raw in self.classes {
            let Some(interface) = grammar.interface_by_name(&raw.interface) else {
                return Err(ModelError::UnknownInterface {
                    class: raw.name,
                    name: raw.interface,
                });
            };

            let mut children = IndexMap::new();
            for (role, iface_name) in raw.children {
                let Some(iface) = grammar.interface_by_name(&iface_name) else {
                    return Err(ModelError::UnknownChildInterface {
                        class: raw.name,
                        role,
                        name: iface_name,
                    });
                };
                children.insert(role, iface);
            }

            grammar.add_class(Class {
                name: raw.name,
                interface,
                fields: properties(raw.fields),
                attributes: properties(raw.attributes),
                children,
            })?;
        }

        let mut schedule = Schedule::new();
        for (class_name, sinks) in self.schedule {
            let Some(class) = grammar.class_by_name(&class_name) else {
                return Err(ModelError::UnknownScheduledClass(class_name));
            };
            schedule.insert(class, sinks.iter().map(|s| SinkRef::parse(s)));
        }

        Ok(Model { grammar, schedule })
    }
}
