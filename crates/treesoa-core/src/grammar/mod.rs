//! Attribute grammar model.
//!
//! Interfaces and classes with their declared properties, plus JSON loading
//! of a grammar together with its evaluation schedule.

mod json;
mod types;

#[cfg(test)]
mod types_tests;

pub use json::{Model, ModelError};
pub use types::{Class, ClassId, Grammar, Interface, InterfaceId, Owner, Properties, Property};
