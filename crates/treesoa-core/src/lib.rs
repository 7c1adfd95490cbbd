#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for treesoa.
//!
//! Two inputs feed a layout planning pass:
//! - **Grammar model** (`Grammar`): interfaces, classes, their declared
//!   properties and child roles
//! - **Schedule** (`Schedule`): per-class sink references materialized
//!   during tree reduction
//!
//! Both are loaded together from a single JSON document (`Model`) and are
//! read-only once constructed.

pub mod colors;
pub mod grammar;
mod invariants;
pub mod schedule;


pub use colors::Colors;
pub use grammar::{
    Class, ClassId, Grammar, Interface, InterfaceId, Model, ModelError, Owner, Properties,
    Property,
};
pub use schedule::{Schedule, SinkRef};
