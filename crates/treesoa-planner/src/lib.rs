//! treesoa planner: struct-of-arrays memory layout for attribute grammars.
//!
//! A planning pass collapses a grammar's class/interface attribute model into
//! a fixed set of primitive storage types and packs every datum into a
//! per-type, append-only buffer:
//! - `types` - source type names to storage types
//! - `naming` - identifiers for fields and buffers
//! - `buffer` - buffer packing
//! - `registry` - deduplicated field set
//! - `derive` - which fields a grammar and schedule need
//! - `plan` - the frozen result handed to code emission
//! - `dump` - human-readable plan listing

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod buffer;
pub mod derive;
pub mod dump;
mod error;
pub mod field;
mod index;
mod invariants;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod types;

#[cfg(test)]
mod plan_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod test_utils;

pub use buffer::{Buffer, BufferSet};
pub use derive::plan;
pub use dump::dump;
pub use error::{PlanError, TypeError};
pub use field::{Field, FieldDraft, FieldId, Placement};
pub use plan::LayoutPlan;
pub use registry::FieldRegistry;
pub use types::{SourceType, StorageType};

/// Result type for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;
