//! Evaluation schedule sink sets.
//!
//! A sink is a property the schedule materializes during tree reduction.
//! References are either the class's own property (`total`, `self@total`)
//! or a child's property (`left@total`).

use std::fmt;

use indexmap::IndexMap;

use crate::ClassId;

/// Separator of compound `role@property` references.
pub const COMPOUND_SEPARATOR: char = '@';

/// Role name that denotes the class itself.
pub const SELF_ROLE: &str = "self";

/// A parsed sink reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SinkRef {
    /// `property`
    Own(String),
    /// `self@property`
    SelfRef(String),
    /// `role@property`
    Child { role: String, property: String },
}

impl SinkRef {
    /// Classify a textual reference. Only the first separator splits, and
    /// the `self` role matches in any case, like property lookup.
    pub fn parse(text: &str) -> Self {
        match text.split_once(COMPOUND_SEPARATOR) {
            None => Self::Own(text.to_string()),
            Some((role, property)) if role.eq_ignore_ascii_case(SELF_ROLE) => {
                Self::SelfRef(property.to_string())
            }
            Some((role, property)) => Self::Child {
                role: role.to_string(),
                property: property.to_string(),
            },
        }
    }

    /// The referenced property name, without any role.
    pub fn property(&self) -> &str {
        match self {
            Self::Own(p) | Self::SelfRef(p) => p,
            Self::Child { property, .. } => property,
        }
    }

    /// Child role, if this refers to a child's property.
    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Child { role, .. } => Some(role),
            Self::Own(_) | Self::SelfRef(_) => None,
        }
    }

    /// Field stem for this reference: `role@prop` becomes `role_prop`,
    /// a `self` role is dropped.
    pub fn normalized(&self) -> String {
        match self {
            Self::Own(p) | Self::SelfRef(p) => p.clone(),
            Self::Child { role, property } => format!("{role}_{property}"),
        }
    }
}

impl fmt::Display for SinkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Own(p) => f.write_str(p),
            Self::SelfRef(p) => write!(f, "{SELF_ROLE}{COMPOUND_SEPARATOR}{p}"),
            Self::Child { role, property } => write!(f, "{role}{COMPOUND_SEPARATOR}{property}"),
        }
    }
}

/// Sink sets per class. Classes without an entry have no sinks.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    sinks: IndexMap<ClassId, Vec<SinkRef>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append sinks for a class, keeping first-seen order and dropping
    /// repeated references.
    pub fn insert(&mut self, class: ClassId, sinks: impl IntoIterator<Item = SinkRef>) {
        let entry = self.sinks.entry(class).or_default();
        for sink in sinks {
            if !entry.contains(&sink) {
                entry.push(sink);
            }
        }
    }

    pub fn sinks(&self, class: ClassId) -> &[SinkRef] {
        self.sinks.get(&class).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of classes with a sink entry.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
