//! Planning errors.
//!
//! Every error aborts the planning pass. Messages name the offending
//! property, owner, and type so the grammar author can fix the source.

use treesoa_core::{Grammar, Owner};

/// Why a source type cannot be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Booleans need a conversion routine that does not exist yet.
    #[error("not supported for this target")]
    Boolean,

    #[error("not a valid storage type")]
    StringLike,

    #[error("unrecognized source type, cannot translate")]
    Unrecognized,
}

/// Error during a planning pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("type `{ty}` of property `{property}` on {owner}: {reason}")]
    UnsupportedType {
        owner: String,
        property: String,
        ty: String,
        reason: TypeError,
    },

    #[error("field `{ident}` is a 'maybe' type; optional values cannot be stored")]
    MaybeValue { ident: String },

    /// `searched` lists every place the property was looked up.
    #[error("property `{property}` is not declared on {searched}")]
    UnresolvedProperty { searched: String, property: String },

    #[error("class `{class}` has no child role `{role}`")]
    UnknownChildRole { class: String, role: String },
}

/// Owner description for error messages.
pub(crate) fn describe_owner(grammar: &Grammar, owner: Owner) -> String {
    match (owner, grammar.owner_name(owner)) {
        (Owner::Interface(_), Some(name)) => format!("interface `{name}`"),
        (Owner::Class(_), Some(name)) => format!("class `{name}`"),
        _ => "universal data".to_string(),
    }
}

/// Lookup scope for error messages: the owner, plus the interface a class
/// falls back to.
pub(crate) fn describe_lookup(grammar: &Grammar, owner: Owner) -> String {
    let described = describe_owner(grammar, owner);
    match grammar
        .interface_of(owner)
        .and_then(|iface| grammar.owner_name(Owner::Interface(iface)))
    {
        Some(iface) => format!("{described} or its interface `{iface}`"),
        None => described,
    }
}
