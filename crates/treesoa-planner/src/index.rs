//! Field lookup by normalized property name.

use std::collections::HashMap;

use treesoa_core::{Grammar, Owner};

use crate::field::{Field, FieldId};

/// Candidate fields keyed by normalized property name, in creation order.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldIndex {
    by_name: HashMap<String, Vec<FieldId>>,
}

impl FieldIndex {
    pub(crate) fn insert(&mut self, key: String, id: FieldId) {
        self.by_name.entry(key).or_default().push(id);
    }

    /// First field under `key` whose owner is compatible with `owner`.
    pub(crate) fn lookup(
        &self,
        grammar: &Grammar,
        fields: &[Field],
        owner: Owner,
        key: &str,
    ) -> Option<FieldId> {
        self.by_name
            .get(key)?
            .iter()
            .copied()
            .find(|id| owners_match(grammar, fields[id.index()].owner(), owner))
    }
}

/// Whether a field owned by `existing` answers a lookup for `queried`.
///
/// Universal on either side matches anything; an interface-owned field
/// matches every class implementing that interface.
pub(crate) fn owners_match(grammar: &Grammar, existing: Owner, queried: Owner) -> bool {
    match (existing, queried) {
        (_, Owner::Universal) | (Owner::Universal, _) => true,
        _ if existing == queried => true,
        (Owner::Interface(iface), queried) => grammar.interface_of(queried) == Some(iface),
        (Owner::Class(_), _) => false,
    }
}
