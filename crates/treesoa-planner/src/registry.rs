//! Deduplicated field registry.
//!
//! Owns the only mutable state of a planning pass: the fields created so far
//! and the buffers they are packed into. Each pass uses its own registry.

use tracing::{debug, trace};
use treesoa_core::{Grammar, Owner};

use crate::buffer::BufferSet;
use crate::error::{describe_lookup, describe_owner};
use crate::field::{Field, FieldDraft, FieldId};
use crate::index::FieldIndex;
use crate::naming::normalize_property;
use crate::plan::LayoutPlan;
use crate::{PlanError, Result, StorageType};

/// Fields present on every node regardless of class.
pub const UNIVERSAL_FIELDS: [(&str, StorageType); 6] = [
    ("display", StorageType::GrammarTokens),
    ("refname", StorageType::GrammarTokens),
    ("right_siblings", StorageType::NodeIndex),
    ("left_siblings", StorageType::NodeIndex),
    ("parent", StorageType::NodeIndex),
    ("id", StorageType::NodeIndex),
];

#[derive(Debug)]
pub struct FieldRegistry<'g> {
    grammar: &'g Grammar,
    fields: Vec<Field>,
    index: FieldIndex,
    buffers: BufferSet,
}

impl<'g> FieldRegistry<'g> {
    /// Empty registry, without the universal fields.
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            fields: Vec::new(),
            index: FieldIndex::default(),
            buffers: BufferSet::new(),
        }
    }

    /// Registry seeded with the universal fields.
    pub fn with_universal_fields(grammar: &'g Grammar) -> Result<Self> {
        let mut registry = Self::new(grammar);
        for (property, ty) in UNIVERSAL_FIELDS {
            registry.find_or_create(Owner::Universal, property, Some(ty))?;
        }
        Ok(registry)
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Existing field answering `(owner, property)`, if any.
    pub fn find(&self, owner: Owner, property: &str) -> Option<&Field> {
        let key = normalize_property(property);
        self.index
            .lookup(self.grammar, &self.fields, owner, &key)
            .map(|id| self.ensure_field(id))
    }

    /// Return the field answering `(owner, property)`, creating and placing
    /// it if none exists.
    ///
    /// Without an explicit type the type is inferred from the grammar
    /// declaration on `owner` or its interface.
    pub fn find_or_create(
        &mut self,
        owner: Owner,
        property: &str,
        explicit: Option<StorageType>,
    ) -> Result<FieldId> {
        let key = normalize_property(property);
        if let Some(id) = self.index.lookup(self.grammar, &self.fields, owner, &key) {
            trace!(property, "field already planned");
            return Ok(id);
        }

        let ty = match explicit {
            Some(ty) => ty,
            None => self.resolve_type(owner, property)?,
        };

        let draft = FieldDraft::new(owner, self.grammar.owner_name(owner), property, ty);

        // TODO: support 'maybe' values once the device side can encode absence.
        if self
            .grammar
            .property(owner, property)
            .is_some_and(|p| p.maybe)
        {
            return Err(PlanError::MaybeValue {
                ident: draft.ident().to_string(),
            });
        }

        let field = self.buffers.place(draft);
        debug!(
            field = field.ident(),
            ty = %field.storage_type(),
            buffer = field.buffer_name().unwrap_or("-"),
            offset = ?field.offset(),
            "field planned"
        );

        let id = FieldId::new(self.fields.len());
        self.fields.push(field);
        self.index.insert(key, id);
        Ok(id)
    }

    /// Storage type of a declared property.
    ///
    /// Looks on `owner` first, then on the interface it implements.
    pub fn resolve_type(&self, owner: Owner, property: &str) -> Result<StorageType> {
        let declared = self
            .grammar
            .property(owner, property)
            .or_else(|| {
                let iface = self.grammar.interface_of(owner)?;
                self.grammar.property(Owner::Interface(iface), property)
            })
            .ok_or_else(|| PlanError::UnresolvedProperty {
                searched: describe_lookup(self.grammar, owner),
                property: property.to_string(),
            })?;

        StorageType::map(&declared.ty).map_err(|reason| PlanError::UnsupportedType {
            owner: describe_owner(self.grammar, owner),
            property: property.to_string(),
            ty: declared.ty.clone(),
            reason,
        })
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.index())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn buffers(&self) -> &BufferSet {
        &self.buffers
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the registry into a plan.
    pub fn finish(self) -> LayoutPlan<'g> {
        LayoutPlan::new(self.grammar, self.fields, self.index, self.buffers)
    }
}
