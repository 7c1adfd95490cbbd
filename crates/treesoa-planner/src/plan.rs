//! Frozen planning result.
//!
//! Handed to code emission once a pass completes; nothing in it changes
//! afterwards.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use treesoa_core::{Grammar, Owner};

use crate::buffer::{Buffer, BufferSet};
use crate::field::{Field, FieldId};
use crate::index::FieldIndex;
use crate::naming::normalize_property;
use crate::StorageType;

#[derive(Debug)]
pub struct LayoutPlan<'g> {
    grammar: &'g Grammar,
    fields: Vec<Field>,
    index: FieldIndex,
    buffers: BufferSet,
}

impl<'g> LayoutPlan<'g> {
    pub(crate) fn new(
        grammar: &'g Grammar,
        fields: Vec<Field>,
        index: FieldIndex,
        buffers: BufferSet,
    ) -> Self {
        Self {
            grammar,
            fields,
            index,
            buffers,
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// All fields, in creation order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.index())
    }

    /// All buffers, in creation order.
    pub fn buffers(&self) -> impl Iterator<Item = &Buffer> {
        self.buffers.iter()
    }

    pub fn buffer(&self, name: &str) -> Option<&Buffer> {
        self.buffers.get(name)
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Field answering `(owner, property)` under the registry's matching rules.
    pub fn find(&self, owner: Owner, property: &str) -> Option<&Field> {
        let key = normalize_property(property);
        self.index
            .lookup(self.grammar, &self.fields, owner, &key)
            .map(|id| self.ensure_field(id))
    }

    /// Fields ordered by storage identifier, exempt fields first.
    ///
    /// This is the declaration order code emission uses.
    pub fn sorted_fields(&self) -> Vec<&Field> {
        fn sort_key(field: &Field) -> &str {
            match field.buffer_name() {
                Some(_) => field.ident(),
                None => "",
            }
        }

        let mut sorted: Vec<&Field> = self.fields.iter().collect();
        sorted.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
        sorted
    }

    /// Fields packed into `buffer`, in offset order.
    pub fn fields_in<'a>(&'a self, buffer: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.buffer_name() == Some(buffer))
    }

    pub fn owner_name(&self, field: &Field) -> Option<&'g str> {
        self.grammar.owner_name(field.owner())
    }
}

#[derive(Serialize)]
struct BufferView<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    ty: StorageType,
    primitive: &'static str,
    count: u32,
}

#[derive(Serialize)]
struct FieldView<'a> {
    owner: Option<&'a str>,
    property: &'a str,
    #[serde(rename = "type")]
    ty: StorageType,
    ident: &'a str,
    read: String,
    buffer: Option<&'a str>,
    offset: Option<u32>,
}

impl Serialize for LayoutPlan<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let buffers: Vec<BufferView<'_>> = self
            .buffers()
            .map(|b| BufferView {
                name: b.name(),
                ty: b.element_type(),
                primitive: b.primitive_type(),
                count: b.len(),
            })
            .collect();

        let fields: Vec<FieldView<'_>> = self
            .fields
            .iter()
            .map(|f| FieldView {
                owner: self.owner_name(f),
                property: f.property(),
                ty: f.storage_type(),
                ident: f.ident(),
                read: f.read_expr(),
                buffer: f.buffer_name(),
                offset: f.offset(),
            })
            .collect();

        let mut s = serializer.serialize_struct("LayoutPlan", 2)?;
        s.serialize_field("buffers", &buffers)?;
        s.serialize_field("fields", &fields)?;
        s.end()
    }
}
