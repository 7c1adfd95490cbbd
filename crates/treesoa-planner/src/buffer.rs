//! Buffer packing.
//!
//! Fields are grouped by storage type into append-only buffers. A field's
//! offset is the buffer's field count at the moment it is placed.

use indexmap::IndexMap;
use tracing::debug;

use crate::field::{Field, FieldDraft, Placement};
use crate::{StorageType, naming};

/// A homogeneously typed, append-only buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    name: String,
    element: StorageType,
    len: u32,
}

impl Buffer {
    fn new(name: String, element: StorageType) -> Self {
        Self {
            name,
            element,
            len: 0,
        }
    }

    /// Reserve the next offset.
    fn push(&mut self) -> u32 {
        let offset = self.len;
        self.len += 1;
        offset
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> StorageType {
        self.element
    }

    /// Raw element type; enumerations are reported as `int`.
    pub fn primitive_type(&self) -> &'static str {
        self.element.primitive()
    }

    /// Number of fields packed into this buffer.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// All buffers of one planning pass, in creation order.
#[derive(Debug, Clone, Default)]
pub struct BufferSet {
    buffers: IndexMap<String, Buffer>,
}

impl BufferSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a field, opening its type's buffer on first use.
    ///
    /// Exempt types are not placed in any buffer.
    pub fn place(&mut self, draft: FieldDraft) -> Field {
        if draft.ty.is_exempt() {
            debug!(field = %draft.ident, "exempt from buffer placement");
            return Field::from_draft(draft, Placement::Exempt);
        }

        let name = naming::buffer_name(draft.ty);
        let buffer = self.buffers.entry(name).or_insert_with_key(|name| {
            debug!(buffer = %name, ty = %draft.ty, "buffer opened");
            Buffer::new(name.clone(), draft.ty)
        });
        let placement = Placement::Buffer {
            buffer: buffer.name.clone(),
            offset: buffer.push(),
        };

        Field::from_draft(draft, placement)
    }

    pub fn get(&self, name: &str) -> Option<&Buffer> {
        self.buffers.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buffer> {
        self.buffers.values()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
