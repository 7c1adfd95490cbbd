//! Planned fields.
//!
//! A field starts as an unplaced `FieldDraft`; the buffer packer consumes
//! the draft and returns a placed `Field`. Placement happens exactly once
//! because a `Field` cannot be turned back into a draft.

use treesoa_core::Owner;

use crate::StorageType;
use crate::naming;

/// Field handle, dense in creation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FieldId(u32);

impl FieldId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a field's data lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    Buffer { buffer: String, offset: u32 },
    /// Stored in an externally managed resource, not a packed buffer.
    Exempt,
}

/// A field whose identity is fixed but which has no placement yet.
///
/// Move-only: placing a draft consumes it, so the same draft cannot be
/// placed twice.
///
/// ```compile_fail
/// use treesoa_core::Owner;
/// use treesoa_planner::{BufferSet, FieldDraft, StorageType};
///
/// let mut buffers = BufferSet::new();
/// let draft = FieldDraft::new(Owner::Universal, None, "weight", StorageType::Float);
/// buffers.place(draft.clone());
/// buffers.place(draft);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDraft {
    pub(crate) owner: Owner,
    pub(crate) property: String,
    pub(crate) ty: StorageType,
    pub(crate) ident: String,
}

impl FieldDraft {
    /// `owner_name` is the name of `owner`, `None` for universal data.
    pub fn new(
        owner: Owner,
        owner_name: Option<&str>,
        property: impl Into<String>,
        ty: StorageType,
    ) -> Self {
        let property = property.into();
        let ident = naming::storage_ident(owner_name, &property, ty);
        Self {
            owner,
            property,
            ty,
            ident,
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn storage_type(&self) -> StorageType {
        self.ty
    }
}

/// A placed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    owner: Owner,
    property: String,
    ty: StorageType,
    ident: String,
    placement: Placement,
}

impl Field {
    pub(crate) fn from_draft(draft: FieldDraft, placement: Placement) -> Self {
        Self {
            owner: draft.owner,
            property: draft.property,
            ty: draft.ty,
            ident: draft.ident,
            placement,
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Property name as requested, case preserved.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn storage_type(&self) -> StorageType {
        self.ty
    }

    /// Storage identifier. Host-side code uses the same name.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Identifier to use when reading this field as a value.
    pub fn read_expr(&self) -> String {
        naming::read_expr(&self.ident, self.ty)
    }

    pub fn needs_enum_cast(&self) -> bool {
        self.ty.needs_enum_cast()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn buffer_name(&self) -> Option<&str> {
        match &self.placement {
            Placement::Buffer { buffer, .. } => Some(buffer),
            Placement::Exempt => None,
        }
    }

    pub fn offset(&self) -> Option<u32> {
        match self.placement {
            Placement::Buffer { offset, .. } => Some(offset),
            Placement::Exempt => None,
        }
    }
}
