//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Class, ClassId, Grammar, Interface, InterfaceId};

impl Grammar {
    pub(crate) fn ensure_interface(&self, id: InterfaceId) -> &Interface {
        self.interface(id).unwrap_or_else(|| {
            panic!(
                "Grammar: interface id {} not found \
                 (handles must come from the same grammar)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn ensure_class(&self, id: ClassId) -> &Class {
        self.class(id).unwrap_or_else(|| {
            panic!(
                "Grammar: class id {} not found \
                 (handles must come from the same grammar)",
                id.as_u32()
            )
        })
    }
}
