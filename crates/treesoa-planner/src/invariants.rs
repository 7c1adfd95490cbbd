//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::field::{Field, FieldId};
use crate::plan::LayoutPlan;
use crate::registry::FieldRegistry;

impl FieldRegistry<'_> {
    pub(crate) fn ensure_field(&self, id: FieldId) -> &Field {
        self.field(id).unwrap_or_else(|| {
            panic!(
                "FieldRegistry: field id {} not found \
                 (index and field list out of sync)",
                id.as_u32()
            )
        })
    }
}

impl LayoutPlan<'_> {
    pub(crate) fn ensure_field(&self, id: FieldId) -> &Field {
        self.field(id).unwrap_or_else(|| {
            panic!(
                "LayoutPlan: field id {} not found \
                 (ids must come from the same planning pass)",
                id.as_u32()
            )
        })
    }
}
