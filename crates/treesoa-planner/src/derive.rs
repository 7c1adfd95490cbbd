//! Field derivation.
//!
//! Walks the grammar and the schedule's sink sets and requests every field
//! the layout needs. Request order fixes buffer offsets:
//! 1. universal fields
//! 2. interface inputs, public attributes, public fields
//! 3. class private fields and attributes
//! 4. child collection links per class
//! 5. sink snapshots (`_init` / `_last`) per class

use std::time::Instant;

use tracing::info;
use treesoa_core::{Class, ClassId, Grammar, Owner, Schedule, SinkRef};

use crate::registry::FieldRegistry;
use crate::{LayoutPlan, PlanError, Result, StorageType};

/// Run one planning pass.
///
/// Fails on the first error; no partial plan is returned.
pub fn plan<'g>(grammar: &'g Grammar, schedule: &Schedule) -> Result<LayoutPlan<'g>> {
    let start = Instant::now();
    let mut planner = Planner {
        registry: FieldRegistry::with_universal_fields(grammar)?,
        grammar,
        schedule,
    };

    planner.interfaces()?;
    planner.class_members()?;
    planner.child_links()?;
    planner.sinks()?;

    let plan = planner.registry.finish();
    info!(
        fields = plan.fields().len(),
        buffers = plan.buffer_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "layout planned"
    );
    Ok(plan)
}

struct Planner<'g, 's> {
    grammar: &'g Grammar,
    schedule: &'s Schedule,
    registry: FieldRegistry<'g>,
}

impl Planner<'_, '_> {
    fn interfaces(&mut self) -> Result<()> {
        for (id, iface) in self.grammar.interfaces() {
            let owner = Owner::Interface(id);
            let declared = iface
                .inputs
                .keys()
                .chain(iface.attributes.keys())
                .chain(iface.fields.keys());
            for property in declared {
                self.registry.find_or_create(owner, property, None)?;
            }
        }
        Ok(())
    }

    fn class_members(&mut self) -> Result<()> {
        for (id, class) in self.grammar.classes() {
            let owner = Owner::Class(id);
            for property in class.fields.keys().chain(class.attributes.keys()) {
                self.registry.find_or_create(owner, property, None)?;
            }
        }
        Ok(())
    }

    fn child_links(&mut self) -> Result<()> {
        for (id, class) in self.grammar.classes() {
            let owner = Owner::Class(id);
            for role in class.children.keys() {
                let leftmost = format!("child_{role}_leftmost_child");
                let count = format!("child_{role}_count");
                self.registry
                    .find_or_create(owner, &leftmost, Some(StorageType::NodeIndex))?;
                self.registry
                    .find_or_create(owner, &count, Some(StorageType::NodeIndex))?;
            }
        }
        Ok(())
    }

    fn sinks(&mut self) -> Result<()> {
        for (id, class) in self.grammar.classes() {
            let owner = Owner::Class(id);
            for sink in self.schedule.sinks(id) {
                let ty = self.sink_type(id, class, sink)?;
                let stem = sink.normalized();
                self.registry
                    .find_or_create(owner, &format!("{stem}_init"), Some(ty))?;
                self.registry
                    .find_or_create(owner, &format!("{stem}_last"), Some(ty))?;
            }
        }
        Ok(())
    }

    /// Storage type of a sink: a child reference resolves through the
    /// interface the child role requires.
    fn sink_type(&self, id: ClassId, class: &Class, sink: &SinkRef) -> Result<StorageType> {
        match sink {
            SinkRef::Child { role, property } => {
                let iface = class
                    .child(role)
                    .ok_or_else(|| PlanError::UnknownChildRole {
                        class: class.name.clone(),
                        role: role.clone(),
                    })?;
                self.registry
                    .resolve_type(Owner::Interface(iface), property)
            }
            SinkRef::Own(property) | SinkRef::SelfRef(property) => {
                self.registry.resolve_type(Owner::Class(id), property)
            }
        }
    }
}
