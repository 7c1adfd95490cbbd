//! Human-readable plan listing for debugging and documentation.

use std::fmt::Write as _;

use treesoa_core::Colors;

use crate::LayoutPlan;
use crate::field::Field;

/// Generate a human-readable dump of a layout plan.
///
/// Buffers in creation order, then fields in declaration order (sorted by
/// storage identifier, exempt fields first).
pub fn dump(plan: &LayoutPlan<'_>, colors: Colors) -> String {
    let mut out = String::new();
    dump_buffers(&mut out, plan, colors);
    out.push('\n');
    dump_fields(&mut out, plan, colors);
    out
}

fn dump_buffers(out: &mut String, plan: &LayoutPlan<'_>, c: Colors) {
    let name_w = plan.buffers().map(|b| b.name().len()).max().unwrap_or(0);
    let ty_w = plan
        .buffers()
        .map(|b| b.element_type().target_name().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{}[buffers]{}", c.section, c.reset).unwrap();
    for buffer in plan.buffers() {
        writeln!(
            out,
            "{}{:<name_w$}{}  {}{:<ty_w$}{}  {}{} x {}{}",
            c.name,
            buffer.name(),
            c.reset,
            c.ty,
            buffer.element_type().target_name(),
            c.reset,
            c.meta,
            buffer.len(),
            buffer.primitive_type(),
            c.reset,
        )
        .unwrap();
    }
}

fn location(field: &Field) -> String {
    match (field.buffer_name(), field.offset()) {
        (Some(buffer), Some(offset)) => format!("{buffer}[{offset}]"),
        _ => "-".to_string(),
    }
}

fn dump_fields(out: &mut String, plan: &LayoutPlan<'_>, c: Colors) {
    let fields = plan.sorted_fields();
    let ident_w = fields.iter().map(|f| f.ident().len()).max().unwrap_or(0);
    let ty_w = fields
        .iter()
        .map(|f| f.storage_type().target_name().len())
        .max()
        .unwrap_or(0);
    let loc_w = fields.iter().map(|f| location(f).len()).max().unwrap_or(0);

    writeln!(out, "{}[fields]{}", c.section, c.reset).unwrap();
    for field in fields {
        let owner = plan.owner_name(field).unwrap_or("*");
        writeln!(
            out,
            "{:<ident_w$}  {}{:<ty_w$}{}  {:<loc_w$}  {}{}.{}{}",
            field.ident(),
            c.ty,
            field.storage_type().target_name(),
            c.reset,
            location(field),
            c.meta,
            owner,
            field.property(),
            c.reset,
        )
        .unwrap();
    }
}
