//! Identifier derivation for fields and buffers.
//!
//! Pure functions shared with code emission, which must address each datum
//! by exactly these names.

use crate::StorageType;

/// Suffix of every generated buffer name.
pub const BUFFER_SUFFIX: &str = "_buffer_1";

/// Enumeration holding the grammar tokens in generated code.
pub const ENUM_NAME: &str = "unionvariants";

const COMPOUND_SEPARATOR: char = '@';
const SELF_PREFIX: &str = "self@";

/// Registry key for a property name.
///
/// Lowercases, and collapses a compound `role@prop` reference into
/// `role_prop`. The `self@` form keeps its separator.
pub fn normalize_property(property: &str) -> String {
    let lower = property.to_lowercase();
    if lower.contains(COMPOUND_SEPARATOR) && !lower.starts_with(SELF_PREFIX) {
        lower.replace(COMPOUND_SEPARATOR, "_")
    } else {
        lower
    }
}

/// Lowercase, drop dashes and spaces.
fn clean(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect()
}

/// Storage identifier of a field.
///
/// `owner` is the owning class or interface name, `None` for universal data.
pub fn storage_ident(owner: Option<&str>, property: &str, ty: StorageType) -> String {
    if ty.is_exempt() {
        return property.to_string();
    }

    match owner {
        None if property == "display" => "displayname".to_string(),
        None => clean(property),
        Some(owner) => format!("fld_{}_{}", clean(owner), clean(property)),
    }
}

/// Expression reading a field as a value, with the enumeration cast applied
/// where the storage type needs one.
pub fn read_expr(ident: &str, ty: StorageType) -> String {
    if ty.needs_enum_cast() {
        format!("(enum {ENUM_NAME}) {ident}")
    } else {
        ident.to_string()
    }
}

/// Buffer holding all fields of a storage type.
pub fn buffer_name(ty: StorageType) -> String {
    let mut name: String = ty
        .target_name()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '*' | '-'))
        .map(|c| if c == ':' { '_' } else { c })
        .collect();
    name.push_str(BUFFER_SUFFIX);
    name
}
