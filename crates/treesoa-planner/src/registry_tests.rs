use indoc::indoc;
use treesoa_core::Owner;

use crate::registry::UNIVERSAL_FIELDS;
use crate::test_utils::{class, interface, model};
use crate::{FieldRegistry, Placement, PlanError, StorageType, TypeError};

const GRAMMAR: &str = indoc! {r#"
    {
        "interfaces": [
            { "name": "Node", "attributes": { "total": { "type": "int" } } },
            { "name": "Shape", "fields": { "mesh": { "type": "vbo" } } }
        ],
        "classes": [
            {
                "name": "Leaf",
                "interface": "Node",
                "fields": {
                    "weight": { "type": "float" },
                    "flag": { "type": "bool" },
                    "label": { "type": "std::string" },
                    "transform": { "type": "mat4" }
                },
                "attributes": { "hint": { "type": "int", "maybe": true } }
            },
            { "name": "Branch", "interface": "Node", "children": { "left": "Node" } },
            { "name": "Circle", "interface": "Shape" }
        ]
    }
"#};

#[test]
fn universal_fields_are_seeded() {
    let model = model(GRAMMAR);
    let registry = FieldRegistry::with_universal_fields(&model.grammar).unwrap();

    assert_eq!(registry.len(), UNIVERSAL_FIELDS.len());
    let idents: Vec<_> = registry.fields().iter().map(|f| f.ident()).collect();
    assert_eq!(
        idents,
        ["displayname", "refname", "right_siblings", "left_siblings", "parent", "id"]
    );
    assert!(registry.fields().iter().all(|f| f.owner() == Owner::Universal));

    let parent = registry.find(Owner::Universal, "parent").unwrap();
    assert_eq!(parent.storage_type(), StorageType::NodeIndex);
    assert_eq!(parent.buffer_name(), Some("nodeindex_buffer_1"));
    assert_eq!(parent.offset(), Some(2));
}

#[test]
fn same_request_twice_returns_same_field() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let first = registry.find_or_create(leaf, "weight", None).unwrap();
    let before = registry.field(first).unwrap().clone();
    let second = registry.find_or_create(leaf, "weight", None).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.field(second), Some(&before));
    assert_eq!(registry.buffers().get("float_buffer_1").unwrap().len(), 1);
}

#[test]
fn lookup_is_case_insensitive() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let id = registry.find_or_create(leaf, "weight", None).unwrap();
    let again = registry
        .find_or_create(leaf, "WEIGHT", Some(StorageType::Int))
        .unwrap();

    assert_eq!(id, again);
    assert_eq!(registry.field(id).unwrap().property(), "weight");
}

#[test]
fn universal_field_matches_any_owner() {
    let model = model(GRAMMAR);
    let registry = FieldRegistry::with_universal_fields(&model.grammar).unwrap();
    let leaf = Owner::Class(class(&model, "Leaf"));
    let node = Owner::Interface(interface(&model, "Node"));

    for owner in [leaf, node, Owner::Universal] {
        let display = registry.find(owner, "display").unwrap();
        assert_eq!(display.ident(), "displayname");
    }
}

#[test]
fn universal_query_matches_owned_field() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);
    registry.find_or_create(leaf, "weight", None).unwrap();

    let found = registry.find(Owner::Universal, "weight").unwrap();
    assert_eq!(found.ident(), "fld_leaf_weight");
}

#[test]
fn interface_field_matches_implementing_class() {
    let model = model(GRAMMAR);
    let node = Owner::Interface(interface(&model, "Node"));
    let branch = Owner::Class(class(&model, "Branch"));
    let circle = Owner::Class(class(&model, "Circle"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let id = registry.find_or_create(node, "total", None).unwrap();

    assert_eq!(registry.find(branch, "total").unwrap().ident(), "fld_node_total");
    assert!(registry.find(circle, "total").is_none());
    assert_eq!(registry.find_or_create(branch, "total", None).unwrap(), id);
    assert_eq!(registry.len(), 1);
}

#[test]
fn class_field_does_not_match_other_class() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let branch = Owner::Class(class(&model, "Branch"));
    let node = Owner::Interface(interface(&model, "Node"));
    let mut registry = FieldRegistry::new(&model.grammar);

    registry
        .find_or_create(leaf, "count", Some(StorageType::Int))
        .unwrap();

    assert!(registry.find(branch, "count").is_none());
    assert!(registry.find(node, "count").is_none());
}

#[test]
fn compound_reference_finds_collapsed_field() {
    let model = model(GRAMMAR);
    let branch = Owner::Class(class(&model, "Branch"));
    let mut registry = FieldRegistry::new(&model.grammar);

    registry
        .find_or_create(branch, "left_total_init", Some(StorageType::Int))
        .unwrap();

    let found = registry.find(branch, "left@total_init").unwrap();
    assert_eq!(found.ident(), "fld_branch_left_total_init");
}

#[test]
fn type_is_inferred_through_interface() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let registry = FieldRegistry::new(&model.grammar);

    assert_eq!(registry.resolve_type(leaf, "total"), Ok(StorageType::Int));
    assert_eq!(registry.resolve_type(leaf, "weight"), Ok(StorageType::Float));
}

#[test]
fn explicit_type_skips_inference() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let id = registry
        .find_or_create(leaf, "child_kids_count", Some(StorageType::NodeIndex))
        .unwrap();

    let field = registry.field(id).unwrap();
    assert_eq!(field.storage_type(), StorageType::NodeIndex);
    assert_eq!(field.ident(), "fld_leaf_child_kids_count");
}

#[test]
fn bool_property_is_rejected_without_creating_field() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry.find_or_create(leaf, "flag", None).unwrap_err();

    assert_eq!(
        err,
        PlanError::UnsupportedType {
            owner: "class `Leaf`".into(),
            property: "flag".into(),
            ty: "bool".into(),
            reason: TypeError::Boolean,
        }
    );
    assert_eq!(
        err.to_string(),
        "type `bool` of property `flag` on class `Leaf`: not supported for this target"
    );
    assert!(registry.is_empty());
    assert!(registry.buffers().is_empty());
}

#[test]
fn string_property_is_rejected() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry.find_or_create(leaf, "label", None).unwrap_err();

    assert!(matches!(
        err,
        PlanError::UnsupportedType {
            reason: TypeError::StringLike,
            ..
        }
    ));
    assert!(registry.find(leaf, "label").is_none());
}

#[test]
fn unrecognized_type_is_rejected() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry.find_or_create(leaf, "transform", None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "type `mat4` of property `transform` on class `Leaf`: \
         unrecognized source type, cannot translate"
    );
}

#[test]
fn maybe_property_is_rejected() {
    let model = model(GRAMMAR);
    let leaf = Owner::Class(class(&model, "Leaf"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry.find_or_create(leaf, "hint", None).unwrap_err();

    assert_eq!(
        err,
        PlanError::MaybeValue {
            ident: "fld_leaf_hint".into()
        }
    );
    assert!(registry.is_empty());
}

#[test]
fn undeclared_property_is_unresolved() {
    let model = model(GRAMMAR);
    let branch = Owner::Class(class(&model, "Branch"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry.find_or_create(branch, "weight", None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "property `weight` is not declared on class `Branch` or its interface `Node`"
    );
}

#[test]
fn universal_property_needs_explicit_type() {
    let model = model(GRAMMAR);
    let mut registry = FieldRegistry::new(&model.grammar);

    let err = registry
        .find_or_create(Owner::Universal, "depth", None)
        .unwrap_err();

    assert!(matches!(err, PlanError::UnresolvedProperty { ref searched, .. } if searched == "universal data"));
}

#[test]
fn vbo_field_is_exempt() {
    let model = model(GRAMMAR);
    let shape = Owner::Interface(interface(&model, "Shape"));
    let mut registry = FieldRegistry::new(&model.grammar);

    let id = registry.find_or_create(shape, "mesh", None).unwrap();

    let field = registry.field(id).unwrap();
    assert_eq!(field.placement(), &Placement::Exempt);
    assert_eq!(field.ident(), "mesh");
    assert!(registry.buffers().is_empty());
}
