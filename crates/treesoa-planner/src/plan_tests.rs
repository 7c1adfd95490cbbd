use indoc::indoc;
use serde_json::json;
use treesoa_core::Owner;

use crate::test_utils::{class, interface, model};
use crate::{StorageType, plan};

const GRAMMAR: &str = indoc! {r#"
    {
        "interfaces": [
            { "name": "Node", "attributes": { "total": { "type": "int" } } },
            { "name": "Shape", "fields": { "mesh": { "type": "vbo" } } }
        ],
        "classes": [
            { "name": "Leaf", "interface": "Node", "fields": { "weight": { "type": "float" } } },
            { "name": "Circle", "interface": "Shape" }
        ]
    }
"#};

#[test]
fn find_applies_registry_matching() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();
    let leaf = Owner::Class(class(&model, "Leaf"));
    let circle = Owner::Class(class(&model, "Circle"));

    assert_eq!(plan.find(leaf, "TOTAL").unwrap().ident(), "fld_node_total");
    assert!(plan.find(circle, "total").is_none());
    assert_eq!(plan.find(circle, "parent").unwrap().ident(), "parent");
    assert!(plan.find(leaf, "missing").is_none());
}

#[test]
fn sorted_fields_put_exempt_first() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();

    let idents: Vec<_> = plan.sorted_fields().iter().map(|f| f.ident()).collect();
    assert_eq!(
        idents,
        [
            "mesh",
            "displayname",
            "fld_leaf_weight",
            "fld_node_total",
            "id",
            "left_siblings",
            "parent",
            "refname",
            "right_siblings"
        ]
    );
    // creation order is untouched
    assert_eq!(plan.fields()[0].ident(), "displayname");
}

#[test]
fn fields_in_buffer_follow_offsets() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();

    let idents: Vec<_> = plan
        .fields_in("nodeindex_buffer_1")
        .map(|f| f.ident())
        .collect();
    assert_eq!(idents, ["right_siblings", "left_siblings", "parent", "id"]);
    assert_eq!(plan.fields_in("missing_buffer_1").count(), 0);
}

#[test]
fn buffer_reports_primitive_type() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();

    let tokens = plan.buffer("grammartokens_buffer_1").unwrap();
    assert_eq!(tokens.element_type(), StorageType::GrammarTokens);
    assert_eq!(tokens.primitive_type(), "int");

    let floats = plan.buffer("float_buffer_1").unwrap();
    assert_eq!(floats.primitive_type(), "float");
    assert_eq!(plan.buffer_count(), 4);
}

#[test]
fn owner_name_of_fields() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();
    let node = Owner::Interface(interface(&model, "Node"));

    let total = plan.find(node, "total").unwrap();
    let id = plan.find(node, "id").unwrap();

    assert_eq!(plan.owner_name(total), Some("Node"));
    assert_eq!(plan.owner_name(id), None);
}

#[test]
fn token_fields_read_through_enum_cast() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();

    let display = plan.find(Owner::Universal, "display").unwrap();
    assert!(display.needs_enum_cast());
    assert_eq!(display.read_expr(), "(enum unionvariants) displayname");

    let parent = plan.find(Owner::Universal, "parent").unwrap();
    assert!(!parent.needs_enum_cast());
    assert_eq!(parent.read_expr(), "parent");
}

#[test]
fn serializes_to_json() {
    let model = model(GRAMMAR);
    let plan = plan(&model.grammar, &model.schedule).unwrap();

    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(
        value["buffers"],
        json!([
            { "name": "grammartokens_buffer_1", "type": "GrammarTokens", "primitive": "int", "count": 2 },
            { "name": "nodeindex_buffer_1", "type": "NodeIndex", "primitive": "int", "count": 4 },
            { "name": "int_buffer_1", "type": "int", "primitive": "int", "count": 1 },
            { "name": "float_buffer_1", "type": "float", "primitive": "float", "count": 1 }
        ])
    );
    assert_eq!(
        value["fields"][0],
        json!({
            "owner": null,
            "property": "display",
            "type": "GrammarTokens",
            "ident": "displayname",
            "read": "(enum unionvariants) displayname",
            "buffer": "grammartokens_buffer_1",
            "offset": 0
        })
    );
    assert_eq!(
        value["fields"][7],
        json!({
            "owner": "Shape",
            "property": "mesh",
            "type": "__global VertexAndColor*",
            "ident": "mesh",
            "read": "mesh",
            "buffer": null,
            "offset": null
        })
    );
    assert_eq!(value["fields"].as_array().unwrap().len(), 9);
}
