use super::*;

fn tree() -> (Grammar, InterfaceId, ClassId) {
    let mut grammar = Grammar::new();

    let mut node = Interface::new("Node");
    node.attributes.insert("total".into(), Property::new("int"));
    node.inputs.insert("x".into(), Property::new("px"));
    let node = grammar.add_interface(node).unwrap();

    let mut leaf = Class::new("Leaf", node);
    leaf.fields.insert("weight".into(), Property::new("float"));
    leaf.attributes.insert("hint".into(), Property::maybe("int"));
    let leaf = grammar.add_class(leaf).unwrap();

    (grammar, node, leaf)
}

#[test]
fn handles_are_dense_in_declaration_order() {
    let (mut grammar, node, leaf) = tree();
    let other = grammar.add_class(Class::new("Other", node)).unwrap();

    assert_eq!(node.as_u32(), 0);
    assert_eq!(leaf.as_u32(), 0);
    assert_eq!(other.as_u32(), 1);
    assert_eq!(grammar.class_by_name("Other"), Some(other));
}

#[test]
fn interface_property_searches_all_groups() {
    let (grammar, node, _) = tree();
    let iface = grammar.interface(node).unwrap();

    assert_eq!(iface.property("total"), Some(&Property::new("int")));
    assert_eq!(iface.property("x"), Some(&Property::new("px")));
    assert_eq!(iface.property("weight"), None);
}

#[test]
fn class_property_searches_fields_and_attributes() {
    let (grammar, _, leaf) = tree();
    let class = grammar.class(leaf).unwrap();

    assert_eq!(class.property("weight").map(|p| p.ty.as_str()), Some("float"));
    assert!(class.property("hint").unwrap().maybe);
    assert!(class.property("total").is_none());
}

#[test]
fn owner_names() {
    let (grammar, node, leaf) = tree();

    assert_eq!(grammar.owner_name(Owner::Universal), None);
    assert_eq!(grammar.owner_name(Owner::Interface(node)), Some("Node"));
    assert_eq!(grammar.owner_name(Owner::Class(leaf)), Some("Leaf"));
}

#[test]
fn interface_of_only_for_classes() {
    let (grammar, node, leaf) = tree();

    assert_eq!(grammar.interface_of(Owner::Class(leaf)), Some(node));
    assert_eq!(grammar.interface_of(Owner::Interface(node)), None);
    assert_eq!(grammar.interface_of(Owner::Universal), None);
}

#[test]
#[should_panic(expected = "interface id 7 not found")]
fn foreign_interface_handle_panics() {
    let (mut grammar, _, _) = tree();
    let mut other = Grammar::new();
    for _ in 0..8 {
        let name = format!("I{}", other.interface_count());
        other.add_interface(Interface::new(name)).unwrap();
    }
    let foreign = other.interface_by_name("I7").unwrap();

    let _ = grammar.add_class(Class::new("Bad", foreign));
}
