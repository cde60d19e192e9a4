use serde_json::json;

use super::*;

fn node(value: serde_json::Value) -> Node {
    serde_json::from_value(value).expect("valid node")
}

#[test]
fn unknown_node_type_keeps_raw_tag() {
    let parsed = node(json!({ "id": 3, "nodeType": "YulBlock" }));
    assert_eq!(parsed.node_type, Some(NodeKind::Other("YulBlock".to_owned())));
    assert_eq!(parsed.node_type.as_ref().map(NodeKind::as_str), Some("YulBlock"));

    let function = node(json!({ "nodeType": "FunctionDefinition" }));
    assert!(function.is(&NodeKind::FunctionDefinition));
    assert!(!function.is(&NodeKind::ModifierDefinition));
}

#[test]
fn children_merge_plain_and_body_nodes() {
    let parsed = node(json!({
        "id": 1,
        "nodes": [{ "id": 2 }, { "id": 3 }],
        "body": { "nodes": [{ "id": 4 }] }
    }));
    let ids: Vec<_> = parsed.children().map(|child| child.id).collect();
    assert_eq!(ids, vec![Some(2), Some(3), Some(4)]);

    let reversed: Vec<_> = parsed.children().rev().map(|child| child.id).collect();
    assert_eq!(reversed, vec![Some(4), Some(3), Some(2)]);
}

#[test]
fn absent_containers_read_as_empty() {
    let parsed = node(json!({ "id": 1, "body": null, "baseContracts": null }));
    assert!(!parsed.has_children());
    assert!(parsed.base_contracts().is_empty());
    assert!(!parsed.declares_bases());
    assert_eq!(parsed.name(), "");
    assert_eq!(parsed.documentation(), "");
    assert_eq!(parsed.overridden_ids().count(), 0);

    let body_without_nodes = node(json!({ "body": { "nodeType": "Block", "statements": [] } }));
    assert!(!body_without_nodes.has_children());
}

#[test]
fn zero_id_is_treated_as_absent() {
    assert_eq!(node(json!({ "id": 0 })).node_id(), None);
    assert_eq!(node(json!({})).node_id(), None);
    assert_eq!(node(json!({ "id": 12 })).node_id(), Some(12));
}

#[test]
fn overridden_ids_cover_legacy_and_current_fields() {
    let legacy = node(json!({ "id": 5, "superFunction": 2 }));
    assert_eq!(legacy.overridden_ids().collect::<Vec<_>>(), vec![2]);

    let current = node(json!({ "id": 6, "baseFunctions": [2, 3] }));
    assert_eq!(current.overridden_ids().collect::<Vec<_>>(), vec![2, 3]);
    assert!(current.overrides_any(|id| id == 3));
    assert!(!current.overrides_any(|id| id == 4));
}

#[test]
fn constructor_flag_and_kind_both_mark_constructors() {
    assert!(node(json!({ "isConstructor": true })).is_constructor());
    assert!(node(json!({ "kind": "constructor" })).is_constructor());
    assert!(!node(json!({ "isConstructor": false, "kind": "function" })).is_constructor());
}

#[test]
fn documentation_accepts_raw_and_structured_forms() {
    let raw = node(json!({ "documentation": "@notice Raw text" }));
    assert_eq!(raw.documentation(), "@notice Raw text");

    let structured = node(json!({
        "documentation": { "id": 9, "nodeType": "StructuredDocumentation", "text": "@notice Structured" }
    }));
    assert_eq!(structured.documentation(), "@notice Structured");
}

#[test]
fn base_contract_names_and_type_strings() {
    let parsed = node(json!({
        "baseContracts": [
            { "baseName": { "name": "Ownable", "referencedDeclaration": 4 } },
            { "baseName": null }
        ],
        "typeDescriptions": { "typeString": "uint256" }
    }));
    let names: Vec<_> = parsed.base_contracts().iter().map(BaseContract::name).collect();
    assert_eq!(names, vec![Some("Ownable"), None]);
    assert_eq!(parsed.type_string(), Some("uint256"));
}
