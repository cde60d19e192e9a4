#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use solidoc::{Contract, Node};

pub fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "solidoc-it-{label}-{}",
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).expect("clock drift").as_nanos()
    ))
}

/// A public `function name(uint256 amount) returns (bool)` declaration.
pub fn function(
    id: i64,
    name: &str,
    super_function: Option<i64>,
) -> Value {
    json!({
        "id": id,
        "nodeType": "FunctionDefinition",
        "name": name,
        "visibility": "public",
        "superFunction": super_function,
        "parameters": {
            "parameters": [{ "name": "amount", "typeDescriptions": { "typeString": "uint256" } }]
        },
        "returnParameters": {
            "parameters": [{ "name": "", "typeDescriptions": { "typeString": "bool" } }]
        }
    })
}

/// A `SourceUnit` holding one contract definition with the given bases and
/// members.
pub fn source_unit(
    id: i64,
    name: &str,
    bases: &[&str],
    members: Vec<Value>,
) -> Value {
    let bases: Vec<Value> = bases.iter().map(|base| json!({ "baseName": { "name": base } })).collect();
    json!({
        "id": id * 100,
        "nodeType": "SourceUnit",
        "nodes": [
            { "id": id * 100 + 1, "nodeType": "PragmaDirective" },
            {
                "id": id,
                "nodeType": "ContractDefinition",
                "name": name,
                "contractKind": "contract",
                "baseContracts": bases,
                "nodes": members
            }
        ]
    })
}

pub fn artifact(
    name: &str,
    ast: Value,
) -> Value {
    json!({
        "contractName": name,
        "abi": [{ "type": "function", "name": "foo", "inputs": [], "outputs": [] }],
        "bytecode": "0x",
        "ast": ast
    })
}

pub fn contract(
    name: &str,
    ast: Value,
) -> Contract {
    let ast: Node = serde_json::from_value(ast).expect("valid fixture ast");
    Contract::new(name, ast)
}

/// Base.foo (1) <- Mid.foo (2) <- Leaf.foo (3), plus an unrelated `Other`.
pub fn inheritance_chain() -> Vec<Contract> {
    vec![
        contract("Base", source_unit(10, "Base", &[], vec![function(1, "foo", None)])),
        contract("Mid", source_unit(20, "Mid", &["Base"], vec![function(2, "foo", Some(1))])),
        contract("Leaf", source_unit(30, "Leaf", &["Mid"], vec![function(3, "foo", Some(2))])),
        contract("Other", source_unit(40, "Other", &[], vec![function(4, "bar", None)])),
    ]
}

/// Write the inheritance chain as build artifacts into `build_dir`.
pub async fn write_chain_artifacts(build_dir: &Path) {
    tokio::fs::create_dir_all(build_dir).await.expect("create build dir");
    let artifacts = [
        ("Base", source_unit(10, "Base", &[], vec![function(1, "foo", None)])),
        ("Mid", source_unit(20, "Mid", &["Base"], vec![function(2, "foo", Some(1))])),
        ("Leaf", source_unit(30, "Leaf", &["Mid"], vec![function(3, "foo", Some(2))])),
    ];
    for (name, ast) in artifacts {
        let text = serde_json::to_string_pretty(&artifact(name, ast)).expect("serialize artifact");
        tokio::fs::write(build_dir.join(format!("{name}.json")), text).await.expect("write artifact");
    }
}
