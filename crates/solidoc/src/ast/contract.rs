use serde::Deserialize;
use serde_json::Value;

use super::nodes::Node;

/// One compiled contract, as found in a build artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Unique across the project; used as the join key for cross-references.
    pub contract_name: String,
    /// Root node of the compilation unit the contract was defined in.
    #[serde(default)]
    pub ast: Node,
    /// Passed through verbatim to the rendered page.
    #[serde(default)]
    pub abi: Value,
}

impl Contract {
    pub fn new(
        contract_name: impl Into<String>,
        ast: Node,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            ast,
            abi: Value::Null,
        }
    }

    /// Top-level declarations of the compilation unit.
    pub fn declarations(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.ast.children()
    }

    /// Documentation page of this contract, relative to the output directory.
    pub fn page_name(&self) -> String {
        format!("{}.md", self.contract_name)
    }
}

/// A node found inside a specific contract.
#[derive(Debug, Clone, Copy)]
pub struct NodeResult<'a> {
    pub contract: &'a Contract,
    pub node: &'a Node,
}

impl NodeResult<'_> {
    /// Markdown anchor of the node on its contract's page, e.g. `Token.md#transfer`.
    pub fn anchor(&self) -> String {
        format!("{}#{}", self.contract.page_name(), self.node.name().to_lowercase())
    }

    /// Link text, e.g. `Token.transfer`.
    pub fn label(&self) -> String {
        format!("{}.{}", self.contract.contract_name, self.node.name())
    }
}
