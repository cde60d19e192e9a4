use crate::{
    ast::{BaseContract, Contract},
    config::{MessageSettings, format_message},
    resolve::{LookupMode, base_contracts, find_node_result, implementations},
};

/// Builds the contract-level link lines of a page: what the contract
/// extends, what derives from it, and the list of every contract.
pub struct ContractReferenceBuilder<'a> {
    contract: &'a Contract,
    contracts: &'a [Contract],
    messages: &'a MessageSettings,
    lookup: LookupMode,
}

impl<'a> ContractReferenceBuilder<'a> {
    pub fn new(
        contract: &'a Contract,
        contracts: &'a [Contract],
        messages: &'a MessageSettings,
    ) -> Self {
        Self {
            contract,
            contracts,
            messages,
            lookup: LookupMode::default(),
        }
    }

    /// Lookup strategy used to resolve base contract declarations.
    pub fn with_lookup(
        mut self,
        lookup: LookupMode,
    ) -> Self {
        self.lookup = lookup;
        self
    }

    /// `**Extends: [A](A.md), [B](B.md)**`, or empty without base contracts.
    pub fn inheritance_path(&self) -> String {
        let links: Vec<String> = base_contracts(self.contract)
            .iter()
            .filter_map(|base| self.base_name(base))
            .map(|name| format!("[{name}]({name}.md)"))
            .collect();
        if links.is_empty() {
            return String::new();
        }
        format!("**{}**", format_message(&self.messages.extends, &links.join(&self.messages.list_separator)))
    }

    /// Name of the declaration a base entry refers to, falling back to the
    /// name as written. Newer compilers write qualified paths such as
    /// `Lib.Base` there.
    fn base_name(
        &self,
        base: &'a BaseContract,
    ) -> Option<&'a str> {
        let declared = base
            .base_name
            .as_ref()
            .and_then(|name| name.referenced_declaration)
            .and_then(|id| find_node_result(self.contracts, id, self.lookup))
            .map(|found| found.node.name())
            .filter(|name| !name.is_empty());
        declared.or_else(|| base.name())
    }

    /// `**Derived Contracts: [C](C.md)**.`, or empty when nothing derives
    /// from the contract.
    pub fn implementations(&self) -> String {
        let links: Vec<String> = implementations(self.contract, self.contracts)
            .iter()
            .map(|derived| format!("[{}]({})", derived.contract_name, derived.page_name()))
            .collect();
        if links.is_empty() {
            return String::new();
        }
        format!(
            "**{}**.",
            format_message(&self.messages.derived_contracts, &links.join(&self.messages.list_separator))
        )
    }
}

/// One `- [Name](Name.md)` line per contract, in caller order.
pub fn contract_anchors(contracts: &[Contract]) -> String {
    contracts
        .iter()
        .map(|contract| format!("- [{}]({})", contract.contract_name, contract.page_name()))
        .collect::<Vec<_>>()
        .join("\n")
}
