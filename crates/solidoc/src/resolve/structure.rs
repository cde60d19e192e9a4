use crate::{
    ast::{BaseContract, Contract, Node, NodeKind},
    resolve::walk::Levels,
};

/// Structural extractors look at top-level declarations and one level of
/// nested children (contract members), never deeper.
pub const DECLARATION_DEPTH: usize = 1;

/// All declarations of `contract` matching `predicate`, within
/// [`DECLARATION_DEPTH`].
///
/// Top-level matches come first, then nested matches, each level in
/// document order.
pub fn search_declarations<'a>(
    contract: &'a Contract,
    predicate: impl Fn(&Node) -> bool,
) -> impl Iterator<Item = &'a Node> {
    Levels::new(contract.declarations(), DECLARATION_DEPTH).filter(move |node| predicate(*node))
}

/// First declaration matching `predicate`, preferring top-level ones.
pub fn find_declaration<'a>(
    contract: &'a Contract,
    predicate: impl Fn(&Node) -> bool,
) -> Option<&'a Node> {
    search_declarations(contract, predicate).next()
}

/// All declarations of one node kind.
pub fn declarations_of_kind<'a>(
    contract: &'a Contract,
    kind: &NodeKind,
) -> Vec<&'a Node> {
    search_declarations(contract, |node| node.is(kind)).collect()
}

/// The contract definition node describing `contract`.
///
/// Prefers the definition carrying the contract's own name, so that a
/// compilation unit defining several contracts resolves correctly; falls
/// back to the first node whose contract kind is `contract`.
pub fn contract_node(contract: &Contract) -> Option<&Node> {
    find_declaration(contract, |node| {
        node.contract_kind.is_some() && node.name.as_deref() == Some(contract.contract_name.as_str())
    })
    .or_else(|| find_declaration(contract, |node| node.contract_kind.as_deref() == Some("contract")))
}

/// The inheritance list `contract` declares, empty when it declares none.
pub fn base_contracts(contract: &Contract) -> &[BaseContract] {
    let own_definition = find_declaration(contract, |node| {
        node.is(&NodeKind::ContractDefinition) && node.name.as_deref() == Some(contract.contract_name.as_str())
    });
    own_definition
        .or_else(|| find_declaration(contract, Node::declares_bases))
        .map(Node::base_contracts)
        .unwrap_or_default()
}

/// Contracts whose inheritance list names `source`, in caller order.
///
/// This is a by-name join, not a semantic check.
pub fn implementations<'a>(
    source: &Contract,
    contracts: &'a [Contract],
) -> Vec<&'a Contract> {
    contracts
        .iter()
        .filter(|contract| {
            base_contracts(contract).iter().any(|base| base.name() == Some(source.contract_name.as_str()))
        })
        .collect()
}

pub fn constructor_node(contract: &Contract) -> Option<&Node> {
    find_declaration(contract, Node::is_constructor)
}

/// State variables of every contract definition in the compilation unit.
pub fn members(contract: &Contract) -> Vec<&Node> {
    contract
        .declarations()
        .filter(|node| node.is(&NodeKind::ContractDefinition))
        .flat_map(Node::children)
        .filter(|member| member.is(&NodeKind::VariableDeclaration))
        .collect()
}

pub fn functions(contract: &Contract) -> Vec<&Node> {
    declarations_of_kind(contract, &NodeKind::FunctionDefinition)
}

pub fn events(contract: &Contract) -> Vec<&Node> {
    declarations_of_kind(contract, &NodeKind::EventDefinition)
}

pub fn modifiers(contract: &Contract) -> Vec<&Node> {
    declarations_of_kind(contract, &NodeKind::ModifierDefinition)
}

pub fn structs(contract: &Contract) -> Vec<&Node> {
    declarations_of_kind(contract, &NodeKind::StructDefinition)
}

pub fn enumerators(contract: &Contract) -> Vec<&Node> {
    declarations_of_kind(contract, &NodeKind::EnumDefinition)
}

pub fn parameters(node: &Node) -> &[Node] {
    node.parameters.as_ref().map(|list| list.parameters()).unwrap_or_default()
}

pub fn return_parameters(node: &Node) -> &[Node] {
    node.return_parameters.as_ref().map(|list| list.parameters()).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src/resolve/structure_tests.rs"]
mod tests;
