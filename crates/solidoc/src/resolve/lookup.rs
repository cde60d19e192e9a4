use serde::Deserialize;
use tracing::debug;

use crate::{
    ast::{Contract, Node, NodeResult},
    resolve::walk::Preorder,
};

/// How [`find_node_by_id`] explores sibling subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupMode {
    /// Visit every node of the forest until the id is found.
    #[default]
    Exhaustive,
    /// Legacy traversal: at each level, stop at the first node that has
    /// children and search only that node's subtree. Later siblings are
    /// never inspected once a subtree has been entered.
    FirstBranch,
}

/// Locate a node by id in a forest of nodes.
///
/// A node's own id is checked before its children (plain children first,
/// then body children). Returns `None` when no node carries the id.
pub fn find_node_by_id<'a>(
    roots: impl IntoIterator<Item = &'a Node>,
    id: i64,
    mode: LookupMode,
) -> Option<&'a Node> {
    match mode {
        LookupMode::Exhaustive => Preorder::new(roots).find(|node| node.has_id(id)),
        LookupMode::FirstBranch => find_first_branch(roots, id),
    }
}

fn find_first_branch<'a>(
    roots: impl IntoIterator<Item = &'a Node>,
    id: i64,
) -> Option<&'a Node> {
    let mut level: Vec<&'a Node> = roots.into_iter().collect();
    loop {
        let mut descend = None;
        for &node in &level {
            if node.has_id(id) {
                return Some(node);
            }
            if node.has_children() {
                descend = Some(node);
                break;
            }
        }
        level = descend?.children().collect();
    }
}

/// Locate a node by id across contracts, searching each contract's
/// declarations in caller order.
pub fn find_node_in_contracts(
    contracts: &[Contract],
    id: i64,
    mode: LookupMode,
) -> Option<&Node> {
    find_node_result(contracts, id, mode).map(|found| found.node)
}

/// Like [`find_node_in_contracts`], but also reports the owning contract.
pub fn find_node_result(
    contracts: &[Contract],
    id: i64,
    mode: LookupMode,
) -> Option<NodeResult<'_>> {
    let found = contracts.iter().find_map(|contract| {
        find_node_by_id(contract.declarations(), id, mode).map(|node| NodeResult {
            contract,
            node,
        })
    });
    if found.is_none() {
        debug!("[lookup] node {id} not found in {} contracts ({mode:?})", contracts.len());
    }
    found
}

#[cfg(test)]
#[path = "../../tests/src/resolve/lookup_tests.rs"]
mod tests;
