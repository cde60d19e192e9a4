use std::collections::HashSet;

use tracing::debug;

use crate::{
    ast::{Contract, NodeResult},
    resolve::walk::{Preorder, declarations},
};

/// The transitive set of functions overriding one function.
///
/// This is a lazy, restartable view: nothing is computed until it is
/// iterated, and every iteration starts over from the root function.
///
/// The override graph is assumed to be acyclic, which the compiler
/// guarantees. A cyclic input makes iteration endless.
#[derive(Debug, Clone, Copy)]
pub struct OverrideClosure<'a> {
    contracts: &'a [Contract],
    root: i64,
}

/// Compute the override closure rooted at `function_id`.
///
/// Yields `function_id` first, then, depth-first, every function whose
/// direct override target has already been yielded. Every contract's whole
/// tree is scanned, in caller order. The same id may be yielded more than
/// once when several paths reach it; deduplicate if a set is needed.
pub fn overridden_functions(
    contracts: &[Contract],
    function_id: i64,
) -> OverrideClosure<'_> {
    OverrideClosure {
        contracts,
        root: function_id,
    }
}

impl<'a> OverrideClosure<'a> {
    pub fn root(&self) -> i64 {
        self.root
    }

    pub fn iter(&self) -> OverrideIter<'a> {
        OverrideIter {
            contracts: self.contracts,
            pending_root: Some(self.root),
            frames: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for OverrideClosure<'a> {
    type Item = i64;
    type IntoIter = OverrideIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &OverrideClosure<'a> {
    type Item = i64;
    type IntoIter = OverrideIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Worklist iterator behind [`OverrideClosure`].
///
/// Each frame scans the whole forest for direct overrides of one id. When
/// an override is found its id is yielded and a new frame for it is pushed,
/// so the frame below resumes exactly where it stopped.
#[derive(Debug, Clone)]
pub struct OverrideIter<'a> {
    contracts: &'a [Contract],
    pending_root: Option<i64>,
    frames: Vec<Frame<'a>>,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    target: i64,
    walk: Preorder<'a>,
}

impl<'a> Frame<'a> {
    fn new(
        contracts: &'a [Contract],
        target: i64,
    ) -> Self {
        Self {
            target,
            walk: Preorder::new(declarations(contracts)),
        }
    }
}

impl Iterator for OverrideIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            self.frames.push(Frame::new(self.contracts, root));
            return Some(root);
        }

        while let Some(frame) = self.frames.last_mut() {
            let target = frame.target;
            let found = frame.walk.find_map(|node| node.node_id().filter(|_| node.overrides_any(|id| id == target)));
            match found {
                Some(id) => {
                    self.frames.push(Frame::new(self.contracts, id));
                    return Some(id);
                },
                None => {
                    self.frames.pop();
                },
            }
        }

        None
    }
}

/// Find every node, in any contract, that overrides `id` directly or
/// through an intermediate override.
///
/// Contracts are visited in caller order and nodes in depth-first document
/// order within each contract; no further sorting is applied.
pub fn find_overridden_nodes_by_id(
    contracts: &[Contract],
    id: i64,
) -> Vec<NodeResult<'_>> {
    let closure: HashSet<i64> = overridden_functions(contracts, id).into_iter().collect();

    let mut results = Vec::new();
    for contract in contracts {
        results.extend(
            Preorder::new(contract.declarations())
                .filter(|node| node.overrides_any(|target| closure.contains(&target)))
                .map(|node| NodeResult {
                    contract,
                    node,
                }),
        );
    }

    debug!("[overrides] function {id}: closure of {} ids, {} overriding nodes", closure.len(), results.len());
    results
}

#[cfg(test)]
#[path = "../../tests/src/resolve/overrides_tests.rs"]
mod tests;
