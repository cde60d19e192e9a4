use std::collections::VecDeque;

use crate::ast::{Contract, Node};

/// Depth-first walk in document order, driven by an explicit stack.
///
/// Yields every root and every descendant reachable through
/// [`Node::children`], parents before children.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Preorder<'a> {
    pub fn new(roots: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut stack: Vec<&'a Node> = roots.into_iter().collect();
        stack.reverse();
        Self {
            stack,
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

/// Breadth-first walk that never descends below `max_depth`.
///
/// Roots sit at depth 0. All nodes of one depth are yielded, in document
/// order, before any node of the next depth.
#[derive(Debug, Clone)]
pub struct Levels<'a> {
    queue: VecDeque<(&'a Node, usize)>,
    max_depth: usize,
}

impl<'a> Levels<'a> {
    pub fn new(
        roots: impl IntoIterator<Item = &'a Node>,
        max_depth: usize,
    ) -> Self {
        Self {
            queue: roots.into_iter().map(|node| (node, 0)).collect(),
            max_depth,
        }
    }
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;
        if depth < self.max_depth {
            self.queue.extend(node.children().map(|child| (child, depth + 1)));
        }
        Some(node)
    }
}

/// Top-level declarations of every contract, in caller order.
pub fn declarations(contracts: &[Contract]) -> impl Iterator<Item = &Node> {
    contracts.iter().flat_map(Contract::declarations)
}
