use crate::{
    ast::{Contract, Node, NodeResult},
    config::{MessageSettings, format_message},
    resolve::find_overridden_nodes_by_id,
};

/// Builds the "overridden by" line of one function.
pub struct FunctionReferenceBuilder<'a> {
    node: &'a Node,
    contracts: &'a [Contract],
    messages: &'a MessageSettings,
}

impl<'a> FunctionReferenceBuilder<'a> {
    pub fn new(
        node: &'a Node,
        contracts: &'a [Contract],
        messages: &'a MessageSettings,
    ) -> Self {
        Self {
            node,
            contracts,
            messages,
        }
    }

    /// Every node that transitively overrides the function.
    ///
    /// Nodes without an id (or with id `0`) are never reported as
    /// overridable.
    pub fn overriding_nodes(&self) -> Vec<NodeResult<'a>> {
        match self.node.node_id() {
            Some(id) => find_overridden_nodes_by_id(self.contracts, id),
            None => Vec::new(),
        }
    }

    /// Render the line, or an empty string when nothing overrides the
    /// function.
    pub fn build(&self) -> String {
        let references: Vec<String> = self.overriding_nodes().iter().map(link).collect();
        if references.is_empty() {
            return String::new();
        }

        let list = references.join(&self.messages.reference_separator);
        format!("{}{}", self.messages.overridden_marker, format_message(&self.messages.overridden, &list))
    }
}

fn link(found: &NodeResult<'_>) -> String {
    format!("[{}]({})", found.label(), found.anchor())
}
