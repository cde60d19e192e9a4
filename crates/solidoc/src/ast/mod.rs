//! Tree model for compiler AST output.
//!
//! Nodes are deserialized straight from the compiler's JSON. The `nodeType`
//! tag becomes a closed [`NodeKind`], while the rest of the record stays a
//! generic [`Node`] so traversal code never has to care about the kind.

mod contract;
mod nodes;

pub use contract::{Contract, NodeResult};
pub use nodes::{BaseContract, BaseName, Documentation, Node, NodeKind, ParameterList, TypeDescriptions};
