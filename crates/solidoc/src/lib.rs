pub mod ast;
pub mod config;
pub mod docs;
pub mod error;
pub mod project;
pub mod reference;
pub mod resolve;

#[cfg(test)]
#[path = "../tests/src/support.rs"]
mod test_support;

pub use ast::{Contract, Node, NodeKind, NodeResult};
pub use config::{LoadedSettings, Settings};
pub use error::{Error, Result};
pub use reference::{ContractReferenceBuilder, FunctionReferenceBuilder};
pub use resolve::{LookupMode, find_node_by_id, find_overridden_nodes_by_id, overridden_functions};
