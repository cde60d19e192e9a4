//! Read-only queries over a forest of contract trees: node lookup,
//! override closures, and structural extraction.
//!
//! Nothing here fails. A missing node is `None`, a query without matches is
//! an empty `Vec`, and absent optional fields read as empty.

mod lookup;
mod overrides;
mod structure;
mod walk;

pub use lookup::{LookupMode, find_node_by_id, find_node_in_contracts, find_node_result};
pub use overrides::{OverrideClosure, OverrideIter, find_overridden_nodes_by_id, overridden_functions};
pub use structure::{
    DECLARATION_DEPTH, base_contracts, constructor_node, contract_node, declarations_of_kind, enumerators, events,
    find_declaration, functions, implementations, members, modifiers, parameters, return_parameters,
    search_declarations, structs,
};
pub use walk::{Levels, Preorder, declarations};
