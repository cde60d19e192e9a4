//! Markdown cross-links built from resolution results.

mod contract;
mod function;

pub use contract::{ContractReferenceBuilder, contract_anchors};
pub use function::FunctionReferenceBuilder;

#[cfg(test)]
#[path = "../../tests/src/reference/reference_tests.rs"]
mod tests;
