//! Loading compiled contracts from build artifacts.

mod loader;

pub use loader::{artifact_paths, load_contracts, parse_artifact};

#[cfg(test)]
#[path = "../../tests/src/project/loader_tests.rs"]
mod tests;
