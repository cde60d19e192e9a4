//! Markdown page generation on top of the resolution engine.

pub mod natspec;
mod page;
mod writer;

pub use natspec::Natspec;
pub use page::{DEFAULT_TEMPLATE, INDEX_PAGE, PageRenderer, load_template};
pub use writer::write_docs;

#[cfg(test)]
#[path = "../../tests/src/docs/docs_tests.rs"]
mod tests;
