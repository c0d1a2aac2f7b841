pub mod error;
pub mod extract;
pub mod io;
pub mod models;
pub mod options;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{AttributeCell, ExtractError};
pub use extract::{extract, extract_with_options};
pub use io::*;
pub use models::{page::*, page_path::PagePath};
pub use options::{BodyFormat, ExtractOptions};
