pub mod page;
pub mod page_path;

pub use page::{Attribute, ExtractionResult, Section, Subsection};
pub use page_path::PagePath;
