use std::fmt;

/// The cell of an attribute table row that could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCell {
    /// First cell, holding the attribute name.
    Name,
    /// Second cell, holding the attribute description.
    Description,
}

impl fmt::Display for AttributeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeCell::Name => write!(f, "first (name)"),
            AttributeCell::Description => write!(f, "second (description)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Attribute table at byte {offset} has no rows")]
    MissingRow { offset: usize },
    #[error("Attribute table at byte {offset} is missing its {cell} cell")]
    MissingCell { cell: AttributeCell, offset: usize },
}
