use crate::models::{Section, Subsection};
use crate::parsing::{BlockKind, BlockNode};

/// Builds the two-level table of contents from level-2 and level-3 headings.
///
/// Only heading nodes are read. A level-3 heading before the first level-2
/// heading has no section to belong to and is dropped.
pub fn build_sections(nodes: &[BlockNode]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for node in nodes {
        let BlockKind::Heading { level, text } = &node.kind else {
            continue;
        };

        match *level {
            2 => sections.push(Section::new(text)),
            3 => match sections.last_mut() {
                Some(section) => section.subsections.push(Subsection::new(text)),
                None => log::debug!("dropping level-3 heading {text:?} outside any section"),
            },
            _ => {}
        }
    }

    sections
}
