use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AttributeCell, ExtractError};
use crate::models::Attribute;
use crate::options::ExtractOptions;
use crate::parsing::{BlockKind, BlockNode, Span};

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("tr is a valid selector"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("td, th is a valid selector"));

/// Opening or closing `<table>` tag; group 1 is `/` for a closing tag.
static TABLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)table\b").expect("table tag pattern is a valid regex")
});

/// Attributes read from marked tables, plus every node that was not a table.
#[derive(Debug)]
pub struct AttributeTables {
    pub attributes: Vec<Attribute>,
    pub remaining: Vec<BlockNode>,
}

/// Pulls every table out of the node stream, reading an [`Attribute`] from
/// each raw-HTML `<table>` that carries the attributes marker.
///
/// Tables never reach the body, marked or not, wherever they sit in the
/// document. A raw HTML block ends at the first blank line, so a `<table>`
/// whose cells contain blank lines arrives as several nodes: those are joined
/// back up to the node holding the matching `</table>` and read as one.
/// Only the first row of a marked table is read.
pub fn extract_attributes(
    nodes: Vec<BlockNode>,
    source: &str,
    options: &ExtractOptions,
) -> Result<AttributeTables, ExtractError> {
    let spans: Vec<Span> = nodes.iter().map(|node| node.span).collect();
    let mut attributes = Vec::new();
    let mut remaining = Vec::with_capacity(nodes.len());
    let mut inside_table_until = 0;

    for (index, node) in nodes.into_iter().enumerate() {
        if index < inside_table_until {
            log::debug!("dropping table continuation at byte {}", node.span.start);
            continue;
        }

        let opens_table = match &node.kind {
            BlockKind::Table => {
                log::debug!("dropping markdown table at byte {}", node.span.start);
                continue;
            }
            BlockKind::Html { html } => starts_with_table(html),
            _ => false,
        };
        if !opens_table {
            remaining.push(node);
            continue;
        }

        let last = closing_node(&spans, index, source);
        inside_table_until = last + 1;
        let span = Span::from(node.span.start..spans[last].end);
        if last > index {
            log::debug!(
                "table at byte {} spans {} blocks",
                span.start,
                last - index + 1
            );
        }

        let fragment = Html::parse_fragment(span.slice(source));
        if let Some(table) = root_table(&fragment)
            && let Some(attribute) = read_attribute(table, span.start, options)?
        {
            attributes.push(attribute);
        }
    }

    Ok(AttributeTables {
        attributes,
        remaining,
    })
}

/// Whether a raw HTML block's root element is a `<table>`.
fn starts_with_table(html: &str) -> bool {
    root_table(&Html::parse_fragment(html)).is_some()
}

/// Index of the node that closes the table opened by `spans[first]`.
///
/// A table that is never closed is confined to its own node rather than
/// swallowing the rest of the page.
fn closing_node(spans: &[Span], first: usize, source: &str) -> usize {
    let start = spans[first].start;
    spans
        .iter()
        .enumerate()
        .skip(first)
        .find(|(_, span)| open_tables(Span::from(start..span.end).slice(source)) <= 0)
        .map_or(first, |(index, _)| index)
}

/// `<table>` openings minus closings in `html`.
fn open_tables(html: &str) -> i64 {
    TABLE_TAG.captures_iter(html).fold(0, |depth, caps| {
        if caps.get(1).is_some_and(|slash| slash.is_empty()) {
            depth + 1
        } else {
            depth - 1
        }
    })
}

fn root_table(fragment: &Html) -> Option<ElementRef<'_>> {
    fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .next()
        .filter(|element| element.value().name() == "table")
}

fn read_attribute(
    table: ElementRef<'_>,
    offset: usize,
    options: &ExtractOptions,
) -> Result<Option<Attribute>, ExtractError> {
    let element = table.value();
    if element.attr(&options.attributes_marker).is_none() {
        log::debug!(
            "dropping table at byte {offset} without `{}` marker",
            options.attributes_marker
        );
        return Ok(None);
    }

    let mut rows = table.select(&ROW_SELECTOR);
    let row = rows.next().ok_or(ExtractError::MissingRow { offset })?;
    if rows.next().is_some() {
        log::warn!("attribute table at byte {offset} has more than one row; only the first is read");
    }

    let mut cells = row.select(&CELL_SELECTOR);
    let name_cell = cells.next().ok_or(ExtractError::MissingCell {
        cell: AttributeCell::Name,
        offset,
    })?;
    let description_cell = cells.next().ok_or(ExtractError::MissingCell {
        cell: AttributeCell::Description,
        offset,
    })?;

    let attribute = Attribute {
        name: name_cell.text().collect::<String>().trim().to_string(),
        is_required: element.attr(&options.required_marker).is_some(),
        text_content: format!("<div>{}</div>", description_cell.inner_html().trim()),
    };
    log::debug!("extracted attribute `{}`", attribute.name);

    Ok(Some(attribute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn run(md: &str) -> Result<AttributeTables, ExtractError> {
        let options = ExtractOptions::default();
        extract_attributes(parse_document(md, &options).blocks, md, &options)
    }

    #[test]
    fn reads_name_required_flag_and_description() {
        let md = "<table data-attributes data-attributes-required>\n  <tr>\n    <td><code>command</code></td>\n    <td>Runs <em>this</em> command</td>\n  </tr>\n</table>\n";
        let tables = run(md).unwrap();

        assert_eq!(
            tables.attributes,
            vec![Attribute {
                name: "command".to_string(),
                is_required: true,
                text_content: "<div>Runs <em>this</em> command</div>".to_string(),
            }]
        );
        assert!(tables.remaining.is_empty());
    }

    #[test]
    fn required_marker_is_optional() {
        let md = "<table data-attributes>\n<tr><td><code>label</code></td><td>Text</td></tr>\n</table>\n";
        let tables = run(md).unwrap();
        assert!(!tables.attributes[0].is_required);
    }

    #[test]
    fn unmarked_tables_are_removed_without_attributes() {
        let md = "Intro\n\n<table>\n<tr><td>a</td></tr>\n</table>\n\nOutro\n";
        let tables = run(md).unwrap();

        assert!(tables.attributes.is_empty());
        assert_eq!(tables.remaining.len(), 2);
        assert!(
            tables
                .remaining
                .iter()
                .all(|n| matches!(n.kind, BlockKind::Paragraph { .. }))
        );
    }

    #[test]
    fn markdown_tables_are_removed() {
        let tables = run("| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
        assert!(tables.attributes.is_empty());
        assert!(tables.remaining.is_empty());
    }

    #[test]
    fn other_raw_html_is_left_for_the_body() {
        let tables = run("<img src=\"cat.png\" />\n").unwrap();
        assert!(tables.attributes.is_empty());
        assert_eq!(tables.remaining.len(), 1);
    }

    #[test]
    fn tables_after_sections_are_still_matched() {
        let md = "## Attributes\n\n<table data-attributes>\n<tr><td><code>late</code></td><td>x</td></tr>\n</table>\n";
        let tables = run(md).unwrap();
        assert_eq!(tables.attributes[0].name, "late");
        assert_eq!(tables.remaining.len(), 1);
    }

    #[test]
    fn only_first_row_is_read() {
        let md = "<table data-attributes>\n<tr><td><code>first</code></td><td>one</td></tr>\n<tr><td><code>second</code></td><td>two</td></tr>\n</table>\n";
        let tables = run(md).unwrap();
        assert_eq!(tables.attributes.len(), 1);
        assert_eq!(tables.attributes[0].name, "first");
    }

    #[test]
    fn missing_description_cell_is_an_error() {
        let md = "<table data-attributes>\n<tr><td><code>lonely</code></td></tr>\n</table>\n";
        let err = run(md).unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingCell {
                cell: AttributeCell::Description,
                offset: 0
            }
        );
        assert!(err.to_string().contains("second (description)"));
    }

    #[test]
    fn missing_name_cell_is_an_error() {
        let md = "<table data-attributes>\n<tr></tr>\n</table>\n";
        let err = run(md).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingCell {
                cell: AttributeCell::Name,
                ..
            }
        ));
    }

    #[test]
    fn marked_table_without_rows_is_an_error() {
        let err = run("<table data-attributes>\n</table>\n").unwrap_err();
        assert_eq!(err, ExtractError::MissingRow { offset: 0 });
    }

    #[test]
    fn unmarked_table_with_missing_cells_is_tolerated() {
        let tables = run("<table>\n<tr></tr>\n</table>\n").unwrap();
        assert!(tables.attributes.is_empty());
        assert!(tables.remaining.is_empty());
    }

    #[test]
    fn custom_markers() {
        let options = ExtractOptions {
            attributes_marker: "data-props".to_string(),
            required_marker: "data-props-required".to_string(),
            ..ExtractOptions::default()
        };
        let md = "<table data-props data-props-required>\n<tr><td><code>p</code></td><td>d</td></tr>\n</table>\n";
        let tables = extract_attributes(parse_document(md, &options).blocks, md, &options).unwrap();
        assert_eq!(tables.attributes[0].name, "p");
        assert!(tables.attributes[0].is_required);
    }

    #[test]
    fn table_split_by_blank_lines_is_read_whole() {
        let md = "Intro\n\n<table data-attributes>\n  <tr>\n    <td><code>command</code></td>\n    <td>\n      <p>First para.</p>\n\n      <p>Second para.</p>\n    </td>\n  </tr>\n</table>\n\nOutro\n";
        let tables = run(md).unwrap();

        assert_eq!(
            tables.attributes,
            vec![Attribute {
                name: "command".to_string(),
                is_required: false,
                text_content: "<div><p>First para.</p>\n\n      <p>Second para.</p></div>"
                    .to_string(),
            }]
        );
        let texts: Vec<&str> = tables
            .remaining
            .iter()
            .map(|node| node.span.slice(md).trim())
            .collect();
        assert_eq!(texts, vec!["Intro", "Outro"]);
    }

    #[test]
    fn split_unmarked_table_is_removed_whole() {
        let md = "<table>\n<tr><td>a\n\n<p>b</p>\n\n</td></tr>\n</table>\n\nAfter\n";
        let tables = run(md).unwrap();
        assert!(tables.attributes.is_empty());
        assert_eq!(tables.remaining.len(), 1);
        assert_eq!(tables.remaining[0].span.slice(md).trim(), "After");
    }

    #[test]
    fn nested_table_does_not_end_the_outer_one() {
        let md = "<table data-attributes>\n<tr><td><code>outer</code></td><td>\n\n<table><tr><td>inner</td></tr></table>\n\nstill outer\n</td></tr>\n</table>\n\nAfter\n";
        let tables = run(md).unwrap();
        assert_eq!(tables.attributes.len(), 1);
        assert_eq!(tables.attributes[0].name, "outer");
        assert!(tables.attributes[0].text_content.contains("still outer"));
        assert_eq!(tables.remaining.len(), 1);
        assert_eq!(tables.remaining[0].span.slice(md).trim(), "After");
    }

    #[test]
    fn unclosed_table_keeps_the_rest_of_the_page() {
        let md = "<table>\n<tr><td>a</td></tr>\n\nStill here\n\nAnd here\n";
        let tables = run(md).unwrap();
        assert_eq!(tables.remaining.len(), 2);
    }

    #[test]
    fn header_cells_count_as_cells() {
        let md = "<table data-attributes>\n<tr><th><code>key</code></th><td>Value</td></tr>\n</table>\n";
        let tables = run(md).unwrap();
        assert_eq!(tables.attributes[0].name, "key");
        assert_eq!(tables.attributes[0].text_content, "<div>Value</div>");
    }
}
