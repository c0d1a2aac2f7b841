use std::sync::LazyLock;

use regex::Regex;

use crate::options::{BodyFormat, ExtractOptions};
use crate::parsing::{BlockKind, BlockNode};

/// Matches a paragraph that is nothing but a code block caption annotation.
static CODEBLOCK_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\{:\s*codeblock-file="([^"]*)"\s*\}$"#)
        .expect("codeblock-file pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub short_description: Option<String>,
    pub text_content: String,
}

/// Renders the introductory body from the nodes before the first level-2 heading.
///
/// Headings and raw HTML are dropped. A fenced code block directly followed
/// by a `{: codeblock-file="..."}` line becomes a captioned `<figure>`. The
/// remaining blocks are joined with blank lines.
pub fn render_body(nodes: &[BlockNode], source: &str, options: &ExtractOptions) -> RenderedBody {
    let body: Vec<&BlockNode> = nodes
        .iter()
        .filter(|node| match &node.kind {
            BlockKind::Heading { .. } => false,
            BlockKind::Html { .. } => {
                log::debug!("dropping raw html at byte {}", node.span.start);
                false
            }
            _ => true,
        })
        .collect();

    let short_description = body.first().map(|node| match &node.kind {
        BlockKind::Paragraph { text } => text.clone(),
        _ => String::new(),
    });

    let mut rendered: Vec<String> = Vec::with_capacity(body.len());
    let mut iter = body.iter().copied().peekable();
    while let Some(node) = iter.next() {
        if let BlockKind::CodeBlock {
            fenced: true,
            language,
            code,
        } = &node.kind
            && let Some(file_name) = iter
                .peek()
                .copied()
                .and_then(|next| caption_for(node, next, source))
        {
            log::debug!("captioning code block at byte {} as {file_name:?}", node.span.start);
            rendered.push(render_figure(node, language.as_deref(), code, file_name, options));
            iter.next();
            continue;
        }
        rendered.push(render_block(node, source, options.body_format));
    }

    let text_content = rendered
        .iter()
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    RenderedBody {
        short_description,
        text_content,
    }
}

/// The caption file name if `next` is an annotation line directly under `code`.
fn caption_for<'a>(code: &BlockNode, next: &'a BlockNode, source: &str) -> Option<&'a str> {
    let BlockKind::Paragraph { text } = &next.kind else {
        return None;
    };
    let gap = code.span.trimmed_end(source).gap_to(next.span, source);
    if !gap.trim().is_empty() || gap.matches('\n').count() > 1 {
        return None;
    }
    CODEBLOCK_FILE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn render_block(node: &BlockNode, source: &str, format: BodyFormat) -> String {
    match format {
        BodyFormat::Markdown => node.span.slice(source).to_string(),
        BodyFormat::Html => node.to_html(),
    }
}

fn render_figure(
    node: &BlockNode,
    language: Option<&str>,
    code: &str,
    file_name: &str,
    options: &ExtractOptions,
) -> String {
    let open = format!(
        "<figure class=\"{}\"><figcaption>{}</figcaption>",
        html_escape::encode_double_quoted_attribute(&options.figure_class),
        html_escape::encode_text(file_name)
    );

    match options.body_format {
        BodyFormat::Markdown => {
            let info = language.map(|lang| format!(" {lang}")).unwrap_or_default();
            let newline = if code.is_empty() || code.ends_with('\n') {
                ""
            } else {
                "\n"
            };
            let fence = code_fence(code);
            format!("{open}\n\n{fence}{info}\n{code}{newline}{fence}\n\n</figure>")
        }
        BodyFormat::Html => format!("{open}\n{}</figure>", node.to_html()),
    }
}

/// A backtick fence longer than any backtick run inside `code`.
fn code_fence(code: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest_run + 1).max(3))
}
