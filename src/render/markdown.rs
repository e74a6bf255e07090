//! Markdown Renderer
//!
//! Best-effort Markdown-to-HTML transform built from ordered regex
//! substitutions. The pass order is load-bearing: later patterns assume
//! earlier ones already consumed their syntax (fenced code must go first
//! so its contents survive the line-level passes untouched).
//!
//! Known, intentional quirks carried over from the product behavior:
//! only fenced code blocks HTML-escape their contents -- inline code,
//! headers, bold spans, and link text pass through unescaped -- and
//! ordered-list numbering is discarded, with every run of list items
//! wrapped in a single `<ul>`. Nested emphasis, reference links,
//! blockquotes, and inline HTML are unsupported.

use anyhow::Result;
use regex::{Captures, Regex};

use crate::render::html::escape_html;

/// The compiled substitution chain. Construction is fallible; rendering
/// itself never fails.
pub struct MarkdownRenderer {
    fenced_code: Regex,
    inline_code: Regex,
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bold: Regex,
    link: Regex,
    ordered_item: Regex,
    unordered_item: Regex,
    item_run: Regex,
    table: Regex,
}

impl MarkdownRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fenced_code: Regex::new(r"(?s)```(\w+)?\n(.*?)```")?,
            inline_code: Regex::new(r"`([^`]+)`")?,
            h3: Regex::new(r"(?m)^### (.*)$")?,
            h2: Regex::new(r"(?m)^## (.*)$")?,
            h1: Regex::new(r"(?m)^# (.*)$")?,
            bold: Regex::new(r"\*\*([^*]+)\*\*")?,
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)")?,
            ordered_item: Regex::new(r"(?m)^(\d+)\. (.*)$")?,
            unordered_item: Regex::new(r"(?m)^[-*] (.*)$")?,
            item_run: Regex::new(r"(?:<li>.*</li>\n?)+")?,
            table: Regex::new(r"\|(.+)\|\n\|[-:\s|]+\|\n((?:\|.+\|\n?)+)")?,
        })
    }

    /// Transform a Markdown body into an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let mut html = markdown.to_string();

        // 1. Fenced code blocks, contents escaped. Language tag ignored.
        html = self
            .fenced_code
            .replace_all(&html, |caps: &Captures| {
                format!("<pre><code>{}</code></pre>", escape_html(caps[2].trim()))
            })
            .into_owned();

        // 2. Inline code spans (contents left as-is).
        html = self
            .inline_code
            .replace_all(&html, "<code>$1</code>")
            .into_owned();

        // 3. Headers, deepest first.
        html = self.h3.replace_all(&html, "<h3>$1</h3>").into_owned();
        html = self.h2.replace_all(&html, "<h2>$1</h2>").into_owned();
        html = self.h1.replace_all(&html, "<h1>$1</h1>").into_owned();

        // 4. Bold spans.
        html = self
            .bold
            .replace_all(&html, "<strong>$1</strong>")
            .into_owned();

        // 5. Links. The URL is emitted verbatim.
        html = self
            .link
            .replace_all(&html, r#"<a href="$2">$1</a>"#)
            .into_owned();

        // 6. List items, then wrap each consecutive run in one <ul>. A
        //    trailing newline stays outside the wrapper so a following
        //    blank line still separates paragraphs.
        html = self
            .ordered_item
            .replace_all(&html, "<li>$2</li>")
            .into_owned();
        html = self
            .unordered_item
            .replace_all(&html, "<li>$1</li>")
            .into_owned();
        html = self
            .item_run
            .replace_all(&html, |caps: &Captures| {
                let run = &caps[0];
                match run.strip_suffix('\n') {
                    Some(items) => format!("<ul>{}</ul>\n", items),
                    None => format!("<ul>{}</ul>", run),
                }
            })
            .into_owned();

        // 7. Pipe tables: header row, separator row, data rows.
        html = self
            .table
            .replace_all(&html, |caps: &Captures| table_html(&caps[1], &caps[2]))
            .into_owned();

        // 8. Paragraphs: blank-line separated blocks; anything already
        //    starting with a tag passes through untouched.
        html.split("\n\n")
            .map(|block| {
                let block = block.trim();
                if block.is_empty() {
                    String::new()
                } else if block.starts_with('<') {
                    block.to_string()
                } else {
                    format!("<p>{}</p>", block.replace('\n', "<br>"))
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn table_html(header: &str, rows: &str) -> String {
    let headers: String = header
        .split('|')
        .filter(|cell| !cell.trim().is_empty())
        .map(|cell| format!("<th>{}</th>", cell.trim()))
        .collect();

    let body: String = rows
        .trim()
        .split('\n')
        .map(|row| {
            let cells: String = row
                .split('|')
                .filter(|cell| !cell.trim().is_empty())
                .map(|cell| format!("<td>{}</td>", cell.trim()))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        headers, body
    )
}
