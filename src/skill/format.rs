//! Skill Format Parser
//!
//! Parses `SKILL.md` files that use YAML-like frontmatter for metadata
//! and a Markdown body for documentation.
//!
//! Expected format:
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful
//! metadata:
//!   author: Jane
//!   version: "1.0"
//! ---
//!
//! Documentation goes here in Markdown...
//! ```

use crate::skill::frontmatter;
use crate::types::Skill;

/// Display name used when the frontmatter carries none.
pub const UNNAMED_SKILL: &str = "Unnamed Skill";
/// Description used when the frontmatter carries none.
pub const NO_DESCRIPTION: &str = "No description available";

/// Parse a complete skill markdown file into a [`Skill`].
///
/// Returns `None` when the frontmatter block is missing or unterminated;
/// malformed sources are dropped, never defaulted into a record.
pub fn parse_skill_md(content: &str, path: &str) -> Option<Skill> {
    let (block, body) = split_front_matter(content)?;
    let fm = frontmatter::decode(&block);

    Some(Skill {
        name: non_empty(fm.fields.get("name")).unwrap_or_else(|| UNNAMED_SKILL.to_string()),
        description: non_empty(fm.fields.get("description"))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        metadata: fm.metadata,
        compatibility: fm.fields.get("compatibility").cloned().unwrap_or_default(),
        content: body,
        path: path.to_string(),
        folder: skill_folder(path),
    })
}

/// Split `content` into the frontmatter block and the trimmed body.
///
/// The block is recognized only when the very first line is exactly `---`
/// and a later line is exactly `---`. Anything before the opening
/// delimiter, or a missing closing delimiter, yields `None`.
pub fn split_front_matter(content: &str) -> Option<(String, String)> {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return None;
    }

    let mut block_lines: Vec<&str> = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line == "---" {
            closed = true;
            break;
        }
        block_lines.push(line);
    }
    if !closed {
        return None;
    }

    let body = lines.collect::<Vec<&str>>().join("\n").trim().to_string();
    Some((block_lines.join("\n"), body))
}

/// `path` with its last `/`-delimited segment removed; empty when the
/// path has no separator.
pub fn skill_folder(path: &str) -> String {
    path.rsplit_once('/')
        .map(|(dir, _)| dir.to_string())
        .unwrap_or_default()
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}
