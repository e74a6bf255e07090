//! Restricted Frontmatter Decoder
//!
//! Decodes the key/value block between the `---` delimiters of a skill
//! file. Supports scalar `key: value` pairs, multi-line scalar
//! continuations, and exactly one nested mapping under `metadata:` (keys
//! `author` and `version`). Block sequences, anchors, and deeper nesting
//! are out of scope; such input decodes best-effort rather than erroring.

use std::collections::BTreeMap;

use regex::Regex;

/// Decoded frontmatter: the flat top-level mapping plus the single
/// nested `metadata` mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub fields: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, String>,
}

/// Decode a frontmatter block.
///
/// Single line-oriented pass with no lookahead. Keys are trimmed and
/// case-sensitive; a duplicated top-level key silently overwrites the
/// earlier value. Pure: the same block always decodes to the same result.
pub fn decode(block: &str) -> Frontmatter {
    // An unindented `word:` prefix ends the metadata section.
    let bare_key = Regex::new(r"^\w+:").ok();

    let mut fields: BTreeMap<String, String> = BTreeMap::new();
    let mut metadata: BTreeMap<String, String> = BTreeMap::new();
    let mut current_key: Option<String> = None;
    let mut current_value = String::new();
    let mut in_metadata = false;

    for line in block.lines() {
        if line.starts_with("metadata:") {
            in_metadata = true;
            metadata.clear();
            continue;
        }

        if in_metadata {
            let exits = bare_key
                .as_ref()
                .map(|re| re.is_match(line))
                .unwrap_or(false);
            if exits {
                // The same line still opens a top-level key below.
                in_metadata = false;
            } else {
                let trimmed = line.trim();
                if trimmed.starts_with("author:") || trimmed.starts_with("version:") {
                    if let Some((key, value)) = trimmed.split_once(':') {
                        metadata.insert(key.trim().to_string(), strip_quotes(value.trim()));
                    }
                    continue;
                }
            }
        }

        if let Some(colon) = line.find(':') {
            // A new top-level key: commit whatever was accumulating.
            if let Some(key) = current_key.take() {
                fields.insert(key, strip_quotes(current_value.trim()));
            }
            current_key = Some(line[..colon].trim().to_string());
            current_value = line[colon + 1..].trim().to_string();
        } else if current_key.is_some() && !line.trim().is_empty() {
            // Multi-line scalar continuation.
            current_value.push(' ');
            current_value.push_str(line.trim());
        }
    }

    if let Some(key) = current_key {
        fields.insert(key, strip_quotes(current_value.trim()));
    }

    Frontmatter { fields, metadata }
}

/// Strip at most one leading and one trailing quote character (`'` or
/// `"`), independently. A matched pair disappears entirely; unquoted
/// values pass through unchanged.
fn strip_quotes(value: &str) -> String {
    let mut v = value;
    if let Some(rest) = v.strip_prefix('"').or_else(|| v.strip_prefix('\'')) {
        v = rest;
    }
    if let Some(rest) = v.strip_suffix('"').or_else(|| v.strip_suffix('\'')) {
        v = rest;
    }
    v.to_string()
}
