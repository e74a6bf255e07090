//! Skillshelf - Type Definitions
//!
//! Shared types for the skill catalog browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─── Skills ──────────────────────────────────────────────────────

/// One parsed skill document.
///
/// Produced only from files carrying a well-formed frontmatter block;
/// anything else is dropped upstream rather than defaulted into a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// Recognized keys are `author` and `version`; absent keys are omitted.
    pub metadata: BTreeMap<String, String>,
    pub compatibility: String,
    /// Markdown body with the frontmatter block removed, trimmed.
    pub content: String,
    /// Source file path within the repository.
    pub path: String,
    /// `path` with the final `/`-delimited segment removed.
    pub folder: String,
}

// ─── Repository coordinate ───────────────────────────────────────

/// The repository a catalog is loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCoordinate {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepoCoordinate {
    pub fn new(owner: &str, name: &str, branch: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: branch.to_string(),
        }
    }

    /// `https://github.com/<owner>/<name>` -- used in page footers.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}
