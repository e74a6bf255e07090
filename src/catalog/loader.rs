//! Catalog Loader
//!
//! Discovers every `SKILL.md` in the repository tree and fetches the
//! files concurrently. The catalog preserves discovery order, not
//! completion order, and a failure on one file drops only that file.

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::github::GithubClient;
use crate::skill::format::parse_skill_md;
use crate::types::{RepoCoordinate, Skill};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The two user-visible load failures. Everything else is per-file and
/// silently dropped from the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The listing succeeded but no `SKILL.md` files exist.
    #[error("No skills found in the repository.")]
    NoSkillsFound,

    /// The tree listing itself could not be retrieved or decoded.
    #[error("Failed to load skills. Please try again later.")]
    ListingUnavailable(#[source] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// True for `SKILL.md` at the repository root or at any depth.
pub fn is_skill_path(path: &str) -> bool {
    path == "SKILL.md" || path.ends_with("/SKILL.md")
}

/// Load the full skill catalog for `repo`.
///
/// Fans out one fetch task per discovered file and joins the handles in
/// discovery order, so the catalog order matches the tree listing. A
/// fetch or parse failure removes only that file; a catalog where every
/// file failed is an empty `Ok`, not an error.
pub async fn load_catalog(
    client: &GithubClient,
    repo: &RepoCoordinate,
) -> Result<Vec<Skill>, CatalogError> {
    let listing = client
        .fetch_tree(repo)
        .await
        .map_err(CatalogError::ListingUnavailable)?;

    let paths: Vec<String> = listing
        .tree
        .into_iter()
        .map(|entry| entry.path)
        .filter(|path| is_skill_path(path))
        .collect();

    if paths.is_empty() {
        return Err(CatalogError::NoSkillsFound);
    }

    info!("Discovered {} skill file(s)", paths.len());

    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let client = client.clone();
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            fetch_skill(&client, &repo, &path).await
        }));
    }

    let mut fetched: Vec<Option<Skill>> = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(result) => fetched.push(result),
            Err(e) => {
                warn!("Skill fetch task failed to join: {}", e);
                fetched.push(None);
            }
        }
    }

    Ok(assemble(fetched))
}

/// Drop the per-file failures, keeping discovery order.
pub fn assemble(fetched: Vec<Option<Skill>>) -> Vec<Skill> {
    fetched.into_iter().flatten().collect()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Fetch and parse one skill file. Any failure is logged and turns into
/// `None` so the rest of the catalog is unaffected.
async fn fetch_skill(client: &GithubClient, repo: &RepoCoordinate, path: &str) -> Option<Skill> {
    let text = match client.fetch_raw(repo, path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to fetch {}: {:#}", path, e);
            return None;
        }
    };

    let skill = parse_skill_md(&text, path);
    if skill.is_none() {
        warn!("Skipping {}: missing or malformed front matter", path);
    }
    skill
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_skill_path() {
        assert!(is_skill_path("SKILL.md"));
        assert!(is_skill_path("tools/git/SKILL.md"));
        assert!(!is_skill_path("tools/git/README.md"));
        assert!(!is_skill_path("NOTSKILL.md"));
        assert!(!is_skill_path("tools/SKILL.md.bak"));
    }

    #[test]
    fn test_assemble_drops_failures_keeps_order() {
        let a = parse_skill_md("---\nname: a\n---\nbody", "a/SKILL.md");
        let c = parse_skill_md("---\nname: c\n---\nbody", "c/SKILL.md");
        let catalog = assemble(vec![a, None, c, None]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "a");
        assert_eq!(catalog[1].name, "c");
    }

    #[test]
    fn test_assemble_all_failures_is_empty_catalog() {
        assert!(assemble(vec![None, None, None]).is_empty());
    }

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::NoSkillsFound.to_string(),
            "No skills found in the repository."
        );
        assert_eq!(
            CatalogError::ListingUnavailable(anyhow::anyhow!("boom")).to_string(),
            "Failed to load skills. Please try again later."
        );
    }
}
