//! Skillshelf Configuration
//!
//! The repository coordinate is compiled-in configuration. CLI flags may
//! override individual fields for a single invocation; there is no
//! configuration file.

use crate::types::RepoCoordinate;

/// Default repository owner.
pub const DEFAULT_REPO_OWNER: &str = "joshspicer";
/// Default repository name.
pub const DEFAULT_REPO_NAME: &str = "skills";
/// Default branch.
pub const DEFAULT_REPO_BRANCH: &str = "main";

/// The compiled-in repository coordinate.
pub fn default_repo() -> RepoCoordinate {
    RepoCoordinate::new(DEFAULT_REPO_OWNER, DEFAULT_REPO_NAME, DEFAULT_REPO_BRANCH)
}

/// Merge optional overrides onto the compiled-in coordinate.
pub fn resolve_repo(
    owner: Option<&str>,
    name: Option<&str>,
    branch: Option<&str>,
) -> RepoCoordinate {
    let defaults = default_repo();
    RepoCoordinate::new(
        owner.unwrap_or(&defaults.owner),
        name.unwrap_or(&defaults.name),
        branch.unwrap_or(&defaults.branch),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_repo() {
        let repo = default_repo();
        assert_eq!(repo.owner, "joshspicer");
        assert_eq!(repo.name, "skills");
        assert_eq!(repo.branch, "main");
    }

    #[test]
    fn test_resolve_repo_overrides() {
        let repo = resolve_repo(Some("someone"), None, Some("dev"));
        assert_eq!(repo.owner, "someone");
        assert_eq!(repo.name, "skills");
        assert_eq!(repo.branch, "dev");
    }

    #[test]
    fn test_html_url() {
        assert_eq!(
            default_repo().html_url(),
            "https://github.com/joshspicer/skills"
        );
    }
}
