//! Catalog
//!
//! Discovers `SKILL.md` files in a repository via the GitHub tree API,
//! fetches their raw contents concurrently, and assembles the parsed
//! catalog for the session.

pub mod github;
pub mod loader;
