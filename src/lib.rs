//! Skillshelf -- Skill Catalog Browser
//!
//! Fetches `SKILL.md` documents from a GitHub repository, parses their
//! YAML-like frontmatter, renders the Markdown bodies to HTML, and
//! presents the catalog as a list/detail view or a static site.

pub mod types;
pub mod config;
pub mod catalog;
pub mod skill;
pub mod render;
pub mod view;
pub mod site;
