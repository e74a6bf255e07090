//! Skill Documents
//!
//! Parsing for `SKILL.md` files: YAML-like frontmatter for metadata and a
//! Markdown body. The frontmatter decoder is deliberately restricted -- a
//! line-oriented single pass, not a YAML implementation.

pub mod format;
pub mod frontmatter;
