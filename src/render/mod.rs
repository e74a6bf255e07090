//! Rendering
//!
//! HTML escaping and the Markdown-to-HTML transform used for skill
//! bodies.

pub mod html;
pub mod markdown;
