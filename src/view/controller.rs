//! View Controller
//!
//! Holds the session catalog and switches between the list and detail
//! presentations. Two states only: the list (initial) and the detail of
//! one selected skill; selecting renders the detail and scrolls to top,
//! going back restores the list and scrolls to top.

use anyhow::Result;

use crate::catalog::loader::CatalogError;
use crate::render::html::escape_html;
use crate::render::markdown::MarkdownRenderer;
use crate::types::Skill;
use crate::view::surface::{Section, Surface};

/// Message shown when a load produced an empty catalog.
const NO_SKILLS_TEXT: &str = "No skills found.";

/// The current presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Detail(usize),
}

/// Owns the catalog and the view state for one session.
pub struct ViewController {
    skills: Vec<Skill>,
    view: View,
    renderer: MarkdownRenderer,
}

impl ViewController {
    pub fn new() -> Result<Self> {
        Ok(Self {
            skills: Vec::new(),
            view: View::List,
            renderer: MarkdownRenderer::new()?,
        })
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Install a freshly loaded catalog, replacing the previous one
    /// wholesale, and render the list.
    pub fn show_catalog(&mut self, skills: Vec<Skill>, surface: &mut dyn Surface) {
        self.skills = skills;
        self.view = View::List;

        if self.skills.is_empty() {
            surface.set_list_html(&error_html(NO_SKILLS_TEXT));
        } else {
            let cards: Vec<String> = self
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| skill_card_html(skill, index))
                .collect();
            surface.set_list_html(&cards.join("\n"));
        }

        surface.show_section(Section::List);
    }

    /// Render a load failure into the list container. The catalog stays
    /// empty; nothing further is processed.
    pub fn show_error(&mut self, error: &CatalogError, surface: &mut dyn Surface) {
        self.skills.clear();
        self.view = View::List;
        surface.set_list_html(&error_html(&error.to_string()));
        surface.show_section(Section::List);
    }

    /// `LIST --select(index)--> DETAIL`. An out-of-range index is ignored.
    pub fn select(&mut self, index: usize, surface: &mut dyn Surface) {
        let Some(skill) = self.skills.get(index) else {
            return;
        };

        surface.set_detail_html(&skill_detail_html(skill, &self.renderer));
        self.view = View::Detail(index);
        surface.show_section(Section::Detail);
        surface.scroll_to_top();
    }

    /// `DETAIL --back--> LIST`.
    pub fn back(&mut self, surface: &mut dyn Surface) {
        self.view = View::List;
        surface.show_section(Section::List);
        surface.scroll_to_top();
    }
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn error_html(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape_html(message))
}

/// One card of the list view. All dynamic text is escaped.
pub fn skill_card_html(skill: &Skill, index: usize) -> String {
    format!(
        "<div class=\"skill-card\" data-skill-index=\"{}\">\n\
         <h3>{}</h3>\n\
         <p>{}</p>\n\
         {}</div>",
        index,
        escape_html(&skill.name),
        escape_html(&skill.description),
        skill_meta_html(skill),
    )
}

/// The author/version row of a card; empty when neither is present.
pub(crate) fn skill_meta_html(skill: &Skill) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(author) = skill.metadata.get("author") {
        parts.push(format!("<span>Author: {}</span>", escape_html(author)));
    }
    if let Some(version) = skill.metadata.get("version") {
        parts.push(format!("<span>v{}</span>", escape_html(version)));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("<div class=\"skill-meta\">{}</div>\n", parts.join(""))
    }
}

/// The detail view fragment: escaped header fields, a rule, then the
/// rendered Markdown body.
pub fn skill_detail_html(skill: &Skill, renderer: &MarkdownRenderer) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&skill.name)));
    html.push_str(&format!(
        "<p><strong>Description:</strong> {}</p>\n",
        escape_html(&skill.description),
    ));

    if !skill.compatibility.is_empty() {
        html.push_str(&format!(
            "<p><strong>Compatibility:</strong> {}</p>\n",
            escape_html(&skill.compatibility),
        ));
    }
    if let Some(author) = skill.metadata.get("author") {
        html.push_str(&format!(
            "<p><strong>Author:</strong> {}</p>\n",
            escape_html(author),
        ));
    }
    if let Some(version) = skill.metadata.get("version") {
        html.push_str(&format!(
            "<p><strong>Version:</strong> {}</p>\n",
            escape_html(version),
        ));
    }

    html.push_str("<hr>\n");
    html.push_str(&renderer.render(&skill.content));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::format::parse_skill_md;
    use crate::view::surface::PageSurface;

    fn sample_catalog() -> Vec<Skill> {
        vec![
            parse_skill_md(
                "---\nname: First\ndescription: One\nmetadata:\n  author: Jane\n  version: \"1.0\"\n---\n# Hello",
                "first/SKILL.md",
            )
            .unwrap(),
            parse_skill_md(
                "---\nname: <Second>\ndescription: Two\ncompatibility: linux\n---\nbody",
                "second/SKILL.md",
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_show_catalog_renders_cards() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();

        controller.show_catalog(sample_catalog(), &mut surface);

        assert_eq!(surface.visible, Section::List);
        assert_eq!(surface.list_html.matches("skill-card").count(), 2);
        assert!(surface.list_html.contains("<h3>First</h3>"));
        assert!(surface.list_html.contains("Author: Jane"));
        // Names are escaped on insert.
        assert!(surface.list_html.contains("&lt;Second&gt;"));
        assert!(!surface.list_html.contains("<Second>"));
    }

    #[test]
    fn test_empty_catalog_shows_message() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();

        controller.show_catalog(Vec::new(), &mut surface);

        assert_eq!(surface.list_html, "<p class=\"error\">No skills found.</p>");
        assert_eq!(surface.visible, Section::List);
    }

    #[test]
    fn test_select_renders_detail_and_scrolls() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();
        controller.show_catalog(sample_catalog(), &mut surface);

        controller.select(0, &mut surface);

        assert_eq!(controller.view(), View::Detail(0));
        assert_eq!(surface.visible, Section::Detail);
        assert_eq!(surface.scroll_resets, 1);
        assert!(surface.detail_html.contains("<h1>First</h1>"));
        assert!(surface.detail_html.contains("<h1>Hello</h1>"));
        assert!(surface.detail_html.contains("<strong>Version:</strong> 1.0"));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();
        controller.show_catalog(sample_catalog(), &mut surface);

        controller.select(7, &mut surface);

        assert_eq!(controller.view(), View::List);
        assert_eq!(surface.visible, Section::List);
        assert!(surface.detail_html.is_empty());
    }

    #[test]
    fn test_back_restores_list() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();
        controller.show_catalog(sample_catalog(), &mut surface);
        controller.select(1, &mut surface);

        controller.back(&mut surface);

        assert_eq!(controller.view(), View::List);
        assert_eq!(surface.visible, Section::List);
        assert_eq!(surface.scroll_resets, 2);
    }

    #[test]
    fn test_detail_optional_rows() {
        let renderer = MarkdownRenderer::new().unwrap();
        let catalog = sample_catalog();

        let first = skill_detail_html(&catalog[0], &renderer);
        assert!(!first.contains("Compatibility:"));
        assert!(first.contains("<strong>Author:</strong> Jane"));

        let second = skill_detail_html(&catalog[1], &renderer);
        assert!(second.contains("<strong>Compatibility:</strong> linux"));
        assert!(!second.contains("Author:"));
    }

    #[test]
    fn test_show_error_renders_message() {
        let mut controller = ViewController::new().unwrap();
        let mut surface = PageSurface::new();

        controller.show_error(&CatalogError::NoSkillsFound, &mut surface);
        assert_eq!(
            surface.list_html,
            "<p class=\"error\">No skills found in the repository.</p>"
        );

        controller.show_error(
            &CatalogError::ListingUnavailable(anyhow::anyhow!("timeout")),
            &mut surface,
        );
        assert_eq!(
            surface.list_html,
            "<p class=\"error\">Failed to load skills. Please try again later.</p>"
        );
    }
}
