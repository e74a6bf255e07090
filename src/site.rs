//! Static Site Builder
//!
//! Writes the loaded catalog out as a static site: an index page of
//! skill cards, one page per skill, and an `llm.txt` knowledge-base file
//! for LLM consumption. Page fragments come from the same renderers the
//! live view uses.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::render::html::escape_html;
use crate::render::markdown::MarkdownRenderer;
use crate::types::{RepoCoordinate, Skill};
use crate::view::controller::{skill_detail_html, skill_meta_html};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Page id for a skill: its folder with `/` flattened to `-`. A
/// root-level skill has no folder and falls back to its catalog index.
pub fn skill_page_id(skill: &Skill, index: usize) -> String {
    if skill.folder.is_empty() {
        format!("skill-{}", index)
    } else {
        skill.folder.replace('/', "-")
    }
}

/// Write `index.html`, one `<id>.html` per skill, and `llm.txt` into
/// `out_dir` (created if missing).
pub fn build_site(skills: &[Skill], repo: &RepoCoordinate, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let renderer = MarkdownRenderer::new()?;

    fs::write(out_dir.join("index.html"), index_page(skills))
        .context("Failed to write index.html")?;

    for (index, skill) in skills.iter().enumerate() {
        let file_name = format!("{}.html", skill_page_id(skill, index));
        fs::write(out_dir.join(&file_name), skill_page(skill, &renderer))
            .with_context(|| format!("Failed to write {}", file_name))?;
        info!("Generated {}", file_name);
    }

    fs::write(out_dir.join("llm.txt"), llm_txt(skills, repo))
        .context("Failed to write llm.txt")?;

    info!("Site written to {}", out_dir.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// The card-grid index page.
pub fn index_page(skills: &[Skill]) -> String {
    let cards: String = skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            format!(
                "<div class=\"skill-card\" onclick=\"location.href='{}.html'\">\n\
                 <h3>{}</h3>\n\
                 <p>{}</p>\n\
                 {}</div>\n",
                skill_page_id(skill, index),
                escape_html(&skill.name),
                escape_html(&skill.description),
                skill_meta_html(skill),
            )
        })
        .collect();

    let body = format!(
        "<section id=\"skills-list\">\n\
         <h2>Available Skills</h2>\n\
         <div class=\"skills-grid\">\n{}</div>\n\
         </section>",
        cards,
    );

    page_shell("Skills Repository", &body)
}

/// One skill's page: back link plus the shared detail fragment.
fn skill_page(skill: &Skill, renderer: &MarkdownRenderer) -> String {
    let body = format!(
        "<a href=\"index.html\" class=\"btn-back\">&larr; Back to Skills</a>\n\
         <div id=\"skill-content\">\n{}\n</div>",
        skill_detail_html(skill, renderer),
    );

    let title = format!("{} - Skills Repository", escape_html(&skill.name));
    page_shell(&title, &body)
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n\
         <body>\n\
         <header><div class=\"container\"><h1>Skills Repository</h1></div></header>\n\
         <main class=\"container\">\n{body}\n</main>\n\
         <footer><div class=\"container\"><p><a href=\"llm.txt\">llm.txt</a></p></div></footer>\n\
         </body>\n\
         </html>\n",
    )
}

// ---------------------------------------------------------------------------
// llm.txt
// ---------------------------------------------------------------------------

/// Plain-text knowledge base listing every skill.
pub fn llm_txt(skills: &[Skill], repo: &RepoCoordinate) -> String {
    let mut sections = String::new();

    for skill in skills {
        sections.push_str(&format!(
            "\n### {}\n**Description:** {}\n",
            skill.name, skill.description,
        ));
        if let Some(author) = skill.metadata.get("author") {
            sections.push_str(&format!("**Author:** {}\n", author));
        }
        if let Some(version) = skill.metadata.get("version") {
            sections.push_str(&format!("**Version:** {}\n", version));
        }
        if !skill.compatibility.is_empty() {
            sections.push_str(&format!("**Compatibility:** {}\n", skill.compatibility));
        }
        sections.push_str("\n---\n");
    }

    format!(
        "# Skills Repository - LLM Knowledge Base\n\n\
         ## Repository Information\n\
         - Repository: {}/{}\n\
         - Source: {}\n\
         - Format: Each skill is documented in a SKILL.md file with YAML frontmatter\n\n\
         ## Available Skills\n{}\n\
         Last updated: {}\n",
        repo.owner,
        repo.name,
        repo.html_url(),
        sections,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_repo;
    use crate::skill::format::parse_skill_md;

    fn sample_skills() -> Vec<Skill> {
        vec![
            parse_skill_md(
                "---\nname: Git Helper\ndescription: Git tips\nmetadata:\n  author: Jane\n---\n# Usage",
                "tools/git/SKILL.md",
            )
            .unwrap(),
            parse_skill_md("---\nname: Root\n---\nbody", "SKILL.md").unwrap(),
        ]
    }

    #[test]
    fn test_skill_page_id() {
        let skills = sample_skills();
        assert_eq!(skill_page_id(&skills[0], 0), "tools-git");
        // Root-level skill has no folder, so the index stands in.
        assert_eq!(skill_page_id(&skills[1], 1), "skill-1");
    }

    #[test]
    fn test_index_page_links_cards() {
        let html = index_page(&sample_skills());
        assert!(html.contains("location.href='tools-git.html'"));
        assert!(html.contains("<h3>Git Helper</h3>"));
        assert!(html.contains("Author: Jane"));
        assert!(html.contains("<title>Skills Repository</title>"));
    }

    #[test]
    fn test_skill_page_content() {
        let renderer = MarkdownRenderer::new().unwrap();
        let html = skill_page(&sample_skills()[0], &renderer);
        assert!(html.contains("Back to Skills"));
        assert!(html.contains("<h1>Git Helper</h1>"));
        assert!(html.contains("<h1>Usage</h1>"));
    }

    #[test]
    fn test_llm_txt_sections() {
        let text = llm_txt(&sample_skills(), &default_repo());
        assert!(text.contains("- Repository: joshspicer/skills"));
        assert!(text.contains("### Git Helper"));
        assert!(text.contains("**Author:** Jane"));
        assert!(text.contains("### Root"));
    }
}
