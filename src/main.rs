//! Skillshelf CLI
//!
//! The entry point. Fetches the skill catalog and either lists it on
//! the terminal, prints one skill's rendered detail, or writes the
//! static site.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use skillshelf::catalog::github::GithubClient;
use skillshelf::catalog::loader::load_catalog;
use skillshelf::config::resolve_repo;
use skillshelf::site::build_site;
use skillshelf::types::{RepoCoordinate, Skill};
use skillshelf::view::controller::ViewController;
use skillshelf::view::surface::PageSurface;

/// Skillshelf -- Skill Catalog Browser
#[derive(Parser, Debug)]
#[command(
    name = "skillshelf",
    version,
    about = "Skillshelf -- browse a repository's SKILL.md catalog"
)]
struct Cli {
    /// List the skill catalog on the terminal
    #[arg(long)]
    list: bool,

    /// Print the rendered detail HTML for one skill by catalog index
    #[arg(long, value_name = "INDEX")]
    show: Option<usize>,

    /// Write the static site (index, per-skill pages, llm.txt)
    #[arg(long)]
    build: bool,

    /// Output directory for --build
    #[arg(long, default_value = "site")]
    out: PathBuf,

    /// Repository owner override
    #[arg(long)]
    owner: Option<String>,

    /// Repository name override
    #[arg(long)]
    repo: Option<String>,

    /// Branch override
    #[arg(long)]
    branch: Option<String>,
}

// ---- Commands ---------------------------------------------------------------

/// Print the catalog as a terminal list.
fn print_list(skills: &[Skill]) {
    if skills.is_empty() {
        println!("{}", "No skills found.".yellow());
        return;
    }

    for (index, skill) in skills.iter().enumerate() {
        let mut meta = String::new();
        if let Some(author) = skill.metadata.get("author") {
            meta.push_str(&format!("  by {}", author));
        }
        if let Some(version) = skill.metadata.get("version") {
            meta.push_str(&format!("  v{}", version));
        }

        println!(
            "{} {}{}",
            format!("[{}]", index).cyan(),
            skill.name.white().bold(),
            meta.dimmed(),
        );
        println!("    {}", skill.description);
    }
}

/// Print one skill's rendered detail fragment by driving the view
/// controller through a selection.
fn print_detail(skills: Vec<Skill>, index: usize) -> Result<()> {
    let count = skills.len();
    let mut controller = ViewController::new()?;
    let mut surface = PageSurface::new();

    controller.show_catalog(skills, &mut surface);
    controller.select(index, &mut surface);

    if surface.detail_html.is_empty() {
        eprintln!("No skill at index {} (catalog has {})", index, count);
    } else {
        println!("{}", surface.detail_html);
    }
    Ok(())
}

// ---- Main Run ---------------------------------------------------------------

async fn run(cli: Cli) -> Result<()> {
    let repo: RepoCoordinate = resolve_repo(
        cli.owner.as_deref(),
        cli.repo.as_deref(),
        cli.branch.as_deref(),
    );

    let client = GithubClient::new();
    let skills = match load_catalog(&client, &repo).await {
        Ok(skills) => skills,
        Err(e) => {
            // The two user-visible load failures. Not fatal states.
            eprintln!("{}", e.to_string().red());
            return Ok(());
        }
    };

    if cli.list {
        print_list(&skills);
        return Ok(());
    }

    if let Some(index) = cli.show {
        return print_detail(skills, index);
    }

    if cli.build {
        build_site(&skills, &repo, &cli.out)?;
        println!("Site written to {}", cli.out.display());
        return Ok(());
    }

    Ok(())
}

// ---- Entry Point -----------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !cli.list && cli.show.is_none() && !cli.build {
        println!("Run \"skillshelf --help\" for usage information.");
        println!("Run \"skillshelf --list\" to fetch and list the skill catalog.");
        return;
    }

    if let Err(e) = run(cli).await {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
