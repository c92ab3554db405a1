//! sitenav CLI tool
//!
//! Command-line companion for site authors editing `menus.json`.
//!
//! ## Commands
//!
//! - `check <menus.json>`: parse the manifest and report authoring warnings
//! - `links <menus.json>`: print the debug bar and content nav exactly as a page would render them
//! - `search <menus.json> <query>`: print the search dropdown for a query
//!
//! `links` and `search` take `--page <pathname>` to preview a nested stage page, e.g.
//! `--page /2_Build/index.html`.

use clap::{Parser, Subcommand};
use sitenav::{
    config::NavConfig,
    manifest::Manifest,
    nav::{build_content_nav, build_debug_bar, BarEntry},
    paths::PageContext,
    search::SearchController,
};
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(name = "sitenav")]
#[command(author, version, about = "Check and preview static site navigation menus", long_about = None)]
struct Cli {
    /// TOML configuration file (element ids, viewer page, nested page pattern, ...)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a manifest and report problems
    Check {
        /// Path to menus.json
        manifest: PathBuf,
    },

    /// Print the navigation links rendered for a page
    Links {
        /// Path to menus.json
        manifest: PathBuf,

        /// Page pathname the links are rendered for
        #[arg(long, default_value = "/index.html")]
        page: String,
    },

    /// Print the search results for a query
    Search {
        /// Path to menus.json
        manifest: PathBuf,

        /// Search query, as typed into the search box
        query: String,

        /// Page pathname the results are rendered for
        #[arg(long, default_value = "/index.html")]
        page: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };

    match cli.command {
        Commands::Check { manifest } => {
            let menus = read_manifest(&manifest)?;
            println!(
                "{}: {} debug items, {} content items",
                manifest.display(),
                menus.debug_menu.len(),
                menus.content_menu.len()
            );
            let warnings = menus.lint();
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            if warnings.is_empty() {
                println!("No problems found.");
            } else {
                println!("{} warning(s).", warnings.len());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Links { manifest, page } => {
            let menus = read_manifest(&manifest)?;
            let context = PageContext::from_location(&page, "", &config)?;
            println!("Page {page} (base '{}')", context.base);

            println!("\n[{}]", config.elements.debug_bar);
            for entry in build_debug_bar(&menus.debug_menu, &context.base, &config) {
                match entry {
                    BarEntry::Label(text) => println!("  {text}"),
                    BarEntry::Link(link) => println!("  {:<32} -> {}", link.text(), link.href),
                }
            }

            println!("\n[{}]", config.elements.content_nav);
            for link in build_content_nav(&menus.content_menu, &context.base, &config) {
                println!("  {:<32} -> {}", link.text(), link.href);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Search {
            manifest,
            query,
            page,
        } => {
            let menus = read_manifest(&manifest)?;
            let context = PageContext::from_location(&page, "", &config)?;
            let mut search = SearchController::new(menus.combined(), &context.base, &config);
            let view = search.on_input(&query);
            if !view.open {
                println!("No results for '{query}'.");
                return Ok(ExitCode::from(1));
            }
            for (i, link) in view.results.iter().enumerate() {
                println!("{:>2}. {:<32} -> {}", i + 1, link.text(), link.href);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_manifest(path: &Path) -> Result<Manifest, Box<dyn std::error::Error>> {
    tracing::debug!("Reading manifest {:?}", path);
    let text = read_to_string(path)?;
    Ok(Manifest::from_json(&text)?)
}
