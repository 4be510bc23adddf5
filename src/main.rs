//! serp-carousel CLI - extract search result carousels as JSON
//!
//! The extraction pipeline lives in lib.rs; this file parses arguments,
//! prints the JSON or the reported errors, and handles top-level failures.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use serp_carousel::config::ConfigError;
use serp_carousel::fetcher::search_url;
use serp_carousel::record::pretty_json;
use serp_carousel::{
    logging, CarouselFactory, CarouselScraper, Config, DefaultCarousel, DocumentParser,
    Extraction, HtmlDocumentParser,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "serp-carousel")]
#[command(author, version, about = "Extract carousel cards from Google search results", long_about = None)]
struct Cli {
    /// Config file (defaults to ./serp-carousel.toml or ~/.config/serp-carousel/)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the carousel from a Google search URL
    Fetch {
        /// Must begin with https://www.google.com/search?
        url: String,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Search Google for a query and scrape the carousel
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
        #[arg(long)]
        pretty: bool,
    },
    /// Extract the carousel from a saved results page
    Parse {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Print shell completions
    Completions { shell: Shell },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing()?;
    let cli = Cli::parse();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Fetch { url, pretty } => {
            let config = load_config(config_path)?;
            let extraction = scrape(&url, &config).await?;
            report(&extraction, pretty)
        }
        Commands::Search { query, pretty } => {
            let url = search_url(&query.join(" "))?;
            tracing::info!(%url, "searching");
            let config = load_config(config_path)?;
            let extraction = scrape(&url, &config).await?;
            report(&extraction, pretty)
        }
        Commands::Parse { file, pretty } => {
            let html = std::fs::read_to_string(&file)?;
            let selectors = load_config(config_path)?.carousel_selectors()?;
            let document = HtmlDocumentParser.parse(&html);
            let extraction = DefaultCarousel::new(selectors).extract(&document);
            report(&extraction, pretty)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "serp-carousel",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn scrape(url: &str, config: &Config) -> anyhow::Result<Extraction> {
    let scraper = CarouselScraper::with_collaborators(
        url,
        config.client()?,
        HtmlDocumentParser,
        DefaultCarousel::new(config.carousel_selectors()?),
    );
    tracing::debug!(url = scraper.url(), "scraping");
    Ok(scraper.extraction().await.clone())
}

/// Print the JSON to stdout, or the errors to stderr and exit non-zero
fn report(extraction: &Extraction, pretty: bool) -> anyhow::Result<()> {
    match extraction.json() {
        Some(json) if pretty => println!("{}", pretty_json(json)?),
        Some(json) => println!("{}", json),
        None => {
            for error in extraction.errors() {
                eprintln!("{} {}", "error:".red().bold(), error);
            }
            std::process::exit(1);
        }
    }
    Ok(())
}
