//! Creeper main entry point
//!
//! This is the command-line interface for the Creeper site link mapper.

use clap::{ArgAction, CommandFactory, Parser};
use creeper::config::{load_config, validate, Config};
use creeper::crawler::{CrawlLimits, Crawler, HttpFetcher};
use creeper::output::{print_summary, write_sitemap};
use creeper::priority::rank;
use creeper::url::parse_seed;
use creeper::CreeperError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Creeper: map the links of a single web site
///
/// Creeper crawls every in-domain page reachable from the seed URL, counts
/// incoming and outgoing links per page, prints a summary table and can
/// write a sitemap ordered by link priority.
#[derive(Parser, Debug)]
#[command(name = "creeper")]
#[command(version)]
#[command(about = "Map the links of a single web site", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Maximum number of pages to visit [default: 100]
    #[arg(short = 'n', value_name = "PAGES")]
    max_pages: Option<usize>,

    /// Maximum recursion depth, 0 = unlimited [default: 0]
    #[arg(short = 'i', value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Show summary of incoming links at the end [default: true]
    #[arg(short = 's', value_name = "BOOL", action = ArgAction::Set)]
    summary: Option<bool>,

    /// Write a sitemap ordered by link priority
    #[arg(short = 'x')]
    sitemap: bool,

    /// Path of the sitemap file [default: sitemap.xml]
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    sitemap_path: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let Some(seed_input) = cli.url.as_deref() else {
        println!("Usage: creeper [OPTIONS] <URL>\n");
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = resolve_config(&cli)?;

    let seed = match parse_seed(seed_input) {
        Ok(url) => url,
        Err(e) => {
            println!("Invalid URL: {}", e);
            return Ok(());
        }
    };

    handle_crawl(config, seed).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries the visited URLs and the reports.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("creeper=warn"))
    } else {
        match verbose {
            1 => EnvFilter::new("creeper=info,warn"),
            2 => EnvFilter::new("creeper=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if given and applies command-line overrides
fn resolve_config(cli: &Cli) -> creeper::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(summary) = cli.summary {
        config.output.show_summary = summary;
    }
    if cli.sitemap {
        config.output.sitemap = true;
    }
    if let Some(path) = &cli.sitemap_path {
        config.output.sitemap_path = path.display().to_string();
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the main crawl operation and the reports
async fn handle_crawl(config: Config, seed: url::Url) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(&config.http)?;
    let mut crawler = Crawler::new(fetcher, CrawlLimits::from(&config.crawler))
        .on_visit(|url| println!("{}", url));

    let graph = match crawler.crawl(&seed).await {
        Ok(graph) => graph,
        Err(CreeperError::SeedFetch { source, .. }) => {
            println!("Error fetching URL: {}", source);
            return Ok(());
        }
        Err(CreeperError::SeedInvalid(e)) => {
            println!("Invalid URL: {}", e);
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    if config.output.show_summary {
        print_summary(&graph);
    }

    if config.output.sitemap {
        let ranked = rank(&graph);
        let path = Path::new(&config.output.sitemap_path);
        match write_sitemap(&ranked, path) {
            Ok(()) => println!("XML written to {}", path.display()),
            Err(e) => println!("Error writing XML: {}", e),
        }
    }

    Ok(())
}
