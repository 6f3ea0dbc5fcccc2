//! # stacks CLI Application
//!
//! This module implements the command-line interface for the catalogue
//! scraping pipeline, one subcommand per stage:
//!
//! - `scrape`: crawl the catalogue pages and write the raw CSV
//! - `clean`: normalize a raw CSV into the typed clean CSV
//! - `stats`: summarize a clean CSV (describe table and top-N listings)
//!
//! The stages communicate only through the CSV artifacts, so each can be
//! re-run independently, for example re-normalizing with new coercion rules
//! without re-crawling.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

use stacks::normalize::normalize_records;
use stacks::scrape::{crawl_catalogue, HttpFetcher, ScrapeConfig};
use stacks::stats::{describe, shorten_title, top_by_price, top_by_stock};

/// Maximum title length in the top-N listings
const DISPLAY_TITLE_CHARS: usize = 40;

#[derive(Parser)]
#[command(author, version, about = "Scrape a paginated book catalogue into a typed dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crawl the catalogue and write the raw dataset
    Scrape(ScrapeArgs),

    /// Normalize a raw dataset into the clean dataset
    Clean(CleanArgs),

    /// Summarize a clean dataset
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct ScrapeArgs {
    /// Base URL of the catalogue
    #[arg(short, long, default_value = "http://books.toscrape.com/catalogue")]
    base_url: String,

    /// First page number to crawl (inclusive)
    #[arg(long, default_value = "1")]
    first_page: u32,

    /// Last page number to crawl (inclusive)
    #[arg(long, default_value = "50")]
    last_page: u32,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    /// Output path for the raw dataset
    #[arg(short, long, default_value = "raw_books.csv")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// Path to the raw dataset
    #[arg(short, long, default_value = "raw_books.csv")]
    input: PathBuf,

    /// Output path for the clean dataset
    #[arg(short, long, default_value = "clean_books.csv")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Path to the clean dataset
    #[arg(short, long, default_value = "clean_books.csv")]
    input: PathBuf,

    /// Number of entries in the top-N listings
    #[arg(short, long, default_value = "15")]
    top: usize,

    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scrape(args)) => {
            scrape_command(args).await?;
        }
        Some(Commands::Clean(args)) => {
            clean_command(args)?;
        }
        Some(Commands::Stats(args)) => {
            stats_command(args)?;
        }
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["stacks", "--help"]);
        }
    }

    Ok(())
}

#[instrument]
async fn scrape_command(args: ScrapeArgs) -> anyhow::Result<()> {
    println!("Scraping {}...", args.base_url);

    let config = ScrapeConfig::builder()
        .base_url(args.base_url)
        .page_range(args.first_page, args.last_page)
        .timeout_secs(args.timeout)
        .build();

    let fetcher = HttpFetcher::new(&config)?;
    let records = crawl_catalogue(&fetcher, &config).await?;

    stacks::dataset::write_raw_csv(&args.output, &records)?;

    println!(
        "Scraped {} raw records from pages {}..={}",
        records.len(),
        config.first_page,
        config.last_page
    );
    println!("Raw dataset saved to {}", args.output.display());

    Ok(())
}

#[instrument]
fn clean_command(args: CleanArgs) -> anyhow::Result<()> {
    println!("Normalizing {}...", args.input.display());

    let raw = stacks::dataset::read_raw_csv(&args.input)?;
    let (clean, report) = normalize_records(&raw);
    stacks::dataset::write_clean_csv(&args.output, &clean)?;

    println!("Kept {} of {} records", report.kept, report.input);
    if report.missing_price > 0 {
        println!("  {} dropped: price missing", report.missing_price);
    }
    if report.missing_rating > 0 {
        println!("  {} dropped: rating missing", report.missing_rating);
    }
    if report.defaulted_stock > 0 {
        println!("  {} kept with stock defaulted to 0", report.defaulted_stock);
    }
    println!("Clean dataset saved to {}", args.output.display());

    Ok(())
}

#[instrument]
fn stats_command(args: StatsArgs) -> anyhow::Result<()> {
    let records = stacks::dataset::read_clean_csv(&args.input)?;

    let Some(summary) = describe(&records) else {
        println!("Dataset {} is empty; nothing to summarize", args.input.display());
        return Ok(());
    };

    let top_price = top_by_price(&records, args.top);
    let top_stock = top_by_stock(&records, args.top);

    match args.format.as_str() {
        "json" => {
            let json_response = serde_json::json!({
                "rows": records.len(),
                "summary": summary,
                "top_by_price": top_price,
                "top_by_stock": top_stock,
            });
            println!("{}", serde_json::to_string_pretty(&json_response)?);
        }
        _ => {
            println!("Summary of {} rows\n", records.len());

            println!("{:<8} {:>12} {:>12} {:>12}", "", "Price", "Rating", "Stock");
            let rows: [(&str, fn(&stacks::stats::ColumnSummary) -> f64); 8] = [
                ("count", |s| s.count as f64),
                ("mean", |s| s.mean),
                ("std", |s| s.std),
                ("min", |s| s.min),
                ("25%", |s| s.q1),
                ("50%", |s| s.median),
                ("75%", |s| s.q3),
                ("max", |s| s.max),
            ];
            for (label, get) in rows {
                println!(
                    "{:<8} {:>12.2} {:>12.2} {:>12.2}",
                    label,
                    get(&summary.price),
                    get(&summary.rating),
                    get(&summary.stock)
                );
            }

            println!("\nTop {} by price:", top_price.len());
            for record in &top_price {
                println!(
                    "  {:>8.2}  {}",
                    record.price,
                    shorten_title(&record.title, DISPLAY_TITLE_CHARS)
                );
            }

            println!("\nTop {} by stock:", top_stock.len());
            for record in &top_stock {
                println!(
                    "  {:>8}  {}",
                    record.stock,
                    shorten_title(&record.title, DISPLAY_TITLE_CHARS)
                );
            }
        }
    }

    Ok(())
}
