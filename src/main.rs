use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;

use bonfire::config::{Config, TrendParams};
use bonfire::ingest::DocumentSource;
use bonfire::output::terminal;
use bonfire::store::PostStore;

/// Bonfire: latent trend discovery for social media posts.
///
/// Normalizes stored post titles, weights them with TF-IDF, fits an
/// online LDA topic model, and reports the top terms per discovered
/// trend.
#[derive(Parser)]
#[command(name = "bonfire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the post database
    Init,

    /// Import posts from a JSONL file (one JSON object per line)
    Import {
        /// Path to the JSONL file
        path: String,
    },

    /// Discover trends in the stored posts
    Trends {
        /// Number of topics to fit (default: 5)
        #[arg(long, default_value = "5")]
        topics: usize,

        /// Top words reported per topic (default: 10)
        #[arg(long, default_value = "10")]
        top_words: usize,

        /// Minimum documents a term must appear in (default: 2)
        #[arg(long, default_value = "2")]
        min_doc_freq: usize,

        /// Maximum fraction of documents a term may appear in (default: 0.95)
        #[arg(long, default_value = "0.95")]
        max_doc_ratio: f64,

        /// Mini-batch size for the online fit (default: 256)
        #[arg(long, default_value = "256")]
        batch_size: usize,

        /// Hard cap on fitting passes (default: 100)
        #[arg(long, default_value = "100")]
        max_iters: usize,

        /// Convergence tolerance on the topic-term change (default: 1e-4)
        #[arg(long, default_value = "1e-4")]
        tol: f64,

        /// Random seed for reproducible topics (default: 42)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Rebuild even if a cached report exists
        #[arg(long)]
        refresh: bool,

        /// Skip the per-topic bar charts
        #[arg(long)]
        no_chart: bool,
    },

    /// Show system status (post count, cached report age)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bonfire=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = Config::load()?;
            let store = PostStore::open(&config.db_path)?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {}", store.table_count()?);
            println!("\nNext step: import posts with `bonfire import posts.jsonl`");
        }

        Commands::Import { path } => {
            let config = Config::load()?;
            let mut store = PostStore::open(&config.db_path)?;

            let input =
                std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
            let records = bonfire::ingest::parse_jsonl(&input);
            if records.is_empty() {
                anyhow::bail!("No parseable posts found in {path}");
            }

            let inserted = store.insert_posts(&records)?;
            println!("Imported {inserted} posts from {path}");
            println!("Total stored: {}", store.post_count()?);
        }

        Commands::Trends {
            topics,
            top_words,
            min_doc_freq,
            max_doc_ratio,
            batch_size,
            max_iters,
            tol,
            seed,
            refresh,
            no_chart,
        } => {
            let config = Config::load()?;
            let store = PostStore::open(&config.db_path)?;

            // Reuse the cached report unless a rebuild was asked for
            if !refresh {
                if let Some((report, updated_at)) = store.get_report()? {
                    println!("Loading cached report (built {updated_at})...");
                    terminal::display_trend_list(&report);
                    if !no_chart {
                        terminal::display_trend_chart(&report);
                    }
                    println!("{}", "To rebuild, run: bonfire trends --refresh".dimmed());
                    return Ok(());
                }
            }

            let docs = store.fetch()?;
            if docs.is_empty() {
                anyhow::bail!("No posts stored yet. Run `bonfire import <file>` first.");
            }
            println!("Analyzing {} posts...", docs.len());

            let params = TrendParams {
                n_topics: topics,
                top_words,
                min_doc_freq,
                max_doc_freq_ratio: max_doc_ratio,
                batch_size,
                max_iters,
                tol,
                seed,
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Fitting topic model...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let result = bonfire::pipeline::run(&docs, &params);
            spinner.finish_and_clear();

            let report = result.context("Trend discovery failed")?;

            terminal::display_trend_list(&report);
            if !no_chart {
                terminal::display_trend_chart(&report);
            }

            store.save_report(&report)?;
            println!(
                "{}",
                "Report saved. Run with --refresh to rebuild from scratch.".dimmed()
            );
        }

        Commands::Status => {
            let config = Config::load()?;
            let store = PostStore::open(&config.db_path)?;
            bonfire::status::show(&store, &config.db_path)?;
        }
    }

    Ok(())
}
