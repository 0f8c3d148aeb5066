mod detector;
mod fetch;
mod report;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use scraper::Html;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "cart_detector",
    about = "Finds likely add-to-cart controls on e-commerce pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect add-to-cart controls on a single page
    Detect {
        /// HTML file path or http(s) URL
        input: String,
        /// Print matches as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Scan a directory of saved .html pages
    Scan {
        /// Directory containing .html files
        dir: PathBuf,
        /// Max pages to scan (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { input, json } => {
            let html = fetch::load_html(&input).await?;
            let doc = Html::parse_document(&html);
            let matches = detector::find_add_to_cart_candidates(&doc);
            let rows = report::summarize(&matches);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No add-to-cart candidates found.");
            } else {
                print_detections(&rows);
            }
        }
        Commands::Scan { dir, limit } => {
            scan_dir(&dir, limit)?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn print_detections(rows: &[report::Detection]) {
    println!(
        "{:>3} | {:<8} | {:<20} | {:<28} | {:<48}",
        "#", "Tag", "Id", "Class", "Text"
    );
    println!("{}", "-".repeat(112));

    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<8} | {:<20} | {:<28} | {:<48}",
            i + 1,
            r.tag,
            report::truncate(r.id.as_deref().unwrap_or("-"), 20),
            report::truncate(r.class.as_deref().unwrap_or("-"), 28),
            r.text,
        );
    }

    println!("\n{} candidate(s)", rows.len());
}

struct ScanRow {
    file: String,
    matches: usize,
    tags: String,
}

fn scan_dir(dir: &Path, limit: Option<usize>) -> Result<()> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }

    if files.is_empty() {
        println!("No .html files in {}", dir.display());
        return Ok(());
    }

    println!("Scanning {} pages...", files.len());
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut rows: Vec<ScanRow> = Vec::new();
    let mut errors = 0usize;

    for chunk in files.chunks(100) {
        let results: Vec<Result<ScanRow>> = chunk.par_iter().map(|path| scan_one(path)).collect();
        for result in results {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!("{:#}", e);
                    errors += 1;
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    println!(
        "{:>3} | {:<36} | {:>7} | {:<20}",
        "#", "File", "Matches", "Tags"
    );
    println!("{}", "-".repeat(75));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<36} | {:>7} | {:<20}",
            i + 1,
            report::truncate(&r.file, 36),
            r.matches,
            r.tags,
        );
    }

    let with_match = rows.iter().filter(|r| r.matches > 0).count();
    let total: usize = rows.iter().map(|r| r.matches).sum();
    println!(
        "\n{} pages scanned ({} with a match, {} matches total, {} errors)",
        rows.len(),
        with_match,
        total,
        errors
    );
    Ok(())
}

/// Parse one saved page and count add-to-cart candidates.
fn scan_one(path: &Path) -> Result<ScanRow> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = Html::parse_document(&html);
    let matches = detector::find_add_to_cart_candidates(&doc);

    let mut tags: Vec<&str> = matches.iter().map(|e| e.value().name()).collect();
    tags.dedup();

    Ok(ScanRow {
        file: path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string(),
        matches: matches.len(),
        tags: tags.join(", "),
    })
}
