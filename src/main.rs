//! CLI entry point for the DOJ multimedia search client.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use epstein_core::{Record, SearchClient, save_results};
use tracing::debug;

mod cli;

use cli::Args;

const ASCII_ART: &str = r"
    ███████╗██████╗ ███████╗████████╗███████╗██╗███╗   ██╗
    ██╔════╝██╔══██╗██╔════╝╚══██╔══╝██╔════╝██║████╗  ██║
    █████╗  ██████╔╝███████╗   ██║   █████╗  ██║██╔██╗ ██║
    ██╔══╝  ██╔═══╝ ╚════██║   ██║   ██╔══╝  ██║██║╚██╗██║
    ███████╗██║     ███████║   ██║   ███████╗██║██║ ╚████║
    ╚══════╝╚═╝     ╚══════╝   ╚═╝   ╚══════╝╚═╝╚═╝  ╚═══╝

    DOJ Multimedia Search Client
    Query and export classified document metadata
";

fn show_banner() {
    println!("{ASCII_ART}");
    println!("{}", "─".repeat(70));
    println!("Use 'epstein --help' for command options");
    println!("{}\n", "─".repeat(70));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Invoked with no arguments at all: banner only, no query.
    if std::env::args().len() == 1 {
        show_banner();
        return Ok(());
    }

    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    println!("{}", "=".repeat(70));
    println!("DOJ Multimedia Search Client");
    println!("{}", "=".repeat(70));
    println!("Search term: '{}' (empty = all documents)", args.search);
    match args.limit {
        Some(limit) => println!("Max results: {limit}"),
        None => println!("Max results: unlimited"),
    }
    println!();

    let client = SearchClient::new(&args.base_url);
    let documents = client
        .search_all(&args.search, args.limit, Duration::from_secs_f64(args.delay))
        .await;

    println!("\n{}", "=".repeat(70));
    println!("SUMMARY: Found {} documents", documents.len());
    println!("{}", "=".repeat(70));

    if documents.is_empty() {
        println!("\nNo documents found.");
        return Ok(());
    }

    if !args.no_save {
        let paths = save_results(&documents, &args.prefix, &args.output_path)?;
        println!("\nSaved JSON: {}", paths.json.display());
        println!("Saved CSV: {}", paths.csv.display());
        println!("Saved URL list: {}", paths.urls.display());
    }

    println!("\nFirst {} documents found:", args.head);
    println!("{}", "-".repeat(70));
    for (index, document) in documents.iter().take(args.head).enumerate() {
        print_document(index + 1, document);
    }

    Ok(())
}

fn print_document(position: usize, document: &Record) {
    println!("\n{position}. {}", document.title);
    println!("   File: {}", document.file_name);
    println!("   URL: {}", document.url);
    println!(
        "   Document ID: {}",
        document.document_id.as_deref().unwrap_or("N/A")
    );
    println!(
        "   Pages: {}-{}",
        document.start_page.unwrap_or(0),
        document.end_page.unwrap_or(0)
    );
    println!("   File Size: {} bytes", document.file_size.unwrap_or(0));
    println!("   Words: {}", document.total_words.unwrap_or(0));
    if document.is_chunked.unwrap_or(false) {
        println!("   Status: Chunked");
    }
    println!(
        "   Indexed: {}",
        document.indexed_at.as_deref().unwrap_or("N/A")
    );
}
