//! Essay reader CLI
//!
//! Interactive page shell by default, plus one-shot search and listing.

use clap::{Parser, Subcommand};
use console::style;
use essay_search::highlight::{self, Fragment};
use essay_search::{load_essays, AppConfig, Entry, EssayError, EssayFilter, Page, Viewport};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Essay reader with live search and match navigation
#[derive(Parser)]
#[command(name = "essays")]
#[command(author = "Essay Search Contributors")]
#[command(version)]
#[command(about = "Read and search a collection of essays", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/essay-search/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Essay collection (JSON array of {title, date, body})
    #[arg(short, long, global = true)]
    essays: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive reader
    Browse {
        /// Page to open, as a location hash (e.g. "#essays")
        #[arg(short, long, default_value = "#essays")]
        page: String,

        /// Start with the search bar open on this query
        #[arg(short, long, allow_hyphen_values = true)]
        query: Option<String>,
    },

    /// Print the essays matching a query with highlights
    Search {
        /// Search text, matched literally and case-insensitively
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every essay with its date
    List,
}

/// One-shot searches have no container to scroll
struct Detached;

impl Viewport for Detached {
    fn scroll_to_entry(&mut self, _index: usize) {}
    fn scroll_to_top(&mut self) {}
}

#[derive(Serialize)]
struct SearchHit<'a> {
    index: usize,
    title: &'a str,
    date: &'a str,
    highlighted: String,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    let _log_guard = essay_search::logging::init(&config.log_level);
    tracing::info!(version = essay_search::VERSION, "essays starting up");

    let result = essay_path(cli.essays, &config).and_then(|path| {
        let entries = load_essays(&path)?;
        match cli.command.unwrap_or(Commands::Browse {
            page: "#essays".to_string(),
            query: None,
        }) {
            Commands::Browse { page, query } => cmd_browse(entries, config, &page, query.as_deref()),
            Commands::Search { query, json } => cmd_search(entries, &query, json),
            Commands::List => cmd_list(&entries, &path),
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        exit_with(e);
    }
}

fn exit_with(e: EssayError) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), e);
    if e.is_user_error() {
        eprintln!("{}", style("Run `essays --help` for usage.").dim());
    }
    std::process::exit(1);
}

fn essay_path(arg: Option<PathBuf>, config: &AppConfig) -> essay_search::Result<PathBuf> {
    arg.or_else(|| config.essays.clone())
        .ok_or(EssayError::NoEssayFile)
}

fn cmd_browse(
    entries: Vec<Entry>,
    config: AppConfig,
    page: &str,
    query: Option<&str>,
) -> essay_search::Result<()> {
    let page = Page::from_hash(page);
    essay_search::tui::run(entries, config, page, query)
}

fn cmd_search(entries: Vec<Entry>, query: &str, json: bool) -> essay_search::Result<()> {
    let mut filter = EssayFilter::new(entries, Detached);
    filter.apply_filter(query);

    if json {
        let hits: Vec<SearchHit> = filter
            .match_set()
            .iter()
            .map(|&idx| {
                let entry = &filter.entries()[idx];
                SearchHit {
                    index: idx,
                    title: &entry.title,
                    date: &entry.date_label,
                    highlighted: highlight::to_markup(&filter.views()[idx].fragments),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!(
        "{} Searching for {}",
        style("→").cyan().bold(),
        style(filter.query()).yellow(),
    );

    for (i, &idx) in filter.match_set().iter().enumerate() {
        let entry = &filter.entries()[idx];
        println!(
            "\n{} {}  {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(&entry.title).bold(),
            style(&entry.date_label).dim(),
        );
        println!("     {}", render_fragments(&filter.views()[idx].fragments));
    }

    println!(
        "\n{} {} of {} essays match",
        style("✓").green().bold(),
        style(filter.match_set().len()).green(),
        filter.entries().len(),
    );
    Ok(())
}

fn cmd_list(entries: &[Entry], path: &Path) -> essay_search::Result<()> {
    println!(
        "{} {} essays in {}",
        style("→").cyan().bold(),
        entries.len(),
        style(path.display()).yellow(),
    );
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {} {:<12} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(&entry.date_label).cyan(),
            entry.title,
        );
    }
    Ok(())
}

fn render_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| match f {
            Fragment::Plain(s) => s.replace('\n', "\n     "),
            Fragment::Mark(s) => style(s).black().on_yellow().to_string(),
        })
        .collect()
}
