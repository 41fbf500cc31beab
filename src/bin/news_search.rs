//! News Keyword Search — Interactive Front End
//!
//! One synchronous search per invocation, rendered to stdout. Unlike the
//! HTTP service, this front end applies no default timeout: an uncapped
//! search runs until the stream is exhausted (or Ctrl-C kills the process).

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use news_keyword_search::fetch::live::RssProvider;
use news_keyword_search::fetch::mock::MockProvider;
use news_keyword_search::fetch::types::Article;
use news_keyword_search::orchestrator::SearchOrchestrator;
use news_keyword_search::request::{SearchMode, SearchRequest, DEFAULT_DAYS_BACK};
use news_keyword_search::sources::SourceCatalog;

#[derive(Parser)]
#[command(
    name = "news-search",
    about = "Keyword search over crawled news articles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match articles whose body contains any include keyword
    Body(SearchArgs),

    /// Match articles whose URL contains all include keywords and no
    /// exclude keyword
    Url {
        #[command(flatten)]
        args: SearchArgs,

        /// Keyword that disqualifies a URL (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,
    },

    /// Show the catalogued sources grouped by region
    Sources,
}

#[derive(Args)]
struct SearchArgs {
    /// Keyword to search for (repeatable)
    #[arg(short, long = "include", required = true)]
    include: Vec<String>,

    /// Stop after this many matching articles
    #[arg(long)]
    max_articles: Option<usize>,

    /// How many days back to search
    #[arg(long, default_value_t = DEFAULT_DAYS_BACK)]
    days_back: u32,

    /// Soft time budget in seconds; absent means unbounded
    #[arg(long)]
    timeout_seconds: Option<f64>,

    /// Restrict the search to a catalogued source (repeatable)
    #[arg(long = "source")]
    sources: Vec<String>,

    /// Search the fixed offline article set instead of live feeds
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    // Keep stdout clean for article output; logs go through RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Body(args) => run_search(SearchMode::Body, args, Vec::new()).await,
        Commands::Url { args, exclude } => run_search(SearchMode::Url, args, exclude).await,
        Commands::Sources => {
            for (region, (count, names)) in SourceCatalog::new().grouping_summary() {
                println!("{region}: {count} source(s)");
                for name in names {
                    println!("  {name}");
                }
            }
            Ok(())
        }
    }
}

async fn run_search(mode: SearchMode, args: SearchArgs, exclude: Vec<String>) -> Result<()> {
    let orchestrator = build_orchestrator(args.mock);

    let max_str = match args.max_articles {
        Some(n) => format!(" with max articles set to {n}"),
        None => " with no max article limit".to_string(),
    };
    let mode_str = match mode {
        SearchMode::Body => "body",
        SearchMode::Url => "url",
    };
    println!(
        "Using {mode_str} search{max_str} and going {days} day(s) back.\n",
        days = args.days_back
    );
    println!("include terms: {:?}", args.include);
    if !exclude.is_empty() {
        println!("exclude terms: {:?}", exclude);
    }
    print_divider();

    let request = SearchRequest {
        mode,
        include: args.include,
        exclude,
        max_articles: args.max_articles,
        days_back: args.days_back,
        timeout_seconds: args.timeout_seconds,
        sources: if args.sources.is_empty() {
            None
        } else {
            Some(args.sources)
        },
    };

    let result = orchestrator
        .execute(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    for article in &result.articles {
        display(article);
    }

    println!("\nFound {} article(s).", result.articles.len());
    if result.truncated {
        println!("(Stopped early: time budget reached.)");
    }
    Ok(())
}

fn build_orchestrator(mock: bool) -> SearchOrchestrator {
    SearchOrchestrator::new(
        SourceCatalog::new(),
        Arc::new(RssProvider::new()),
        Arc::new(MockProvider::new()),
        mock,
    )
}

/// Format:
///
/// [authors]
/// [article body]
///
/// [article title]
/// [date]
/// [url]
fn display(article: &Article) {
    if !article.authors.is_empty() {
        println!("{}", article.authors.join(", "));
    }
    println!("{}", article.body_text);
    println!();
    println!("{}", article.title);
    println!("{}", article.published_at);
    println!("{}", article.url);
    print_divider();
}

fn print_divider() {
    println!("{}", "-".repeat(20));
}
