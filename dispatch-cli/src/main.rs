// ABOUTME: Command-line front end for the tool registry.
// ABOUTME: Lists schemas, runs a single tool, or runs the headline pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use tooldispatch::prelude::*;

/// Discover and invoke self-describing tools by name
#[derive(Parser)]
#[command(name = "dispatch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Discover and invoke self-describing tools by name")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every tool schema as function-calling JSON
    Schemas,

    /// List tool names and descriptions
    List,

    /// Execute one tool
    Run {
        /// Tool name
        name: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,

        /// Check arguments against the tool's schema first
        #[arg(long)]
        validate: bool,
    },

    /// Fetch headlines, score their sentiment, and chart frequent words
    Pipeline {
        /// Topic to search for
        topic: String,

        /// Maximum number of headlines
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    init_logging(level);

    let registry = builtin_registry(&config)?;
    info!(tools = registry.len(), "registry ready");

    match cli.command {
        Commands::Schemas => {
            println!("{}", serde_json::to_string_pretty(&registry.schemas_json())?);
        }
        Commands::List => {
            for schema in registry.schemas() {
                println!("{:<22} {}", schema.descriptor.name, schema.descriptor.description);
            }
        }
        Commands::Run {
            name,
            args,
            validate,
        } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("arguments must be valid JSON")?;
            let output = if validate {
                registry.execute_checked(&name, args).await?
            } else {
                registry.execute(&name, args).await?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Pipeline { topic, limit } => {
            run_pipeline(&registry, &topic, limit).await?;
        }
    }

    Ok(())
}

/// Chain fetch_news into analyze_sentiment and plot_topic_frequency.
async fn run_pipeline(registry: &Registry, topic: &str, limit: usize) -> Result<()> {
    let news = registry
        .execute(FetchNewsTool::NAME, json!({ "topic": topic, "limit": limit }))
        .await?;
    let headlines = news.get("headlines").cloned().unwrap_or_else(|| json!([]));

    for (i, headline) in headlines.as_array().into_iter().flatten().enumerate() {
        println!("{}. {}", i + 1, headline.as_str().unwrap_or_default());
    }

    let sentiment = registry
        .execute(
            AnalyzeSentimentTool::NAME,
            json!({ "headlines": headlines.clone() }),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&sentiment)?);

    let plot = registry
        .execute(PlotTopicFrequencyTool::NAME, json!({ "headlines": headlines }))
        .await?;
    println!("{}", serde_json::to_string_pretty(&plot)?);

    Ok(())
}

/// Initialize tracing to stderr, honoring RUST_LOG on top of `level`.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
