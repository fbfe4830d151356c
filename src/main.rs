use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gsm8k_tot_eval::{
    config::{Config, FrontierPolicy},
    dataset,
    eval::{run_baseline, run_tot},
    ollama::{CompletionService, OllamaClient},
};

/// GSM8K benchmark evaluator for Ollama models
#[derive(Parser, Debug)]
#[command(name = "gsm8k-tot-eval")]
#[command(about = "Evaluate an Ollama model on GSM8K with baseline or Tree-of-Thought strategies")]
struct Cli {
    /// Path to the GSM8K JSONL data file
    #[arg(long, short = 'd')]
    data: PathBuf,

    /// Maximum number of records to evaluate
    #[arg(long, short = 'n', default_value = "100")]
    limit: usize,

    /// Ollama model name (overrides OLLAMA_MODEL)
    #[arg(long, short = 'm')]
    model: Option<String>,

    #[command(subcommand)]
    strategy: Strategy,
}

#[derive(Subcommand, Debug)]
enum Strategy {
    /// Single-shot baseline evaluation
    Baseline,
    /// Tree-of-Thought breadth-first search evaluation
    Tot {
        /// Number of expansion rounds (overrides MAX_ITERATIONS)
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Candidate children per expanded node (overrides BREADTH_LIMIT)
        #[arg(long)]
        breadth_limit: Option<usize>,

        /// Keep only the K best-scored nodes in each frontier
        /// (overrides FRONTIER_TOP_K; default keeps every node)
        #[arg(long)]
        top_k: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.ollama.model,
        base_url = %config.ollama.base_url,
        "GSM8K evaluator starting..."
    );

    // Load dataset
    let records = dataset::load_jsonl(&cli.data, Some(cli.limit))?;
    info!(records = records.len(), path = %cli.data.display(), "Dataset loaded");

    // Initialize Ollama client
    let client = OllamaClient::new(&config.ollama, config.request.clone())?;
    let service: Arc<dyn CompletionService> = Arc::new(client);

    let report = match cli.strategy {
        Strategy::Baseline => {
            info!("Running baseline evaluation...");
            run_baseline(service, &records).await
        }
        Strategy::Tot {
            max_iterations,
            breadth_limit,
            top_k,
        } => {
            let mut search = config.search.clone();
            if let Some(max_iterations) = max_iterations {
                search.max_iterations = max_iterations;
            }
            if let Some(breadth_limit) = breadth_limit {
                search.breadth_limit = breadth_limit;
            }
            if let Some(k) = top_k {
                search.frontier_policy = FrontierPolicy::TopK(k);
            }

            info!(
                max_iterations = search.max_iterations,
                breadth_limit = search.breadth_limit,
                "Running Tree-of-Thought evaluation..."
            );
            run_tot(service, &records, &search).await
        }
    };

    println!("{}", report.summary());

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        gsm8k_tot_eval::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        gsm8k_tot_eval::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
