//! consulta CLI entry point

use clap::{Parser, Subcommand};
use consulta::{
    config::{Config, SurfaceConfig},
    console,
    embed::OpenAiEmbedder,
    error::Result,
    generate::OpenAiGenerator,
    pipeline::{PipelineOptions, QaPipeline},
    server,
    store::QdrantSearch,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "consulta")]
#[command(version, about = "Question answering over a Qdrant collection", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Bind address (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Start an interactive question-answering session
    Console,

    /// Answer a single question and exit
    Ask {
        /// The question to answer
        question: String,

        /// Number of passages to retrieve
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Chat completion model to use
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Fail fast on missing credentials, before serving anything
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve { bind } => {
            let pipeline = build_pipeline(&config, &config.http)?;
            let bind_addr = bind.unwrap_or(config.bind_addr);
            server::serve(pipeline, bind_addr, config.static_dir.clone()).await
        }

        Commands::Console => {
            let pipeline = build_pipeline(&config, &config.console)?;
            console::run(pipeline).await
        }

        Commands::Ask {
            question,
            top_k,
            model,
        } => {
            let surface = SurfaceConfig {
                generation_model: model.unwrap_or_else(|| config.console.generation_model.clone()),
                top_k: top_k.unwrap_or(config.console.top_k),
            };
            let pipeline = build_pipeline(&config, &surface)?;
            let answer = pipeline.answer(&question).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                println!("{}", answer.answer);
                if let Some(sources) = &answer.sources {
                    println!("\nFuentes:");
                    for source in sources {
                        println!("  - {}", source);
                    }
                }
            }
            Ok(())
        }
    }
}

/// Wire the provider clients into a pipeline for one surface
fn build_pipeline(config: &Config, surface: &SurfaceConfig) -> Result<Arc<QaPipeline>> {
    let embedder = Arc::new(OpenAiEmbedder::new(
        &config.openai_base_url,
        &config.openai_api_key,
        &config.embedding_model,
    )?);
    let search = Arc::new(QdrantSearch::connect(
        &config.qdrant_url,
        &config.qdrant_api_key,
    )?);
    let generator = Arc::new(OpenAiGenerator::new(
        &config.openai_base_url,
        &config.openai_api_key,
    )?);

    Ok(Arc::new(QaPipeline::new(
        embedder,
        search,
        generator,
        PipelineOptions {
            collection: config.collection.clone(),
            generation_model: surface.generation_model.clone(),
            top_k: surface.top_k,
        },
    )))
}
