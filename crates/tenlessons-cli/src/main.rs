//! tenlessons CLI — an interactive LLM micro-learning tutor.

use std::io;
use std::process;

use clap::Parser;

use tenlessons_core::output::{Emitter, DEFAULT_TICK_MS};
use tenlessons_core::session::{Session, SessionConfig};
use tenlessons_providers::OpenAiProvider;

/// Environment variable holding the API credential.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Parser)]
#[command(name = "tenlessons", version, about = "Interactive LLM micro-learning tutor")]
struct Cli {
    /// Model identifier
    #[arg(long, default_value = "gpt-4o")]
    model: String,

    /// Per-character output delay in milliseconds (0 disables pacing)
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Disable ANSI color output
    #[arg(long)]
    no_color: bool,

    /// Max tokens per completion call
    #[arg(long, default_value = "2048")]
    max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value = "0.7")]
    temperature: f64,

    /// OpenAI-compatible endpoint override
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tenlessons_core=info".parse().unwrap())
                .add_directive("tenlessons_providers=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Missing credential is a fatal precondition, checked before any
    // network activity.
    let Ok(api_key) = std::env::var(API_KEY_VAR) else {
        eprintln!("Error: {API_KEY_VAR} is not set");
        process::exit(1);
    };

    let provider = OpenAiProvider::new(&api_key, cli.base_url);
    let emitter = Emitter::stdout(cli.tick_ms, !cli.no_color);
    let config = SessionConfig {
        model: cli.model,
        max_tokens: cli.max_tokens,
        temperature: cli.temperature,
    };

    let stdin = io::stdin();
    let mut session = Session::new(&provider, emitter, stdin.lock(), config);

    if let Err(e) = session.run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
