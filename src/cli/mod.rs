use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::clients::openai::backend_from_config;
use crate::domain::{SummaryRequest, DEFAULT_WORDS};
use crate::infra::config::Config;
use crate::pipeline::fetch::Fetcher;
use crate::pipeline::SummaryPipeline;

#[derive(Parser)]
#[command(name = "summary-mcp-gateway")]
#[command(about = "Summary MCP Gateway - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and tool availability
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
    },
    /// Run the summarization pipeline once against a URL
    TestSummarize {
        /// Page URL to summarize
        #[arg(short, long)]
        url: String,
        /// Optional focus directive
        #[arg(short, long, default_value = "")]
        focus: String,
        /// Approximate word count hint
        #[arg(short, long, default_value_t = DEFAULT_WORDS)]
        words: u32,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    run_commands(cli.command).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("configuration validation failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("status check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::TestSummarize { url, focus, words } => {
            match test_summarize(&url, &focus, words).await {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("summarize test failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{url}/healthz"))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env_and_toml();

    if !matches!(config.mode.as_str(), "server" | "stdio") {
        return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", config.mode).into());
    }

    if config.mode == "server" && config.port == 0 {
        return Err("PORT cannot be 0".into());
    }

    if config.llm.api_key.is_none() {
        println!("note: OPENAI_API_KEY not set; summarize_url will report llm_failed");
    }

    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{url}/healthz"))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "health: {}",
        if health_response.status().is_success() {
            "healthy"
        } else {
            "unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{url}/v1/tools/rpc"))
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools.list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            println!("tools: available");
        }
        Ok(resp) => {
            println!("tools: HTTP {}", resp.status());
        }
        Err(_) => {
            println!("tools: unavailable");
        }
    }

    let config = Config::from_env_and_toml();
    println!("\nconfiguration:");
    println!("  mode: {}", config.mode);
    println!("  addr: {}", config.addr());
    println!("  model: {}", config.llm.model);
    println!(
        "  api key: {}",
        if config.llm.api_key.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );

    Ok(())
}

async fn test_summarize(
    url: &str,
    focus: &str,
    words: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env_and_toml();
    let pipeline = SummaryPipeline::new(Fetcher::new(), backend_from_config(&cfg.llm));

    let req = SummaryRequest {
        url: url.to_owned(),
        focus: focus.to_owned(),
        words,
    };
    let outcome = pipeline.run(&req).await;

    if outcome.ok {
        println!("{}", outcome.summary.unwrap_or_default());
        Ok(())
    } else {
        Err(outcome.error.unwrap_or_else(|| "unknown error".into()).into())
    }
}
