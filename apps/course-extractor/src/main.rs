mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use course_extractor::config::Config;
use course_extractor::llm_client::{self, LlmClient};
use course_extractor::{AppError, CourseExtractor, CourseSelection, ExtractorConfig};

use crate::cli::{read_context, Cli};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the extracted JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let extractor = CourseExtractor::new(ExtractorConfig {
        shape: cli.shape.or(config.output_shape).unwrap_or_default(),
        fenced_blocks: cli.fenced_blocks,
    });
    let context = read_context(&cli.context)?;

    if cli.render_only {
        println!("{}", extractor.builder().render(&context, &cli.instruction));
        return Ok(ExitCode::SUCCESS);
    }

    let llm = LlmClient::new(config.require_api_key()?.to_string())?;
    info!(
        "Extracting courses (model: {}, shape: {})",
        llm_client::MODEL,
        extractor.builder().shape()
    );

    match extractor.extract(&llm, &context, &cli.instruction).await {
        Ok(value) => {
            match CourseSelection::from_value(&value) {
                Ok(selection) => info!("Recovered {} course(s)", selection.courses.len()),
                Err(e) => warn!("Reply is JSON but not a known course shape: {e}"),
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ AppError::Extraction(_)) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!("{e}");
            Err(e.into())
        }
    }
}
