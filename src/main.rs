// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::io::{self, Cursor};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sttr::cli::{self, Input};
use sttr::config::consts::DEFAULT_LOG_FILTER;
use sttr::config::{load_config, Config, Registry};
use sttr::engine::StreamDriver;
use sttr::observability::messages::config::ConfigLoaded;
use sttr::observability::messages::StructuredLog;
use sttr::picker;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise `-v` means debug, otherwise the config file's
/// `log_filter`, otherwise the built-in default.
fn init_tracing(verbose: bool, config: &Config) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let config = load_config(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    config
        .streaming
        .validate()
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

async fn run() -> Result<()> {
    let registry = Registry::builtin();
    let matches = cli::build_cli(registry).get_matches();

    let config_path = matches.get_one::<PathBuf>(cli::CONFIG_ARG);
    let config = load_settings(config_path)?;
    init_tracing(matches.get_flag(cli::VERBOSE_ARG), &config);
    if let Some(path) = config_path {
        ConfigLoaded {
            path,
            chunk_size: config.streaming.effective_chunk_size(),
            mode: config.streaming.mode.as_str(),
        }
        .log();
    }

    let (name, sub) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => bail!("No command given; run `sttr --help`"),
    };

    match name {
        cli::LIST_COMMAND => {
            print!("{}", cli::render_list(registry));
            Ok(())
        }
        cli::INTERACTIVE_COMMAND => {
            let stdin = io::stdin();
            picker::run(registry, &mut stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        name => {
            let processor = registry.lookup(name)?;
            let flags = cli::flags_from_matches(processor, sub);
            let driver = StreamDriver::from_options(&config.streaming);
            let mut stdout = tokio::io::stdout();

            match cli::input_from_matches(sub) {
                Input::Text(text) => {
                    driver
                        .run(processor, Cursor::new(text.into_bytes()), &mut stdout, &flags)
                        .await?
                }
                Input::File(path) => {
                    let file = tokio::fs::File::open(&path)
                        .await
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    driver.run(processor, file, &mut stdout, &flags).await?
                }
                Input::Stdin => {
                    driver
                        .run(processor, tokio::io::stdin(), &mut stdout, &flags)
                        .await?
                }
            };
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
