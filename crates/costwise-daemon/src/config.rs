use std::path::PathBuf;

use anyhow::Context;

use costwise_observe::{LoggerConfig, LoggerFormat, LoggerLevel};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MODEL_PATH: &str = "cost_model.json";

/// Daemon configuration assembled from the environment.
///
/// - `COSTWISE_PORT` (fallback `PORT`, default 8000)
/// - `COSTWISE_MODEL_PATH` (default `cost_model.json` in the working directory)
/// - `COSTWISE_LOG` env-filter expression (default `info`)
/// - `COSTWISE_LOG_FORMAT` (`text` | `json`, default `text`)
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub port: u16,
    pub model_path: PathBuf,
    pub logger: LoggerConfig,
}

impl DaemonConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = parse_port(
            std::env::var("COSTWISE_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok(),
        )?;

        let model_path = std::env::var("COSTWISE_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let logger = parse_logger(
            std::env::var("COSTWISE_LOG").ok(),
            std::env::var("COSTWISE_LOG_FORMAT").ok(),
        )?;

        Ok(Self {
            port,
            model_path,
            logger,
        })
    }
}

fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(s) => s
            .parse::<u16>()
            .with_context(|| format!("invalid port: {s}")),
        None => Ok(DEFAULT_PORT),
    }
}

fn parse_logger(level: Option<String>, format: Option<String>) -> anyhow::Result<LoggerConfig> {
    let level = match level {
        Some(s) => LoggerLevel::new(s)?,
        None => LoggerLevel::default(),
    };
    let format = match format {
        Some(s) => s.parse::<LoggerFormat>()?,
        None => LoggerFormat::default(),
    };

    Ok(LoggerConfig {
        level,
        format,
        ..Default::default()
    })
}
