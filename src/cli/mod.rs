// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::config::ClientConfig;
use crate::models::ApiVersion;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod analyze_args;
mod output_args;
mod polling_args;

pub use analyze_args::AnalyzeArgs;
pub use output_args::OutputArgs;
pub use polling_args::PollingArgs;

/// LabScan - SSL Labs assessment client
///
/// Submits hosts to the SSL Labs API, waits for the assessments to finish and
/// reports grades and vulnerabilities per endpoint.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, long_about = None)]
#[command(name = "labscan")]
#[command(about = "SSL Labs TLS assessment client", long_about = None)]
pub struct Args {
    /// Hosts to assess
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,

    /// SSL Labs API version
    #[arg(long = "api-version", value_enum, default_value_t = ApiVersion::V3)]
    pub api_version: ApiVersion,

    /// Print service info (engine version, assessment quota) and exit
    #[arg(long = "info")]
    pub info: bool,

    /// Load client configuration from a TOML file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// Application name sent in the User-Agent header
    #[arg(long = "app-name", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Application version sent in the User-Agent header
    #[arg(long = "app-version", value_name = "VERSION")]
    pub app_version: Option<String>,

    /// API root URL (without the version segment)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    #[command(flatten)]
    pub polling: PollingArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Client configuration: file values (or defaults) overridden by flags
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(
                path.to_str()
                    .context("Invalid config file path")?,
            )?,
            None => ClientConfig::default(),
        };

        if let Some(name) = &self.app_name {
            config.app_name = name.clone();
        }
        if let Some(version) = &self.app_version {
            config.app_version = version.clone();
        }
        if let Some(url) = &self.api_url {
            config.base_url = url.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["labscan", "example.com"]).unwrap();
        assert_eq!(args.hosts, vec!["example.com"]);
        assert_eq!(args.api_version, ApiVersion::V3);
        assert_eq!(args.polling.poll_interval, 10);
        assert_eq!(args.polling.max_wait, 900);
        assert_eq!(args.analyze.to_params(), Default::default());
    }

    #[test]
    fn test_parse_analyze_flags() {
        let args = Args::try_parse_from([
            "labscan",
            "--api-version",
            "v2",
            "--publish",
            "--start-new",
            "--all",
            "--max-age",
            "12",
            "a.com",
            "b.com",
        ])
        .unwrap();
        assert_eq!(args.api_version, ApiVersion::V2);
        let params = args.analyze.to_params();
        assert!(params.publish && params.start_new && params.all);
        assert_eq!(params.max_age, Some(12));
        assert_eq!(args.hosts.len(), 2);
    }

    #[test]
    fn test_start_new_conflicts_with_from_cache() {
        let result = Args::try_parse_from(["labscan", "--start-new", "--from-cache", "a.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "labscan",
            "--app-name",
            "monitor",
            "--api-url",
            "http://127.0.0.1:9000/api",
            "a.com",
        ])
        .unwrap();
        let config = args.client_config().unwrap();
        assert_eq!(config.app_name, "monitor");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
