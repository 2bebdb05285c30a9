// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, ConfigExampleCommand, InfoCommand, ScanCommand};
use crate::cli::Args;
use anyhow::bail;

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority: `--config-example`, then `--info`, then assessing the given hosts.
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> anyhow::Result<Box<dyn Command>> {
        Self::validate_routing(&args)?;

        if let Some(path) = args.config_example.clone() {
            return Ok(Box::new(ConfigExampleCommand::new(path)));
        }

        if args.info {
            return Ok(Box::new(InfoCommand::new(args)));
        }

        Ok(Box::new(ScanCommand::new(args)))
    }

    /// Reject argument combinations that can't be routed
    pub fn validate_routing(args: &Args) -> anyhow::Result<()> {
        if args.config_example.is_some() && args.info {
            bail!("Cannot combine --config-example with --info");
        }

        if args.config_example.is_none() && !args.info && args.hosts.is_empty() {
            bail!("No host given. Usage: labscan [OPTIONS] <HOST>...");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_route_config_example() {
        let args = Args {
            config_example: Some(PathBuf::from("labscan.toml")),
            ..Args::default()
        };
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "ConfigExampleCommand");
    }

    #[test]
    fn test_route_info() {
        let args = Args {
            info: true,
            ..Args::default()
        };
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "InfoCommand");
    }

    #[test]
    fn test_route_scan() {
        let args = Args {
            hosts: vec!["example.com".to_string()],
            ..Args::default()
        };
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "ScanCommand");
    }

    #[test]
    fn test_route_requires_host() {
        assert!(CommandRouter::route(Args::default()).is_err());
    }

    #[test]
    fn test_conflicting_modes() {
        let args = Args {
            info: true,
            config_example: Some(PathBuf::from("labscan.toml")),
            ..Args::default()
        };
        assert!(CommandRouter::validate_routing(&args).is_err());
    }
}
