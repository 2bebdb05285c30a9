// ConfigExampleCommand - Write an example client configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::config::ClientConfig;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct ConfigExampleCommand {
    path: PathBuf,
}

impl ConfigExampleCommand {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let path = self.path.to_str().context("Invalid file path")?;
        ClientConfig::create_example(path)?;
        println!("✓ Example configuration saved to: {}", self.path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
