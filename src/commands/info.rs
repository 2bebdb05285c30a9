// InfoCommand - Print SSL Labs service availability and quota
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::cli::Args;
use crate::client::Client;
use crate::models::{ApiSchema, ApiVersion, V2, V3};
use crate::output::json::generate_json;
use crate::output::terminal::render_info;
use async_trait::async_trait;

pub struct InfoCommand {
    args: Args,
}

impl InfoCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    async fn run<S: ApiSchema>(&self) -> anyhow::Result<()> {
        let client = Client::<S>::new(self.args.client_config()?)?;
        let info = client.info().await?;

        if self.args.output.json {
            println!("{}", generate_json(&info, self.args.output.json_pretty)?);
        } else {
            print!("{}", render_info(&info));
        }
        Ok(())
    }
}

#[async_trait]
impl Command for InfoCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        match self.args.api_version {
            ApiVersion::V2 => self.run::<V2>().await,
            ApiVersion::V3 => self.run::<V3>().await,
        }
    }

    fn name(&self) -> &'static str {
        "InfoCommand"
    }
}
