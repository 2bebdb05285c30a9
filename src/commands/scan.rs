// ScanCommand - Assess hosts through the SSL Labs API
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::cli::Args;
use crate::client::{AnalyzeParams, AnalyzeProgress, Client};
use crate::models::{
    ApiSchema, ApiVersion, AssessmentStatus, AssessmentView, EndpointSummary, EndpointView, V2, V3,
};
use crate::output::json::{generate_json, write_json_file};
use crate::output::terminal::render_assessment;
use crate::output::HostResult;
use anyhow::{bail, Context};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// ScanCommand submits each host, waits for the assessment to finish and
/// prints the result
///
/// Hosts are processed one after another. Between two submissions the
/// command honours the cool-off period advertised by the service.
pub struct ScanCommand {
    args: Args,
}

impl ScanCommand {
    /// Create a new ScanCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    async fn run<S: ApiSchema>(&self) -> anyhow::Result<()> {
        if self.args.output.no_color {
            colored::control::set_override(false);
        }

        let client = Client::<S>::connect(self.args.client_config()?)
            .await
            .context("Failed to contact the SSL Labs API")?;

        let cool_off = client
            .server_info()
            .map(|info| Duration::from_millis(info.new_assessment_cool_off.max(0) as u64))
            .unwrap_or_default();

        let params = self.args.analyze.to_params();
        let mut results = Vec::new();
        let mut failures = 0usize;

        for (index, host) in self.args.hosts.iter().enumerate() {
            if index > 0 && !cool_off.is_zero() {
                debug!("Waiting {:?} cool-off before the next assessment", cool_off);
                tokio::time::sleep(cool_off).await;
            }

            match self.assess(&client, host, params).await {
                Ok(result) => {
                    if *result.report.status() == AssessmentStatus::Error {
                        warn!(
                            "Assessment of {} failed: {}",
                            host,
                            result.report.status_message()
                        );
                        failures += 1;
                    }

                    if !self.args.output.json {
                        let details: Vec<EndpointSummary> = result
                            .endpoint_details
                            .iter()
                            .map(EndpointView::summary)
                            .collect();
                        print!("{}", render_assessment(&result.report, &details));
                    }

                    results.push(result);
                }
                Err(e) => {
                    error!("Assessment of {} failed: {:#}", host, e);
                    failures += 1;
                }
            }
        }

        if self.args.output.json {
            println!("{}", generate_json(&results, self.args.output.json_pretty)?);
        }

        if let Some(path) = &self.args.output.json_file {
            write_json_file(&results, path, self.args.output.json_pretty)?;
            info!("JSON results written to {}", path.display());
        }

        if failures > 0 {
            bail!(
                "{} of {} assessments failed",
                failures,
                self.args.hosts.len()
            );
        }

        Ok(())
    }

    /// Submit one host and collect its final record
    async fn assess<S: ApiSchema>(
        &self,
        client: &Client<S>,
        host: &str,
        params: AnalyzeParams,
    ) -> anyhow::Result<HostResult<S::Host, S::Endpoint>> {
        info!("Submitting {} for assessment", host);

        let mut progress = client.analyze(host, params).await?;
        let report = self.wait_for_completion(&mut progress).await?;

        let mut endpoint_details = Vec::new();
        if self.args.polling.endpoint_detail && report.status().is_ready() {
            for endpoint in report.endpoint_summaries() {
                debug!("Fetching details for {} ({})", host, endpoint.ip_address);
                match progress.detailed_info(&endpoint.ip_address).await {
                    Ok(detail) => endpoint_details.push(detail),
                    Err(e) => warn!(
                        "Failed to fetch details for {} ({}): {}",
                        host, endpoint.ip_address, e
                    ),
                }
            }
        }

        Ok(HostResult {
            report,
            endpoint_details,
        })
    }

    /// Poll until the assessment is READY or ERROR, or the wait budget runs out
    async fn wait_for_completion<S: ApiSchema>(
        &self,
        progress: &mut AnalyzeProgress<'_, S>,
    ) -> anyhow::Result<S::Host> {
        let interval = self.args.polling.poll_interval();
        let max_wait = self.args.polling.max_wait();
        let started = Instant::now();

        // Cache hits and early errors are final in the submit response
        if let Some(report) = progress.take_submitted() {
            if report.status().is_finished() {
                return Ok(report);
            }
        }
        tokio::time::sleep(interval).await;

        loop {
            let report = progress.info().await?;
            if report.status().is_finished() {
                return Ok(report);
            }

            info!(
                "{}: {} {}",
                progress.host(),
                report.status(),
                progress_line(&report.endpoint_summaries())
            );

            if started.elapsed() + interval > max_wait {
                bail!(
                    "Assessment of {} not finished after {}s",
                    progress.host(),
                    max_wait.as_secs()
                );
            }

            tokio::time::sleep(interval).await;
        }
    }
}

/// "192.0.2.1 40%, 192.0.2.2 pending" style progress text
fn progress_line(endpoints: &[EndpointSummary]) -> String {
    endpoints
        .iter()
        .map(|e| {
            if e.progress < 0 {
                format!("{} pending", e.ip_address)
            } else {
                format!("{} {}%", e.ip_address, e.progress)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl Command for ScanCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        match self.args.api_version {
            ApiVersion::V2 => self.run::<V2>().await,
            ApiVersion::V3 => self.run::<V3>().await,
        }
    }

    fn name(&self) -> &'static str {
        "ScanCommand"
    }
}
