// Polling behaviour arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::constants::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
use clap::Args;
use std::time::Duration;

/// How the CLI waits for assessments to finish
#[derive(Args, Debug, Clone)]
pub struct PollingArgs {
    /// Seconds between two status polls
    #[arg(long = "poll-interval", value_name = "SECONDS", default_value = "10")]
    pub poll_interval: u64,

    /// Give up on an assessment after this many seconds
    #[arg(long = "max-wait", value_name = "SECONDS", default_value = "900")]
    pub max_wait: u64,

    /// Fetch full endpoint details (getEndpointData) once an assessment is READY
    #[arg(long = "endpoint-detail")]
    pub endpoint_detail: bool,
}

impl Default for PollingArgs {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL.as_secs(),
            max_wait: DEFAULT_MAX_WAIT.as_secs(),
            endpoint_detail: false,
        }
    }
}

impl PollingArgs {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait)
    }
}
