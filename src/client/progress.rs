// Polling handle for a submitted assessment

use super::query::AnalyzeParams;
use super::Client;
use crate::error::{LabError, Result};
use crate::models::{ApiSchema, AssessmentStatus, AssessmentView};
use tracing::debug;

/// Tracks one host's assessment and guards access to endpoint details
///
/// Endpoint details are only served once the assessment is READY. The handle
/// remembers the last status it saw and refreshes it at most once before
/// refusing a detail request.
pub struct AnalyzeProgress<'a, S: ApiSchema> {
    client: &'a Client<S>,
    host: String,
    params: AnalyzeParams,
    prev_status: Option<AssessmentStatus>,
    submitted: Option<S::Host>,
}

impl<'a, S: ApiSchema> AnalyzeProgress<'a, S> {
    pub(crate) fn new(client: &'a Client<S>, host: &str, params: AnalyzeParams) -> Self {
        Self {
            client,
            host: host.to_string(),
            params,
            prev_status: None,
            submitted: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Status seen in the most recent response, if any
    pub fn last_status(&self) -> Option<&AssessmentStatus> {
        self.prev_status.as_ref()
    }

    pub(crate) fn record_status(&mut self, status: AssessmentStatus) {
        self.prev_status = Some(status);
    }

    pub(crate) fn record_submission(&mut self, report: S::Host) {
        self.record_status(report.status().clone());
        self.submitted = Some(report);
    }

    /// Record returned by the submitting `analyze` call; `None` once taken
    /// or when the handle came from [`Client::track`]
    pub fn take_submitted(&mut self) -> Option<S::Host> {
        self.submitted.take()
    }

    /// Poll the assessment and remember its status
    pub async fn info(&mut self) -> Result<S::Host> {
        let report = self.client.fetch_host(&self.host, &self.params).await?;
        debug!("Poll {}: status {}", self.host, report.status());
        self.record_status(report.status().clone());
        Ok(report)
    }

    /// Full results for one endpoint of a READY assessment
    ///
    /// A stale status is refreshed once; if the assessment is still not READY
    /// the request is refused with [`LabError::NotReady`].
    pub async fn detailed_info(&mut self, ip: &str) -> Result<S::Endpoint> {
        if !self.is_ready() {
            self.info().await?;

            if !self.is_ready() {
                return Err(LabError::NotReady {
                    host: self.host.clone(),
                    status: self.prev_status.clone().unwrap_or_default(),
                });
            }
        }

        self.client.endpoint_data(&self.host, ip).await
    }

    fn is_ready(&self) -> bool {
        self.prev_status
            .as_ref()
            .is_some_and(AssessmentStatus::is_ready)
    }
}
