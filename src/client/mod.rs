// LabScan - SSL Labs API client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! HTTP client for the SSL Labs assessment API
//!
//! A [`Client`] is bound to one API version through its schema parameter
//! (`Client<V2>` or `Client<V3>`). Every call issues exactly one GET request;
//! non-200 answers and undecodable bodies are returned as errors, never retried.

pub mod progress;
pub mod query;

pub use progress::AnalyzeProgress;
pub use query::AnalyzeParams;

use crate::config::ClientConfig;
use crate::constants::{PATH_ANALYZE, PATH_ENDPOINT_DATA, PATH_INFO, USER_AGENT_PRODUCT, VERSION};
use crate::error::{LabError, Result};
use crate::models::{ApiSchema, ApiVersion, AssessmentView, Info, V3};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;
use url::Url;

/// SSL Labs API client
pub struct Client<S: ApiSchema = V3> {
    http: reqwest::Client,
    config: ClientConfig,
    /// `{base_url}/{version}/`, joined with the endpoint path per request
    api_root: Url,
    /// Result of the `info` call made by [`Client::connect`]
    info: Option<Info>,
    _schema: PhantomData<S>,
}

impl<S: ApiSchema> Client<S> {
    /// Build a client without contacting the service
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.app_name.trim().is_empty() {
            return Err(LabError::config("App name can't be empty"));
        }

        let api_root = Url::parse(&format!(
            "{}/{}/",
            config.base_url.trim_end_matches('/'),
            S::VERSION.path_segment()
        ))?;

        let http = reqwest::Client::builder()
            .user_agent(user_agent(&config.app_name, &config.app_version))
            .timeout(config.request_timeout())
            .pool_idle_timeout(config.pool_idle_timeout())
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()?;

        Ok(Self {
            http,
            config,
            api_root,
            info: None,
            _schema: PhantomData,
        })
    }

    /// Build a client and fetch the service info, keeping it for later
    /// inspection through [`Client::server_info`]
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let mut client = Self::new(config)?;
        let info = client.info().await?;
        debug!(
            "Connected to SSL Labs engine {} (criteria {}), {}/{} assessments in use",
            info.engine_version, info.criteria_version, info.current_assessments, info.max_assessments
        );
        client.info = Some(info);
        Ok(client)
    }

    /// Service info fetched by [`Client::connect`]
    pub fn server_info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_version(&self) -> ApiVersion {
        S::VERSION
    }

    /// Fetch service availability and this client's assessment quota
    pub async fn info(&self) -> Result<Info> {
        let url = self.endpoint_url(PATH_INFO, "")?;
        self.get(url).await
    }

    /// Submit a host for assessment (or fetch its cached/running one)
    ///
    /// The returned handle polls the same assessment. It keeps this response
    /// (see [`AnalyzeProgress::take_submitted`]) and its status.
    pub async fn analyze(&self, host: &str, params: AnalyzeParams) -> Result<AnalyzeProgress<'_, S>> {
        params.validate()?;

        let report = self.fetch_host(host, &params).await?;
        debug!("Analyze {}: status {}", host, report.status());

        let mut progress = self.track(host, params);
        progress.record_submission(report);
        Ok(progress)
    }

    /// Handle for an assessment that is already running, without any request
    pub fn track(&self, host: &str, params: AnalyzeParams) -> AnalyzeProgress<'_, S> {
        AnalyzeProgress::new(self, host, params.for_polling())
    }

    pub(crate) async fn fetch_host(&self, host: &str, params: &AnalyzeParams) -> Result<S::Host> {
        let url = self.endpoint_url(PATH_ANALYZE, &query::analyze_query(host, params))?;
        self.get(url).await
    }

    /// Unguarded getEndpointData call; callers go through
    /// [`AnalyzeProgress::detailed_info`]
    pub(crate) async fn endpoint_data(&self, host: &str, ip: &str) -> Result<S::Endpoint> {
        let url = self.endpoint_url(PATH_ENDPOINT_DATA, &query::endpoint_query(host, ip))?;
        self.get(url).await
    }

    fn endpoint_url(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = self.api_root.join(path)?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Send one GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            debug!("GET {} returned {}", url, status);
            return Err(LabError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// User-Agent sent with every request
fn user_agent(app: &str, version: &str) -> String {
    let platform = format!(
        "rust; {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );

    if !app.is_empty() && !version.is_empty() {
        format!(
            "{}/{} {}/{} ({})",
            app, version, USER_AGENT_PRODUCT, VERSION, platform
        )
    } else {
        format!("{}/{} ({})", USER_AGENT_PRODUCT, VERSION, platform)
    }
}
