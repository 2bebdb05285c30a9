// LabScan - SSL Labs API client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! SSL Labs API Constants
//!
//! Endpoint paths, wire status strings and client defaults used across the
//! crate. Reference: https://github.com/ssllabs/ssllabs-scan/blob/master/ssllabs-api-docs-v3.md

use std::time::Duration;

// =============================================================================
// API Endpoints
// =============================================================================

/// Public SSL Labs API root; the version segment (`v2`/`v3`) is appended
pub const DEFAULT_BASE_URL: &str = "https://api.ssllabs.com/api";

/// Service availability and client quota
pub const PATH_INFO: &str = "info";

/// Assessment submission and polling
pub const PATH_ANALYZE: &str = "analyze";

/// Full results for a single endpoint
pub const PATH_ENDPOINT_DATA: &str = "getEndpointData";

// =============================================================================
// Assessment Status Strings
// =============================================================================

pub const STATUS_DNS: &str = "DNS";
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const STATUS_READY: &str = "READY";
pub const STATUS_ERROR: &str = "ERROR";

// =============================================================================
// Client Defaults
// =============================================================================

/// Product token sent in the User-Agent header
pub const USER_AGENT_PRODUCT: &str = "LabScan";

/// Crate version, reported in the User-Agent header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default application name when none is configured
pub const DEFAULT_APP_NAME: &str = "labscan";

/// Read/write timeout applied to every API request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How long an idle pooled connection is kept
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum idle connections kept per host
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 100;

/// Delay between two polls of a running assessment
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Upper bound on how long the CLI waits for one assessment
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(900);
