// LabScan - SSL Labs API client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! LabScan is a client for the SSL Labs TLS assessment API.
//! It submits hosts for analysis, polls the assessments until they finish and
//! decodes the result schema (certificate chains, protocol and cipher suite
//! support, handshake simulations and known TLS vulnerabilities) into typed
//! records for API versions 2 and 3.
//!
//! ```no_run
//! use labscan::{AnalyzeParams, Client, ClientConfig, V3};
//!
//! # async fn demo() -> labscan::Result<()> {
//! let client = Client::<V3>::connect(ClientConfig::new("my-monitor", "1.0.0")).await?;
//! let mut progress = client.analyze("example.com", AnalyzeParams::default()).await?;
//! let report = progress.info().await?;
//! if report.status.is_ready() {
//!     for endpoint in &report.endpoints {
//!         let detail = progress.detailed_info(&endpoint.ip_address).await?;
//!         println!("{} {}", detail.ip_address, detail.grade);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::client::{AnalyzeParams, AnalyzeProgress, Client};
pub use crate::config::ClientConfig;
pub use crate::error::{LabError, Result};
pub use crate::models::{ApiSchema, ApiVersion, AssessmentStatus, AssessmentView, Info, V2, V3};
