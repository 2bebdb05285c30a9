// Models module - SSL Labs response schema, per API version

pub mod common;
pub mod status;
pub mod v2;
pub mod v3;

pub use common::{DrownHost, HpkpPolicy, HstsPolicy, HstsPreload, Info, Pin, Protocol, SimClient};
pub use status::{AssessmentStatus, ProtocolIntolerance};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// SSL Labs API version
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V2,
    #[default]
    V3,
}

impl ApiVersion {
    /// Path segment under the API root
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiVersion::V2 => "v2",
            ApiVersion::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Ties an API version to the records its endpoints return
pub trait ApiSchema: Send + Sync + 'static {
    const VERSION: ApiVersion;

    /// Record returned by `analyze`
    type Host: AssessmentView + DeserializeOwned + Serialize + fmt::Debug + Clone + Send + Sync;

    /// Record returned by `getEndpointData`
    type Endpoint: EndpointView + DeserializeOwned + Serialize + fmt::Debug + Clone + Send + Sync;
}

/// API v2 marker
#[derive(Debug, Clone, Copy, Default)]
pub struct V2;

/// API v3 marker
#[derive(Debug, Clone, Copy, Default)]
pub struct V3;

impl ApiSchema for V2 {
    const VERSION: ApiVersion = ApiVersion::V2;
    type Host = v2::Host;
    type Endpoint = v2::Endpoint;
}

impl ApiSchema for V3 {
    const VERSION: ApiVersion = ApiVersion::V3;
    type Host = v3::Host;
    type Endpoint = v3::Endpoint;
}

/// Version-independent read access to a host assessment
pub trait AssessmentView {
    fn host_name(&self) -> &str;
    fn status(&self) -> &AssessmentStatus;
    fn status_message(&self) -> &str;
    fn endpoint_summaries(&self) -> Vec<EndpointSummary>;

    fn start_time(&self) -> Option<DateTime<Utc>>;
    fn test_time(&self) -> Option<DateTime<Utc>>;
}

/// Version-independent read access to one endpoint
pub trait EndpointView {
    fn summary(&self) -> EndpointSummary;
}

/// Flattened endpoint result used for reporting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointSummary {
    pub ip_address: String,
    pub server_name: String,
    pub grade: String,
    pub grade_trust_ignored: String,
    pub has_warnings: bool,
    pub is_exceptional: bool,
    pub progress: i32,
    pub status_message: String,
    /// Protocol labels, e.g. "TLS 1.2"; empty without details
    pub protocols: Vec<String>,
    /// Vulnerabilities flagged by the service; empty without details
    pub findings: Vec<Finding>,
    /// Details were present in the response
    pub has_details: bool,
}

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

/// A vulnerability the service reported for an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub name: &'static str,
    pub cve: Option<&'static str>,
    pub severity: Severity,
}

impl Finding {
    fn new(name: &'static str, cve: Option<&'static str>, severity: Severity) -> Self {
        Self {
            name,
            cve,
            severity,
        }
    }
}

/// Converts a wire timestamp (milliseconds since 1970) into a UTC time;
/// zero means "not set"
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// Decodes a JSON `null` as the field type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Findings common to both schema versions
#[allow(clippy::too_many_arguments)]
fn base_findings(
    heartbleed: bool,
    ccs: status::OpenSslCcsStatus,
    lucky_minus20: status::LuckyMinus20Status,
    poodle: bool,
    poodle_tls: status::PoodleTlsStatus,
    freak: bool,
    logjam: bool,
    drown: bool,
    beast: bool,
    rc4: bool,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    if heartbleed {
        findings.push(Finding::new("Heartbleed", Some("CVE-2014-0160"), Severity::Critical));
    }
    if ccs.is_vulnerable() {
        findings.push(Finding::new("OpenSSL CCS injection", Some("CVE-2014-0224"), Severity::High));
    }
    if lucky_minus20.is_vulnerable() {
        findings.push(Finding::new("OpenSSL padding oracle", Some("CVE-2016-2107"), Severity::High));
    }
    if poodle {
        findings.push(Finding::new("POODLE (SSLv3)", Some("CVE-2014-3566"), Severity::Medium));
    }
    if poodle_tls.is_vulnerable() {
        findings.push(Finding::new("POODLE (TLS)", Some("CVE-2014-8730"), Severity::High));
    }
    if freak {
        findings.push(Finding::new("FREAK", Some("CVE-2015-0204"), Severity::High));
    }
    if logjam {
        findings.push(Finding::new("Logjam", Some("CVE-2015-4000"), Severity::Medium));
    }
    if drown {
        findings.push(Finding::new("DROWN", Some("CVE-2016-0800"), Severity::High));
    }
    if beast {
        findings.push(Finding::new("BEAST", Some("CVE-2011-3389"), Severity::Low));
    }
    if rc4 {
        findings.push(Finding::new("RC4 supported", None, Severity::Medium));
    }
    findings
}

impl AssessmentView for v2::Host {
    fn host_name(&self) -> &str {
        &self.host
    }

    fn status(&self) -> &AssessmentStatus {
        &self.status
    }

    fn status_message(&self) -> &str {
        &self.status_message
    }

    fn endpoint_summaries(&self) -> Vec<EndpointSummary> {
        self.endpoints.iter().map(EndpointView::summary).collect()
    }

    fn start_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.start_time)
    }

    fn test_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.test_time)
    }
}

impl EndpointView for v2::Endpoint {
    fn summary(&self) -> EndpointSummary {
        let mut summary = EndpointSummary {
            ip_address: self.ip_address.clone(),
            server_name: self.server_name.clone(),
            grade: self.grade.clone(),
            grade_trust_ignored: self.grade_trust_ignored.clone(),
            has_warnings: self.has_warnings,
            is_exceptional: self.is_exceptional,
            progress: self.progress,
            status_message: self.status_message.clone(),
            ..Default::default()
        };

        if let Some(d) = &self.details {
            summary.has_details = true;
            summary.protocols = d.protocols.iter().map(Protocol::label).collect();
            summary.findings = base_findings(
                d.heartbleed,
                d.open_ssl_ccs,
                d.open_ssl_lucky_minus20,
                d.poodle,
                d.poodle_tls,
                d.freak,
                d.logjam,
                d.drown_vulnerable,
                d.vuln_beast,
                d.supports_rc4,
            );
        }

        summary
    }
}

impl AssessmentView for v3::Host {
    fn host_name(&self) -> &str {
        &self.host
    }

    fn status(&self) -> &AssessmentStatus {
        &self.status
    }

    fn status_message(&self) -> &str {
        &self.status_message
    }

    fn endpoint_summaries(&self) -> Vec<EndpointSummary> {
        self.endpoints.iter().map(EndpointView::summary).collect()
    }

    fn start_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.start_time)
    }

    fn test_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.test_time)
    }
}

impl EndpointView for v3::Endpoint {
    fn summary(&self) -> EndpointSummary {
        let mut summary = EndpointSummary {
            ip_address: self.ip_address.clone(),
            server_name: self.server_name.clone(),
            grade: self.grade.clone(),
            grade_trust_ignored: self.grade_trust_ignored.clone(),
            has_warnings: self.has_warnings,
            is_exceptional: self.is_exceptional,
            progress: self.progress,
            status_message: self.status_message.clone(),
            ..Default::default()
        };

        if let Some(d) = &self.details {
            summary.has_details = true;
            summary.protocols = d.protocols.iter().map(Protocol::label).collect();

            let mut findings = base_findings(
                d.heartbleed,
                d.open_ssl_ccs,
                d.open_ssl_lucky_minus20,
                d.poodle,
                d.poodle_tls,
                d.freak,
                d.logjam,
                d.drown_vulnerable,
                d.vuln_beast,
                d.supports_rc4,
            );
            if d.ticketbleed.is_vulnerable() {
                findings.push(Finding::new("Ticketbleed", Some("CVE-2016-9244"), Severity::High));
            }
            if d.bleichenbacher.is_vulnerable() {
                let severity = if d.bleichenbacher == status::BleichenbacherStatus::StrongOracle {
                    Severity::Critical
                } else {
                    Severity::High
                };
                findings.push(Finding::new("ROBOT", Some("CVE-2017-13099"), severity));
            }
            let padding_oracles = [
                ("Zombie POODLE", d.zombie_poodle),
                ("GOLDENDOODLE", d.golden_doodle),
                ("0-Length Padding Oracle", d.zero_length_padding_oracle),
                ("Sleeping POODLE", d.sleeping_poodle),
            ];
            for (name, result) in padding_oracles {
                if result.is_vulnerable() {
                    let severity = if result == status::PaddingOracleStatus::Exploitable {
                        Severity::High
                    } else {
                        Severity::Medium
                    };
                    findings.push(Finding::new(name, None, severity));
                }
            }
            summary.findings = findings;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_path_segment() {
        assert_eq!(ApiVersion::V2.path_segment(), "v2");
        assert_eq!(ApiVersion::V3.to_string(), "v3");
        assert_eq!(<V3 as ApiSchema>::VERSION, ApiVersion::V3);
    }

    #[test]
    fn test_millis_to_datetime() {
        assert_eq!(millis_to_datetime(0), None);
        let dt = millis_to_datetime(1_500_000_000_000).unwrap();
        assert_eq!(dt.timestamp(), 1_500_000_000);
    }

    #[test]
    fn test_v2_summary_without_details() {
        let endpoint = v2::Endpoint {
            ip_address: "192.0.2.1".to_string(),
            grade: "A".to_string(),
            progress: 100,
            ..Default::default()
        };
        let summary = endpoint.summary();
        assert_eq!(summary.grade, "A");
        assert!(!summary.has_details);
        assert!(summary.findings.is_empty());
    }

    #[test]
    fn test_v2_summary_collects_findings() {
        let endpoint = v2::Endpoint {
            ip_address: "192.0.2.1".to_string(),
            details: Some(v2::EndpointDetails {
                heartbleed: true,
                open_ssl_ccs: status::OpenSslCcsStatus::PossiblyVulnerable,
                poodle_tls: status::PoodleTlsStatus::NotVulnerable,
                ..Default::default()
            }),
            ..Default::default()
        };
        let summary = endpoint.summary();
        let names: Vec<_> = summary.findings.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Heartbleed", "OpenSSL CCS injection"]);
        assert_eq!(summary.findings[0].severity, Severity::Critical);
    }

    #[test]
    fn test_v3_summary_padding_oracles() {
        let endpoint = v3::Endpoint {
            details: Some(v3::EndpointDetails {
                bleichenbacher: status::BleichenbacherStatus::StrongOracle,
                golden_doodle: status::PaddingOracleStatus::Exploitable,
                zombie_poodle: status::PaddingOracleStatus::NotVulnerable,
                ..Default::default()
            }),
            ..Default::default()
        };
        let findings = endpoint.summary().findings;
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].name, "ROBOT");
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[1].name, "GOLDENDOODLE");
        assert_eq!(findings[1].severity, Severity::High);
    }
}
