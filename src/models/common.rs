// Records shared by the v2 and v3 API schemas

use super::status::{DrownStatus, HpkpStatus, HstsStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service availability and client quota, returned by the `info` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Info {
    /// SSL Labs software version (e.g. "1.11.14")
    pub engine_version: String,

    /// Rating criteria version (e.g. "2009f")
    pub criteria_version: String,

    /// Maximum number of concurrent assessments this client may start
    pub max_assessments: i32,

    /// Number of ongoing assessments submitted by this client
    pub current_assessments: i32,

    /// Cool-off period in milliseconds after each new assessment; submitting
    /// earlier yields a 429
    pub new_assessment_cool_off: i64,

    /// Public and private ("[Private]" prefixed) service messages
    pub messages: Vec<String>,

    /// Per-client assessment limit (v2 only)
    pub client_max_assessments: i32,
}

impl Info {
    /// How many more assessments may be started right now
    pub fn available_assessments(&self) -> i32 {
        (self.max_assessments - self.current_assessments).max(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Protocol {
    /// Protocol version number, e.g. 0x0303 for TLS 1.2
    pub id: i32,
    /// "SSL" or "TLS"
    pub name: String,
    /// Protocol version, e.g. "1.2"
    pub version: String,
    /// Some servers enable SSLv2 with every SSLv2 suite disabled
    pub v2_suites_disabled: bool,
    /// 0 if the protocol is insecure, null otherwise
    pub q: Option<i32>,
}

impl Protocol {
    pub fn is_insecure(&self) -> bool {
        self.q == Some(0)
    }

    /// "TLS 1.2" style label
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// Client used in a handshake simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimClient {
    pub id: i32,
    pub name: String,
    pub platform: String,
    pub version: String,
    /// Considered representative of modern browsers
    pub is_reference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HstsPolicy {
    /// max-age SSL Labs considers sufficiently large
    #[serde(rename = "LONG_MAX_AGE")]
    pub long_max_age: i64,
    /// Raw Strict-Transport-Security header, if present
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub header: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status: HstsStatus,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub max_age: i64,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub include_sub_domains: bool,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub preload: bool,
    pub directives: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HstsPreload {
    pub source: String,
    pub hostname: String,
    /// Preload status: error, unknown, present or absent
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub error: String,
    /// Time the preload list was retrieved, in milliseconds since 1970
    pub source_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HpkpPolicy {
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub header: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status: HpkpStatus,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub max_age: i64,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub include_sub_domains: bool,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub report_uri: String,
    pub pins: Vec<Pin>,
    pub matched_pins: Vec<Pin>,
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pin {
    pub hash_function: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directive {
    pub name: String,
    pub value: String,
}

/// Server sharing the assessed server's RSA key or hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrownHost {
    pub ip: String,
    pub port: i32,
    /// Export cipher suites detected
    pub export: bool,
    /// Vulnerable OpenSSL version detected
    pub special: bool,
    pub sslv2: bool,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status: DrownStatus,
}

impl DrownHost {
    /// The host enables SSLv2 and therefore exposes the shared key
    pub fn is_exposing(&self) -> bool {
        self.sslv2
            && matches!(
                self.status,
                DrownStatus::KeyMatch | DrownStatus::HostnameMatch
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_available_assessments() {
        let info = Info {
            max_assessments: 25,
            current_assessments: 3,
            ..Default::default()
        };
        assert_eq!(info.available_assessments(), 22);

        let saturated = Info {
            max_assessments: 1,
            current_assessments: 4,
            ..Default::default()
        };
        assert_eq!(saturated.available_assessments(), 0);
    }

    #[test]
    fn test_protocol_q_null_vs_zero() {
        let secure: Protocol =
            serde_json::from_str(r#"{"id":771,"name":"TLS","version":"1.2"}"#).unwrap();
        assert!(!secure.is_insecure());
        assert_eq!(secure.label(), "TLS 1.2");

        let insecure: Protocol =
            serde_json::from_str(r#"{"id":768,"name":"SSL","version":"3.0","q":0}"#).unwrap();
        assert!(insecure.is_insecure());
    }

    #[test]
    fn test_hsts_long_max_age_rename() {
        let policy: HstsPolicy = serde_json::from_str(
            r#"{"LONG_MAX_AGE":15552000,"status":"present","maxAge":31536000,
                "directives":{"max-age":"31536000"}}"#,
        )
        .unwrap();
        assert_eq!(policy.long_max_age, 15552000);
        assert_eq!(policy.status, HstsStatus::Present);
        assert_eq!(policy.directives.get("max-age").map(String::as_str), Some("31536000"));
    }

    #[test]
    fn test_drown_host_exposure() {
        let host = DrownHost {
            sslv2: true,
            status: DrownStatus::KeyMatch,
            ..Default::default()
        };
        assert!(host.is_exposing());

        let checked = DrownHost {
            sslv2: false,
            status: DrownStatus::KeyMatch,
            ..Default::default()
        };
        assert!(!checked.is_exposing());
    }
}
