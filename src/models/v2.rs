// SSL Labs API v2 response schema
//
// Field names follow the wire format; see ssllabs-api-docs.md (v2) for the
// meaning of the integer-coded fields that are kept as plain numbers.

use super::common::{DrownHost, HpkpPolicy, HstsPolicy, HstsPreload, Protocol, SimClient};
use super::status::{
    AssessmentStatus, LuckyMinus20Status, OpenSslCcsStatus, PoodleTlsStatus, ProtocolIntolerance,
    RevocationStatus,
};
use serde::{Deserialize, Serialize};

/// Host assessment, returned by the `analyze` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Host {
    /// Hostname or IP address being assessed
    pub host: String,
    pub port: i32,
    /// Protocol, e.g. HTTP
    pub protocol: String,
    /// Listed on the public SSL Labs assessment boards
    pub is_public: bool,
    pub status: AssessmentStatus,
    /// Error message when status is ERROR
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status_message: String,
    /// Milliseconds since 1970
    pub start_time: i64,
    /// Milliseconds since 1970
    pub test_time: i64,
    pub engine_version: String,
    pub criteria_version: String,
    pub endpoints: Vec<Endpoint>,
}

/// One IP address of the assessed host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoint {
    pub ip_address: String,
    /// Reverse DNS name
    pub server_name: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status_message: String,
    /// Code of the operation currently in progress
    pub status_details: String,
    pub status_details_message: String,
    /// A+, A-, A-F, T (no trust) or M (name mismatch)
    pub grade: String,
    /// Grade if trust issues are ignored
    pub grade_trust_ignored: String,
    pub has_warnings: bool,
    pub is_exceptional: bool,
    /// 0-100, or -1 when not yet started
    pub progress: i32,
    /// Milliseconds
    pub duration: i64,
    /// Seconds until completion
    pub eta: i64,
    /// Domain name delegation with and without the www prefix
    pub delegation: i32,
    /// Present with `all=on` or from getEndpointData
    pub details: Option<EndpointDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointDetails {
    /// Should match the host's start time when results span several calls
    pub host_start_time: i64,
    pub key: Option<Key>,
    pub cert: Option<Cert>,
    pub chain: Option<Chain>,
    pub protocols: Vec<Protocol>,
    pub suites: Option<Suites>,
    /// Contents of the HTTP Server response header
    pub server_signature: String,
    pub prefix_delegation: bool,
    pub non_prefix_delegation: bool,
    pub vuln_beast: bool,
    pub reneg_support: i32,
    pub session_resumption: i32,
    pub compression_methods: i32,
    pub supports_npn: bool,
    /// Space separated list
    pub npn_protocols: String,
    pub supports_alpn: bool,
    pub session_tickets: i32,
    pub ocsp_stapling: bool,
    pub stapling_revocation_status: RevocationStatus,
    pub stapling_revocation_error_message: String,
    pub sni_required: bool,
    pub http_status_code: i32,
    /// Redirect target when the server forwards to another hostname
    pub http_forwarding: String,
    pub supports_rc4: bool,
    pub rc4_with_modern: bool,
    pub rc4_only: bool,
    pub forward_secrecy: i32,
    pub protocol_intolerance: ProtocolIntolerance,
    pub misc_intolerance: i32,
    pub sims: Option<SimDetails>,
    pub heartbleed: bool,
    pub heartbeat: bool,
    pub open_ssl_ccs: OpenSslCcsStatus,
    #[serde(rename = "openSSLLuckyMinus20")]
    pub open_ssl_lucky_minus20: LuckyMinus20Status,
    pub poodle: bool,
    pub poodle_tls: PoodleTlsStatus,
    pub fallback_scsv: bool,
    pub freak: bool,
    pub has_sct: i32,
    /// Hex-encoded DH primes
    pub dh_primes: Vec<String>,
    pub dh_uses_known_primes: i32,
    pub dh_ys_reuse: bool,
    /// DH parameters weaker than 1024 bits
    pub logjam: bool,
    pub cha_cha20_preference: bool,
    pub hsts_policy: Option<HstsPolicy>,
    pub hsts_preloads: Vec<HstsPreload>,
    pub hpkp_policy: Option<HpkpPolicy>,
    pub hpkp_ro_policy: Option<HpkpPolicy>,
    pub drown_hosts: Vec<DrownHost>,
    pub drown_errors: bool,
    pub drown_vulnerable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Key {
    /// Bits, e.g. 2048 for RSA or 256 for EC
    pub size: i32,
    /// RSA, DSA or EC
    pub alg: String,
    /// Generated with a weak RNG (blacklist match)
    pub debian_flaw: bool,
    /// Size in RSA-equivalent bits
    pub strength: i32,
    pub q: Option<i32>,
}

/// Leaf certificate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cert {
    pub subject: String,
    pub common_names: Vec<String>,
    pub alt_names: Vec<String>,
    /// Milliseconds since 1970
    pub not_before: i64,
    /// Milliseconds since 1970
    pub not_after: i64,
    pub issuer_subject: String,
    pub issuer_label: String,
    pub sig_alg: String,
    pub revocation_info: i32,
    #[serde(rename = "crlURIs")]
    pub crl_uris: Vec<String>,
    #[serde(rename = "ocspURIs")]
    pub ocsp_uris: Vec<String>,
    pub revocation_status: RevocationStatus,
    pub crl_revocation_status: RevocationStatus,
    pub ocsp_revocation_status: RevocationStatus,
    /// Server Gated Cryptography support
    pub sgc: i32,
    /// "E" for Extended Validation
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub validation_type: String,
    /// One bit per issue
    pub issues: i32,
    /// Embedded SCT present
    pub sct: bool,
    pub must_staple: i32,
    pub sha1_hash: String,
    pub pin_sha256: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub certs: Vec<ChainCert>,
    /// One bit per chain issue
    pub issues: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainCert {
    pub subject: String,
    /// User-friendly name
    pub label: String,
    pub not_before: i64,
    pub not_after: i64,
    pub issuer_subject: String,
    pub issuer_label: String,
    pub sig_alg: String,
    pub issues: i32,
    pub key_alg: String,
    pub key_size: i32,
    pub key_strength: i32,
    pub revocation_status: RevocationStatus,
    pub crl_revocation_status: RevocationStatus,
    pub ocsp_revocation_status: RevocationStatus,
    pub sha1_hash: String,
    pub pin_sha256: String,
    /// PEM-encoded certificate
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suites {
    pub list: Vec<Suite>,
    /// Server enforces its own suite preference
    pub preference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suite {
    /// RFC suite id
    pub id: i32,
    /// e.g. TLS_RSA_WITH_RC4_128_SHA
    pub name: String,
    pub cipher_strength: i32,
    pub dh_strength: i32,
    pub dh_p: i32,
    pub dh_g: i32,
    pub dh_ys: i32,
    pub ecdh_bits: i32,
    pub ecdh_strength: i32,
    pub q: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimDetails {
    pub results: Vec<Simulation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Simulation {
    pub client: Option<SimClient>,
    /// Zero on a successful handshake
    pub error_code: i32,
    pub attempts: i32,
    pub protocol_id: i32,
    pub suite_id: i32,
    pub kx_info: String,
}

impl Simulation {
    pub fn succeeded(&self) -> bool {
        self.error_code == 0
    }
}

impl Host {
    pub fn endpoint(&self, ip: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.ip_address == ip)
    }
}
