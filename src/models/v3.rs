// SSL Labs API v3 response schema
//
// v3 moves certificates to the host record (`Host::certs`) and refers to them
// by id from each endpoint's certificate chains. Cipher suites are grouped per
// protocol.

use super::common::{DrownHost, HpkpPolicy, HstsPolicy, HstsPreload, Pin, Protocol, SimClient};
use super::status::{
    AssessmentStatus, BleichenbacherStatus, LuckyMinus20Status, OpenSslCcsStatus,
    PaddingOracleStatus, PoodleTlsStatus, ProtocolIntolerance, RevocationStatus,
    TicketbleedStatus,
};
use serde::{Deserialize, Serialize};

/// Host assessment, returned by the `analyze` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Host {
    pub host: String,
    pub port: i32,
    pub protocol: String,
    pub is_public: bool,
    pub status: AssessmentStatus,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status_message: String,
    /// Milliseconds since 1970
    pub start_time: i64,
    /// Milliseconds since 1970
    pub test_time: i64,
    pub engine_version: String,
    pub criteria_version: String,
    /// When cached results expire, in milliseconds since 1970
    pub cache_expiry_time: i64,
    /// Hostnames found in the certificates, for the certHostnames crawl
    pub cert_hostnames: Vec<String>,
    pub endpoints: Vec<Endpoint>,
    /// Every certificate seen on any endpoint
    pub certs: Vec<Cert>,
}

impl Host {
    pub fn endpoint(&self, ip: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.ip_address == ip)
    }

    pub fn cert(&self, id: &str) -> Option<&Cert> {
        self.certs.iter().find(|c| c.id == id)
    }

    /// Certificates of a chain, in chain order; unknown ids are skipped
    pub fn chain_certs<'a>(&'a self, chain: &'a CertificateChain) -> impl Iterator<Item = &'a Cert> {
        chain.cert_ids.iter().filter_map(move |id| self.cert(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoint {
    pub ip_address: String,
    pub server_name: String,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub status_message: String,
    pub status_details: String,
    pub status_details_message: String,
    pub grade: String,
    pub grade_trust_ignored: String,
    /// Grade under the next criteria version, when announced
    pub future_grade: String,
    pub has_warnings: bool,
    pub is_exceptional: bool,
    pub progress: i32,
    pub duration: i64,
    pub eta: i64,
    pub delegation: i32,
    pub details: Option<EndpointDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointDetails {
    pub host_start_time: i64,
    pub cert_chains: Vec<CertificateChain>,
    pub protocols: Vec<Protocol>,
    /// Suites, one group per protocol
    pub suites: Vec<ProtocolSuites>,
    /// Suites offered to clients without SNI, when they differ
    pub no_sni_suites: Option<ProtocolSuites>,
    pub named_groups: Option<NamedGroups>,
    pub server_signature: String,
    pub prefix_delegation: bool,
    pub non_prefix_delegation: bool,
    pub vuln_beast: bool,
    pub reneg_support: i32,
    pub session_resumption: i32,
    pub compression_methods: i32,
    pub supports_npn: bool,
    pub npn_protocols: String,
    pub supports_alpn: bool,
    /// Space separated list
    pub alpn_protocols: String,
    pub session_tickets: i32,
    pub ocsp_stapling: bool,
    pub stapling_revocation_status: RevocationStatus,
    pub stapling_revocation_error_message: String,
    pub sni_required: bool,
    pub http_status_code: i32,
    pub http_forwarding: String,
    pub supports_rc4: bool,
    pub rc4_with_modern: bool,
    pub rc4_only: bool,
    pub forward_secrecy: i32,
    #[serde(rename = "supportsCBC")]
    pub supports_cbc: bool,
    pub protocol_intolerance: ProtocolIntolerance,
    pub misc_intolerance: i32,
    pub sims: Option<SimDetails>,
    pub heartbleed: bool,
    pub heartbeat: bool,
    pub open_ssl_ccs: OpenSslCcsStatus,
    #[serde(rename = "openSSLLuckyMinus20")]
    pub open_ssl_lucky_minus20: LuckyMinus20Status,
    pub ticketbleed: TicketbleedStatus,
    /// ROBOT
    pub bleichenbacher: BleichenbacherStatus,
    pub zombie_poodle: PaddingOracleStatus,
    pub golden_doodle: PaddingOracleStatus,
    pub zero_length_padding_oracle: PaddingOracleStatus,
    pub sleeping_poodle: PaddingOracleStatus,
    pub poodle: bool,
    pub poodle_tls: PoodleTlsStatus,
    pub fallback_scsv: bool,
    pub freak: bool,
    pub has_sct: i32,
    pub dh_primes: Vec<String>,
    pub dh_uses_known_primes: i32,
    pub dh_ys_reuse: bool,
    pub ecdh_parameter_reuse: bool,
    pub logjam: bool,
    pub cha_cha20_preference: bool,
    pub hsts_policy: Option<HstsPolicy>,
    pub hsts_preloads: Vec<HstsPreload>,
    pub hpkp_policy: Option<HpkpPolicy>,
    pub hpkp_ro_policy: Option<HpkpPolicy>,
    pub static_pkp_policy: Option<StaticPkpPolicy>,
    pub http_transactions: Vec<HttpTransaction>,
    pub drown_hosts: Vec<DrownHost>,
    pub drown_errors: bool,
    pub drown_vulnerable: bool,
    #[serde(rename = "implementsTLS13MandatoryCS")]
    pub implements_tls13_mandatory_cs: bool,
    /// 0-RTT: -1 test failed, 0 disabled, 1 enabled
    #[serde(rename = "zeroRTTEnabled")]
    pub zero_rtt_enabled: i32,
}

impl EndpointDetails {
    /// Suites negotiated for the given protocol id (e.g. 0x0303)
    pub fn suites_for(&self, protocol_id: i32) -> Option<&ProtocolSuites> {
        self.suites.iter().find(|s| s.protocol == protocol_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cert {
    /// SHA-256 hash of the raw certificate, used as reference from chains
    pub id: String,
    pub subject: String,
    pub serial_number: String,
    pub common_names: Vec<String>,
    pub alt_names: Vec<String>,
    pub not_before: i64,
    pub not_after: i64,
    pub issuer_subject: String,
    pub sig_alg: String,
    pub revocation_info: i32,
    #[serde(rename = "crlURIs")]
    pub crl_uris: Vec<String>,
    #[serde(rename = "ocspURIs")]
    pub ocsp_uris: Vec<String>,
    pub revocation_status: RevocationStatus,
    pub crl_revocation_status: RevocationStatus,
    pub ocsp_revocation_status: RevocationStatus,
    /// CAA record found in DNS
    pub dns_caa: bool,
    pub caa_policy: Option<CaaPolicy>,
    pub must_staple: bool,
    pub sgc: i32,
    #[serde(deserialize_with = "crate::models::null_as_default")]
    pub validation_type: String,
    pub issues: i32,
    pub sct: bool,
    pub sha1_hash: String,
    pub sha256_hash: String,
    pub pin_sha256: String,
    pub key_alg: String,
    pub key_size: i32,
    pub key_strength: i32,
    /// Key generated with the Debian weak RNG
    pub key_known_debian_insecure: bool,
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaaPolicy {
    pub policy_hostname: String,
    pub caa_records: Vec<CaaRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaaRecord {
    pub tag: String,
    pub value: String,
    pub flags: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificateChain {
    pub id: String,
    /// Ids into `Host::certs`, leaf first
    pub cert_ids: Vec<String>,
    pub trust_paths: Vec<TrustPath>,
    pub issues: i32,
    /// Chain served to clients without SNI
    pub no_sni: bool,
}

impl CertificateChain {
    /// Trusted by at least one root store on at least one path
    pub fn is_trusted(&self) -> bool {
        self.trust_paths
            .iter()
            .any(|p| p.trust.iter().any(|t| t.is_trusted))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrustPath {
    pub cert_ids: Vec<String>,
    pub trust: Vec<Trust>,
    pub is_pinned: bool,
    pub matched_pins: i32,
    pub un_matched_pins: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trust {
    /// e.g. Mozilla, Apple, Android, Java, Windows
    pub root_store: String,
    pub is_trusted: bool,
    pub trust_error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolSuites {
    /// Protocol id these suites were negotiated with
    pub protocol: i32,
    pub list: Vec<Suite>,
    pub preference: bool,
    pub cha_cha20_preference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suite {
    pub id: i32,
    pub name: String,
    pub cipher_strength: i32,
    /// Key exchange: RSA, DH or ECDH
    pub kx_type: String,
    pub kx_strength: i32,
    pub dh_p: i32,
    pub dh_g: i32,
    pub dh_ys: i32,
    pub named_group_bits: i32,
    pub named_group_id: i32,
    pub named_group_name: String,
    pub q: Option<i32>,
}

impl Suite {
    pub fn is_insecure(&self) -> bool {
        self.q == Some(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedGroups {
    pub list: Vec<NamedGroup>,
    pub preference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedGroup {
    pub id: i32,
    pub name: String,
    pub bits: i32,
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
    /// Zero on success; see `error_message` otherwise
    pub error_code: i32,
    pub error_message: String,
    pub attempts: i32,
    pub cert_chain_id: String,
    pub protocol_id: i32,
    pub suite_id: i32,
    pub suite_name: String,
    pub kx_type: String,
    pub kx_strength: i32,
    pub dh_bits: i32,
    pub dh_p: i32,
    pub dh_g: i32,
    pub dh_ys: i32,
    pub named_group_bits: i32,
    pub named_group_id: i32,
    pub named_group_name: String,
    pub alert_type: i32,
    pub alert_code: i32,
    pub key_alg: String,
    pub key_size: i32,
    pub sig_alg: String,
}

impl Simulation {
    pub fn succeeded(&self) -> bool {
        self.error_code == 0
    }
}

/// Browser-shipped (static) public key pinning policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticPkpPolicy {
    pub status: String,
    pub error: String,
    pub include_sub_domains: bool,
    pub report_uri: String,
    pub pins: Vec<Pin>,
    pub matched_pins: Vec<Pin>,
    pub forbidden_pins: Vec<Pin>,
    pub matched_forbidden_pins: Vec<Pin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpTransaction {
    pub request_url: String,
    pub status_code: i32,
    pub request_line: String,
    pub request_headers: Vec<String>,
    pub response_line: String,
    pub response_headers_raw: Vec<String>,
    pub response_headers: Vec<HttpHeader>,
    /// Server misbehaved on an unusual request
    pub fragile_server: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}

impl HttpTransaction {
    /// First response header with this name, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
