// Decoding tests against recorded SSL Labs API payloads
// Run with: cargo test --test decode_fixtures

use labscan::models::status::{
    BleichenbacherStatus, DrownStatus, HpkpStatus, HstsStatus, OpenSslCcsStatus, PaddingOracleStatus,
    PoodleTlsStatus, RevocationStatus, TicketbleedStatus,
};
use labscan::models::{v2, v3, AssessmentStatus, AssessmentView, EndpointView, Info};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn test_decode_info() {
    let info: Info = serde_json::from_str(&fixture("info.json")).expect("info should decode");

    assert_eq!(info.engine_version, "2.2.0");
    assert_eq!(info.criteria_version, "2009q");
    assert_eq!(info.max_assessments, 25);
    assert_eq!(info.current_assessments, 2);
    assert_eq!(info.new_assessment_cool_off, 1000);
    assert_eq!(info.messages.len(), 1);
    assert_eq!(info.client_max_assessments, 0);
    assert_eq!(info.available_assessments(), 23);
}

// ============================================================================
// API v2
// ============================================================================

#[test]
fn test_decode_v2_host() {
    let host: v2::Host =
        serde_json::from_str(&fixture("v2_analyze_ready.json")).expect("v2 host should decode");

    assert_eq!(host.host, "example.com");
    assert_eq!(host.port, 443);
    assert_eq!(host.status, AssessmentStatus::Ready);
    assert_eq!(host.start_time, 1_500_000_000_000);
    assert_eq!(
        host.test_time().map(|t| t.timestamp()),
        Some(1_500_000_090)
    );
    assert_eq!(host.endpoints.len(), 1);

    let endpoint = host.endpoint("93.184.216.34").expect("endpoint should exist");
    assert_eq!(endpoint.grade, "B");
    assert_eq!(endpoint.server_name, "edge.example.com");
    assert_eq!(endpoint.progress, 100);
}

#[test]
fn test_decode_v2_details() {
    let host: v2::Host = serde_json::from_str(&fixture("v2_analyze_ready.json")).unwrap();
    let details = host.endpoints[0].details.as_ref().expect("details requested with all=on");

    let key = details.key.as_ref().unwrap();
    assert_eq!(key.alg, "RSA");
    assert_eq!(key.size, 2048);
    assert_eq!(key.q, None);

    let cert = details.cert.as_ref().unwrap();
    assert_eq!(cert.common_names, vec!["www.example.org"]);
    assert_eq!(cert.alt_names.len(), 3);
    assert_eq!(cert.crl_uris, vec!["http://crl3.digicert.com/sha2-ha-server-g4.crl"]);
    assert_eq!(cert.ocsp_uris, vec!["http://ocsp.digicert.com"]);
    assert_eq!(cert.revocation_status, RevocationStatus::NotRevoked);

    let chain = details.chain.as_ref().unwrap();
    assert_eq!(chain.certs.len(), 1);
    assert!(chain.certs[0].raw.starts_with("-----BEGIN CERTIFICATE-----"));

    assert_eq!(details.protocols.len(), 4);
    assert!(details.protocols[3].is_insecure());
    assert!(!details.protocols[2].is_insecure());

    let suites = details.suites.as_ref().unwrap();
    assert!(suites.preference);
    assert_eq!(suites.list[0].ecdh_bits, 256);
    assert_eq!(suites.list[1].q, Some(0));

    let sims = details.sims.as_ref().unwrap();
    assert_eq!(sims.results.len(), 2);
    assert!(sims.results[0].succeeded());
    assert!(!sims.results[1].succeeded());
    assert_eq!(sims.results[1].client.as_ref().unwrap().platform, "XP");

    assert_eq!(details.open_ssl_ccs, OpenSslCcsStatus::NotVulnerable);
    assert_eq!(details.poodle_tls, PoodleTlsStatus::NotVulnerable);
    assert!(details.poodle);
    assert!(details.vuln_beast);
    assert!(details.protocol_intolerance.is_empty());

    let hsts = details.hsts_policy.as_ref().unwrap();
    assert_eq!(hsts.status, HstsStatus::Absent);
    assert_eq!(hsts.long_max_age, 15_552_000);
    assert_eq!(details.hpkp_policy.as_ref().unwrap().status, HpkpStatus::Absent);
    assert_eq!(details.hsts_preloads[0].source, "Chrome");
}

#[test]
fn test_v2_summary_findings() {
    let host: v2::Host = serde_json::from_str(&fixture("v2_analyze_ready.json")).unwrap();
    let summaries = host.endpoint_summaries();

    assert_eq!(summaries.len(), 1);
    let names: Vec<_> = summaries[0].findings.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["POODLE (SSLv3)", "BEAST", "RC4 supported"]);
    assert_eq!(summaries[0].protocols, vec!["TLS 1.0", "TLS 1.1", "TLS 1.2", "SSL 3.0"]);
}

#[test]
fn test_v2_reencode_keeps_wire_names() {
    let host: v2::Host = serde_json::from_str(&fixture("v2_analyze_ready.json")).unwrap();
    let json = serde_json::to_value(&host).unwrap();

    let details = &json["endpoints"][0]["details"];
    assert_eq!(details["openSSLLuckyMinus20"], 1);
    assert_eq!(details["cert"]["crlURIs"][0], "http://crl3.digicert.com/sha2-ha-server-g4.crl");
    assert_eq!(details["hstsPolicy"]["LONG_MAX_AGE"], 15_552_000);
    assert_eq!(json["status"], "READY");
    // Unknown fields are dropped on decode
    assert!(details.get("futureField").is_none());
}

// ============================================================================
// API v3
// ============================================================================

#[test]
fn test_decode_v3_host() {
    let host: v3::Host =
        serde_json::from_str(&fixture("v3_analyze_ready.json")).expect("v3 host should decode");

    assert_eq!(host.status, AssessmentStatus::Ready);
    assert_eq!(host.cache_expiry_time, 1_700_003_720_000);
    assert_eq!(host.cert_hostnames, vec!["www.example.com"]);
    assert_eq!(host.endpoints.len(), 2);
    assert_eq!(host.certs.len(), 2);

    let first = &host.endpoints[0];
    assert_eq!(first.grade, "A+");
    assert_eq!(first.future_grade, "A+");
    assert!(first.is_exceptional);
    assert!(first.details.is_none());

    let second = host
        .endpoint("2606:2800:220:1:248:1893:25c8:1946")
        .expect("IPv6 endpoint should exist");
    assert!(second.grade.is_empty());
    assert_eq!(second.status_message, "Unable to connect to the server");

    let leaf = &host.certs[0];
    assert_eq!(leaf.serial_number, "075bcef30689c8addf13e51af4afe187");
    assert_eq!(leaf.key_alg, "EC");
    assert!(leaf.dns_caa);
    let caa = leaf.caa_policy.as_ref().unwrap();
    assert_eq!(caa.caa_records[0].tag, "issue");
    assert_eq!(caa.caa_records[0].value, "digicert.com");
    assert!(!leaf.must_staple);
}

#[test]
fn test_decode_v3_endpoint_details() {
    let endpoint: v3::Endpoint =
        serde_json::from_str(&fixture("v3_endpoint.json")).expect("v3 endpoint should decode");
    let details = endpoint.details.as_ref().expect("getEndpointData carries details");

    assert_eq!(details.cert_chains.len(), 1);
    let chain = &details.cert_chains[0];
    assert_eq!(chain.cert_ids.len(), 2);
    assert!(chain.is_trusted());
    assert_eq!(chain.trust_paths[0].trust[1].root_store, "Java");
    assert!(!chain.trust_paths[0].trust[1].is_trusted);

    let tls12 = details.suites_for(771).expect("TLS 1.2 suites");
    assert_eq!(tls12.list.len(), 2);
    assert!(tls12.cha_cha20_preference);
    assert_eq!(tls12.list[0].named_group_name, "secp256r1");
    assert_eq!(tls12.list[1].q, Some(1));
    assert!(details.suites_for(768).is_none());

    let groups = details.named_groups.as_ref().unwrap();
    assert_eq!(groups.list[0].name, "x25519");

    assert_eq!(details.alpn_protocols, "h2 http/1.1");
    assert!(details.supports_cbc);
    assert!(details.implements_tls13_mandatory_cs);
    assert_eq!(details.zero_rtt_enabled, 0);
    assert_eq!(details.stapling_revocation_status, RevocationStatus::NotRevoked);

    assert_eq!(details.ticketbleed, TicketbleedStatus::NotVulnerable);
    assert_eq!(details.bleichenbacher, BleichenbacherStatus::NotVulnerable);
    assert_eq!(details.golden_doodle, PaddingOracleStatus::NotVulnerable);

    let sim = &details.sims.as_ref().unwrap().results[0];
    assert_eq!(sim.suite_name, "TLS_AES_128_GCM_SHA256");
    assert_eq!(sim.cert_chain_id, chain.id);
    assert!(sim.client.as_ref().unwrap().is_reference);

    let hsts = details.hsts_policy.as_ref().unwrap();
    assert_eq!(hsts.status, HstsStatus::Present);
    assert!(hsts.include_sub_domains && hsts.preload);
    assert_eq!(hsts.directives.len(), 3);

    let transaction = &details.http_transactions[0];
    assert_eq!(transaction.status_code, 200);
    assert_eq!(
        transaction.header("strict-transport-security"),
        Some("max-age=31536000; includeSubDomains; preload")
    );

    assert_eq!(details.static_pkp_policy.as_ref().unwrap().status, "absent");
}

#[test]
fn test_v3_chain_resolves_host_certs() {
    let host: v3::Host = serde_json::from_str(&fixture("v3_analyze_ready.json")).unwrap();
    let endpoint: v3::Endpoint = serde_json::from_str(&fixture("v3_endpoint.json")).unwrap();
    let chain = &endpoint.details.as_ref().unwrap().cert_chains[0];

    let subjects: Vec<_> = host
        .chain_certs(chain)
        .map(|c| c.common_names[0].as_str())
        .collect();
    assert_eq!(
        subjects,
        vec!["www.example.org", "DigiCert Global G2 TLS RSA SHA256 2020 CA1"]
    );
}

#[test]
fn test_v3_clean_endpoint_has_no_findings() {
    let endpoint: v3::Endpoint = serde_json::from_str(&fixture("v3_endpoint.json")).unwrap();
    let summary = endpoint.summary();

    assert!(summary.has_details);
    assert!(summary.findings.is_empty());
    assert_eq!(summary.protocols, vec!["TLS 1.2", "TLS 1.3"]);
}

#[test]
fn test_missing_fields_default() {
    let host: v3::Host =
        serde_json::from_str(r#"{"host":"example.com","status":"DNS"}"#).unwrap();
    assert_eq!(host.status, AssessmentStatus::Dns);
    assert!(host.endpoints.is_empty());
    assert!(host.certs.is_empty());
    assert_eq!(host.port, 0);
    assert_eq!(host.start_time(), None);
}

// ============================================================================
// Nullable fields
// ============================================================================

#[test]
fn test_null_fields_decode_to_defaults() {
    let endpoint: v2::Endpoint = serde_json::from_str(&fixture("v2_endpoint_nulls.json"))
        .expect("nulls in documented nullable fields should decode");

    assert_eq!(endpoint.ip_address, "203.0.113.7");
    assert_eq!(endpoint.status_message, "");
    assert_eq!(endpoint.grade, "C");

    let details = endpoint.details.as_ref().expect("details should be present");
    let cert = details.cert.as_ref().expect("cert should be present");
    assert_eq!(cert.validation_type, "");
    assert_eq!(cert.revocation_status, RevocationStatus::NotChecked);
    assert_eq!(details.open_ssl_ccs, OpenSslCcsStatus::Unknown);
    assert_eq!(details.poodle_tls, PoodleTlsStatus::TlsNotSupported);

    let hsts = details.hsts_policy.as_ref().expect("hsts policy should be present");
    assert_eq!(hsts.status, HstsStatus::Absent);
    assert_eq!(hsts.long_max_age, 15_552_000);
    assert_eq!(hsts.max_age, 0);
    assert!(!hsts.include_sub_domains);
    assert!(!hsts.preload);
    assert!(hsts.error.is_empty());
    assert!(hsts.header.is_empty());
    assert_eq!(details.hsts_preloads[0].error, "");

    let hpkp = details.hpkp_policy.as_ref().expect("hpkp policy should be present");
    assert_eq!(hpkp.status, HpkpStatus::Absent);
    assert_eq!(hpkp.max_age, 0);
    assert!(hpkp.report_uri.is_empty());

    assert_eq!(details.drown_hosts[0].status, DrownStatus::Unknown);
    assert!(!details.drown_hosts[0].is_exposing());
}

#[test]
fn test_null_status_decodes_to_empty() {
    let host: v3::Host = serde_json::from_str(
        r#"{"host":"example.com","status":null,"statusMessage":null,"endpoints":[]}"#,
    )
    .unwrap();
    assert_eq!(host.status, AssessmentStatus::default());
    assert!(!host.status.is_finished());
    assert_eq!(host.status_message, "");
}
