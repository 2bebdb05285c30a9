// Terminal summaries for SSL Labs assessments

use crate::models::{AssessmentStatus, AssessmentView, EndpointSummary, Info, Severity};
use colored::*;
use std::fmt::Write;

/// Grade colored by how good it is
fn colorize_grade(grade: &str) -> ColoredString {
    match grade.chars().next() {
        Some('A') => grade.green().bold(),
        Some('B') => grade.yellow().bold(),
        Some('C') | Some('D') | Some('E') => grade.bright_red().bold(),
        Some(_) => grade.red().bold(),
        None => "-".dimmed(),
    }
}

fn colorize_severity(severity: Severity) -> ColoredString {
    let label = format!("{:?}", severity).to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.cyan(),
        Severity::Info => label.normal(),
    }
}

fn colorize_status(status: &AssessmentStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        AssessmentStatus::Ready => label.green(),
        AssessmentStatus::Error => label.red().bold(),
        _ => label.yellow(),
    }
}

/// Service info block printed by `--info`
pub fn render_info(info: &Info) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "SSL Labs Service Info".cyan().bold());
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "Engine version:      {}", info.engine_version);
    let _ = writeln!(out, "Criteria version:    {}", info.criteria_version);
    let _ = writeln!(
        out,
        "Assessments:         {}/{} in use",
        info.current_assessments, info.max_assessments
    );
    let _ = writeln!(
        out,
        "Cool-off:            {} ms",
        info.new_assessment_cool_off
    );
    for message in &info.messages {
        let _ = writeln!(out, "  {} {}", "!".yellow().bold(), message);
    }
    out
}

/// Report for one host; `details` replaces the endpoint list of the analyze
/// record when getEndpointData results were fetched
pub fn render_assessment<H: AssessmentView + ?Sized>(report: &H, details: &[EndpointSummary]) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Host: {}", report.host_name().green().bold());
    let _ = writeln!(out, "Status: {}", colorize_status(report.status()));
    if !report.status_message().is_empty() && !report.status().is_ready() {
        let _ = writeln!(out, "Message: {}", report.status_message());
    }
    if let Some(tested) = report.test_time() {
        let _ = writeln!(out, "Tested: {}", tested.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    let _ = writeln!(out, "{}", "═".repeat(60));

    let summaries = if details.is_empty() {
        report.endpoint_summaries()
    } else {
        details.to_vec()
    };

    if summaries.is_empty() {
        let _ = writeln!(out, "  (no endpoints)");
    }

    for endpoint in &summaries {
        render_endpoint(&mut out, endpoint);
    }

    out
}

fn render_endpoint(out: &mut String, endpoint: &EndpointSummary) {
    let name = if endpoint.server_name.is_empty() {
        String::new()
    } else {
        format!(" ({})", endpoint.server_name)
    };
    let _ = writeln!(
        out,
        "  {}{}  grade {}",
        endpoint.ip_address.bold(),
        name,
        colorize_grade(&endpoint.grade)
    );

    if !endpoint.grade_trust_ignored.is_empty() && endpoint.grade_trust_ignored != endpoint.grade {
        let _ = writeln!(
            out,
            "    grade if trust ignored: {}",
            colorize_grade(&endpoint.grade_trust_ignored)
        );
    }
    if endpoint.has_warnings {
        let _ = writeln!(out, "    {}", "has warnings".yellow());
    }
    if endpoint.is_exceptional {
        let _ = writeln!(out, "    {}", "exceptional configuration".green());
    }
    if endpoint.grade.is_empty() && !endpoint.status_message.is_empty() {
        let _ = writeln!(out, "    {}", endpoint.status_message);
    }

    if !endpoint.protocols.is_empty() {
        let _ = writeln!(out, "    protocols: {}", endpoint.protocols.join(", "));
    }

    if endpoint.has_details {
        if endpoint.findings.is_empty() {
            let _ = writeln!(out, "    {}", "no known vulnerabilities reported".green());
        }
        for finding in &endpoint.findings {
            let cve = finding.cve.map(|c| format!(" [{}]", c)).unwrap_or_default();
            let _ = writeln!(
                out,
                "    {:<8} {}{}",
                colorize_severity(finding.severity),
                finding.name,
                cve
            );
        }
    }
}
