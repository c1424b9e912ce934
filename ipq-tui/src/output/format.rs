//! 输出格式
//!
//! - Text:  人类可读文本
//! - JSON:  机器可读，便于配合 jq
//! - YAML:  机器可读，更易阅读
//! - Quiet: 仅地址，便于管道，例如 `ipq google.com -q | xargs ping`

use anyhow::Result;
use ipq_core::utils::classify;
use ipq_core::QueryReport;

use super::Styles;
use crate::cli::OutputFormat;

/// Render one report in `format`. `Tui` falls back to text.
pub fn render(
    report: &QueryReport,
    format: OutputFormat,
    detail: bool,
    styles: Styles,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Quiet => render_quiet(report),
        OutputFormat::Text | OutputFormat::Tui => render_text(report, detail, styles),
    })
}

/// Render several reports. JSON and YAML emit a single array; the line
/// formats separate targets with a blank line.
pub fn render_batch(
    reports: &[QueryReport],
    format: OutputFormat,
    detail: bool,
    styles: Styles,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(reports)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(reports)?),
        OutputFormat::Quiet => Ok(reports.iter().map(render_quiet).collect()),
        OutputFormat::Text | OutputFormat::Tui => Ok(reports
            .iter()
            .map(|report| render_text(report, detail, styles))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_quiet(report: &QueryReport) -> String {
    report
        .usable_addresses()
        .map(|ip| format!("{ip}\n"))
        .collect()
}

fn render_text(report: &QueryReport, detail: bool, styles: Styles) -> String {
    let mut out = String::new();
    out.push_str(&format!("Target: {}\n", report.target));
    if let Some(cname) = &report.cname {
        out.push_str(&format!("CNAME: {cname}\n"));
    }
    out.push_str(&format!("IPv4: {}\n", format_ip(&report.ipv4, report, styles)));
    out.push_str(&format!("IPv6: {}\n", format_ip(&report.ipv6, report, styles)));

    if !detail {
        return out;
    }

    if let Some(geo) = &report.detail {
        out.push_str("---\n");
        out.push_str(&format!("ISP: {}\n", or_unknown(&geo.isp)));
        out.push_str(&format!(
            "Location: {}\n",
            geo.location().unwrap_or_else(|| "(unknown)".to_string())
        ));
        out.push_str(&format!(
            "Mobile: {} | Proxy: {} | Hosting: {}\n",
            yes_no(geo.mobile, styles),
            yes_no(geo.proxy, styles),
            yes_no(geo.hosting, styles)
        ));
    } else if let Some(error) = &report.detail_error {
        out.push_str("---\n");
        out.push_str(&styles.warning(&format!("Detail unavailable: {error}")));
        out.push('\n');
    }
    out
}

fn format_ip(value: &str, report: &QueryReport, styles: Styles) -> String {
    if report.usable_addresses().any(|ip| ip == value) {
        format!("{value} [{}]", classify::classify(value))
    } else {
        styles.hint("-")
    }
}

fn yes_no(value: bool, styles: Styles) -> String {
    if value {
        styles.success("Yes")
    } else {
        "No".to_string()
    }
}

fn or_unknown(text: &str) -> &str {
    if text.trim().is_empty() {
        "(unknown)"
    } else {
        text
    }
}
