//! 批量处理
//!
//! ```text
//! ipq -f ips.txt
//! cat ips.txt | ipq --batch
//! grep "8.8" ips.txt | ipq --batch -o json
//! ```
//!
//! 空行与 `#` 开头的注释行被跳过，无效行在 stderr 上提示后跳过。

use std::io::{BufRead, Write};

use anyhow::Context;
use ipq_core::report;
use ipq_core::types::Target;
use ipq_core::LookupGateway;

use crate::cli::OutputFormat;
use crate::exit::CliError;
use crate::output::{self, Styles};

/// Targets parsed from a batch source.
#[derive(Debug, Default)]
pub struct BatchInput {
    pub targets: Vec<Target>,
    /// Lines that were neither blank, comments nor valid targets
    pub invalid: Vec<String>,
}

/// Parse one target per line.
pub fn parse_lines(reader: impl BufRead) -> Result<BatchInput, CliError> {
    let mut input = BatchInput::default();
    for line in reader.lines() {
        let line = line.context("read error")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Target::parse(line) {
            Ok(target) if !target.is_local() => input.targets.push(target),
            _ => input.invalid.push(line.to_string()),
        }
    }
    Ok(input)
}

/// Query every target and write the results to `out`.
///
/// Line formats are written as each target completes; JSON and YAML are
/// written once as a single array.
pub async fn run(
    gateway: &dyn LookupGateway,
    input: &BatchInput,
    format: OutputFormat,
    detail: bool,
    styles: Styles,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if input.targets.is_empty() {
        return Err(CliError::NotFound(output::friendly_error(
            styles,
            "No valid targets found",
            "",
            "Put one IP or domain per line; blank and # lines are skipped",
        )));
    }

    let streaming = matches!(
        format,
        OutputFormat::Text | OutputFormat::Tui | OutputFormat::Quiet
    );
    let mut reports = Vec::with_capacity(input.targets.len());

    for (i, target) in input.targets.iter().enumerate() {
        let report = report::collect(gateway, target, detail).await;
        if streaming {
            if i > 0 && format != OutputFormat::Quiet {
                writeln!(out).context("write error")?;
            }
            let text = output::render(&report, format, detail, styles)?;
            out.write_all(text.as_bytes()).context("write error")?;
        } else {
            reports.push(report);
        }
    }

    if !streaming {
        let text = output::render_batch(&reports, format, detail, styles)?;
        out.write_all(text.as_bytes()).context("write error")?;
    }
    out.flush().context("write error")?;
    Ok(())
}
