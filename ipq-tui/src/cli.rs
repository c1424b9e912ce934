//! 命令行参数定义
//!
//! ```text
//! ipq                         本机公网 IP（交互式界面）
//! ipq 8.8.8.8 -d              指定 IP，附带地理位置
//! ipq https://github.com/x    直接粘贴 URL
//! echo google.com | ipq       从 stdin 读取目标
//! ipq -f hosts.txt -o json    批量查询
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

/// A powerful IP lookup tool.
#[derive(Debug, Parser)]
#[command(name = "ipq", disable_version_flag = true)]
pub struct Cli {
    /// IP address, domain or pasted URL (default: this host's public address)
    pub target: Option<String>,

    /// Show geolocation and ISP detail
    #[arg(short, long)]
    pub detail: bool,

    /// Output format (default: tui in a terminal, text otherwise)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print addresses only; suppress warnings in batch mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Read targets from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read targets from stdin, one per line
    #[arg(long)]
    pub batch: bool,

    /// Per-lookup timeout, e.g. 500ms, 5s, 2m
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Disable colored output (same as NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print version information
    Version {
        /// Include commit, build date and platform
        #[arg(short, long)]
        verbose: bool,
    },
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interactive terminal UI
    Tui,
    /// Human readable text
    Text,
    /// Machine readable JSON
    Json,
    /// Machine readable YAML
    Yaml,
    /// Addresses only, one per line
    Quiet,
}

impl Cli {
    /// Effective output format: `-q` wins, then `-o`, then the environment.
    pub fn output_format(&self, interactive: bool) -> OutputFormat {
        if self.quiet {
            return OutputFormat::Quiet;
        }
        match self.output {
            Some(format) => format,
            None if interactive => OutputFormat::Tui,
            None => OutputFormat::Text,
        }
    }

    pub fn is_batch(&self) -> bool {
        self.batch || self.file.is_some()
    }
}

/// Parse `500ms`, `5s`, `2m` or a bare number of seconds.
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    let text = text.trim();
    let invalid = || format!("invalid duration '{text}' (try 500ms, 5s or 2m)");

    let (number, unit) = match text.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => text.split_at(idx),
        None => (text, "s"),
    };
    let value: f64 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    let seconds = match unit {
        "ms" => value / 1000.0,
        "s" => value,
        "m" => value * 60.0,
        _ => return Err(invalid()),
    };
    Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
}

/// Build metadata for `ipq version -v`.
pub fn version_text(verbose: bool) -> String {
    let version = env!("CARGO_PKG_VERSION");
    if !verbose {
        return format!("ipq {version}");
    }
    let commit = option_env!("IPQ_GIT_COMMIT").unwrap_or("unknown");
    let built = option_env!("IPQ_BUILD_DATE").unwrap_or("unknown");
    format!(
        "ipq {version}\n  commit: {commit}\n  built:  {built}\n  os:     {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("5h").is_err());
        assert!(parse_duration("ms").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["ipq", "example.com", "-d", "-o", "json", "--timeout", "2s"])
            .unwrap();
        assert_eq!(cli.target.as_deref(), Some("example.com"));
        assert!(cli.detail);
        assert_eq!(cli.output_format(true), OutputFormat::Json);
        assert_eq!(cli.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_output_format_defaults() {
        let cli = Cli::try_parse_from(["ipq"]).unwrap();
        assert_eq!(cli.output_format(true), OutputFormat::Tui);
        assert_eq!(cli.output_format(false), OutputFormat::Text);

        let cli = Cli::try_parse_from(["ipq", "-q", "-o", "json"]).unwrap();
        assert_eq!(cli.output_format(true), OutputFormat::Quiet);
    }

    #[test]
    fn test_batch_and_version_subcommand() {
        let cli = Cli::try_parse_from(["ipq", "-f", "hosts.txt"]).unwrap();
        assert!(cli.is_batch());

        let cli = Cli::try_parse_from(["ipq", "version", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Version { verbose: true })));
    }

    #[test]
    fn test_version_text() {
        assert!(version_text(false).starts_with("ipq "));
        assert!(version_text(true).contains("os:"));
    }
}
