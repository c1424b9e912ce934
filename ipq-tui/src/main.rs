//! ipq
//!
//! ## 架构
//!
//! 交互式界面采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网络与剪贴板 (`backend/`)
//!
//! 非交互模式（管道、CI、`-o text|json|yaml|quiet`、批量）直接输出结果：
//! - **Output**: 输出格式 (`output/`)
//! - **Batch**: 批量查询 (`batch.rs`)
//!
//!
//! main.rs 执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行参数
//!     Config::load()          // 读取配置文件
//!     init_logging()          // 日志输出到 stderr，TUI 下默认关闭
//!
//!     批量      → batch::run()
//!     非交互    → report::collect() + output::render()
//!     交互      → init_terminal() → app::run() → restore_terminal()
//!
//! }

mod app;
mod backend;
mod batch;
mod cli;
mod config;
mod event;
mod exit;
mod input;
mod message;
mod model;
mod output;
mod update;
mod util;
mod view;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ipq_core::types::Target;
use ipq_core::{report, Orchestrator, Session};
use ipq_toolbox::{ToolboxService, DEFAULT_TIMEOUT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{Osc52Clipboard, ToolboxGateway};
use cli::{Cli, Command, OutputFormat};
use config::Config;
use exit::CliError;
use output::Styles;
use util::{init_terminal, restore_terminal};
use view::theme::Palette;

/// Settings after merging flags, environment and config file.
struct Settings {
    format: OutputFormat,
    detail: bool,
    color: bool,
    timeout: Duration,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config, format: OutputFormat) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let color = !cli.no_color && !no_color_env && config.color != Some(false);
        let timeout = cli
            .timeout
            .or_else(|| config.timeout())
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            format,
            detail: cli.detail || config.show_detail,
            color,
            timeout,
        }
    }

    /// Styles for stdout; colors are only written to a terminal.
    fn stdout_styles(&self) -> Styles {
        Styles::new(self.color && io::stdout().is_terminal())
    }

    fn stderr_styles(&self) -> Styles {
        Styles::new(self.color && io::stderr().is_terminal())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", cli::version_text(false));
        return ExitCode::SUCCESS;
    }
    if let Some(Command::Version { verbose }) = &cli.command {
        println!("{}", cli::version_text(*verbose));
        return ExitCode::SUCCESS;
    }

    // 批量模式没有交互界面
    let format = match cli.output_format(!cli.is_batch() && input::is_interactive()) {
        OutputFormat::Tui if cli.is_batch() => OutputFormat::Text,
        format => format,
    };
    init_logging(format);

    let config = Config::load();
    let settings = Settings::resolve(&cli, &config, format);
    tracing::debug!(?format, timeout = ?settings.timeout, "starting");

    let result = if cli.is_batch() {
        run_batch(&cli, &settings).await
    } else {
        run_single(&cli, &settings).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match &e {
                CliError::Other(inner) => settings
                    .stderr_styles()
                    .error(&format!("Error: {inner:#}")),
                other => other.to_string(),
            };
            if !message.is_empty() {
                eprintln!("{message}");
            }
            e.exit_code()
        }
    }
}

/// Log to stderr. The TUI owns the screen, so its default is silence.
fn init_logging(format: OutputFormat) {
    let default = if format == OutputFormat::Tui { "off" } else { "warn" };
    let filter = EnvFilter::try_from_env("IPQ_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

fn resolve_target(cli: &Cli, settings: &Settings) -> Result<Target, CliError> {
    let raw = match &cli.target {
        Some(target) => target.clone(),
        None if input::has_stdin() => input::read_stdin_target().unwrap_or_default(),
        None => String::new(),
    };

    Target::parse(&raw).map_err(|e| {
        CliError::InvalidTarget(output::friendly_error(
            settings.stderr_styles(),
            "Invalid target",
            &e.to_string(),
            "Use an IP (8.8.8.8) or domain (google.com)",
        ))
    })
}

async fn run_single(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    let target = resolve_target(cli, settings)?;
    let gateway = ToolboxGateway::new(ToolboxService::new(settings.timeout));

    if settings.format == OutputFormat::Tui {
        return run_tui(target, gateway, settings).await;
    }

    let report = report::collect(&gateway, &target, settings.detail).await;
    let text = output::render(
        &report,
        settings.format,
        settings.detail,
        settings.stdout_styles(),
    )?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("write error")?;
    stdout.flush().context("write error")?;

    if report.success {
        return Ok(());
    }

    // Machine readable formats already carry the error.
    let message = if settings.format == OutputFormat::Text {
        output::friendly_error(
            settings.stderr_styles(),
            "Could not detect IP address",
            report.error.as_deref().unwrap_or_default(),
            "Check your network connection or try again with --timeout 10s",
        )
    } else {
        String::new()
    };
    Err(CliError::Network(message))
}

async fn run_tui(
    target: Target,
    gateway: ToolboxGateway,
    settings: &Settings,
) -> Result<(), CliError> {
    let session = Session::new(target, settings.detail);
    let mut orchestrator =
        Orchestrator::new(session, Arc::new(gateway), Arc::new(Osc52Clipboard));
    orchestrator.start();
    let mut app = model::App::new(orchestrator, Palette::new(settings.color));

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 运行主循环
    let result = app::run(&mut terminal, &mut app).await;

    // 3. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result.map_err(CliError::from)
}

async fn run_batch(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    let input = match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            batch::parse_lines(BufReader::new(file))?
        }
        None => batch::parse_lines(io::stdin().lock())?,
    };

    if settings.format != OutputFormat::Quiet {
        let styles = settings.stderr_styles();
        for line in &input.invalid {
            eprintln!("{}", styles.warning(&format!("Skipping invalid: {line}")));
        }
    }

    let gateway = ToolboxGateway::new(ToolboxService::new(settings.timeout));
    let mut stdout = io::stdout().lock();
    batch::run(
        &gateway,
        &input,
        settings.format,
        settings.detail,
        settings.stdout_styles(),
        &mut stdout,
    )
    .await
}
