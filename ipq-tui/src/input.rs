//! 输入与环境检测
//!
//! - 自动检测是否在交互式终端运行，管道 / CI 环境切换到文本输出
//! - 支持从 stdin 读取目标：`echo "8.8.8.8" | ipq`

use std::io::{self, BufRead, IsTerminal};

use anyhow::{bail, Context, Result};

/// Whether stdin is piped or redirected.
pub fn has_stdin() -> bool {
    !io::stdin().is_terminal()
}

/// Whether the interactive UI can run: stdin and stdout are terminals and
/// `CI` is unset.
pub fn is_interactive() -> bool {
    if has_stdin() || !io::stdout().is_terminal() {
        return false;
    }
    std::env::var_os("CI").is_none_or(|v| v.is_empty())
}

/// First non-empty line of `reader`, trimmed.
pub fn read_first_line(reader: impl BufRead) -> Result<String> {
    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
    bail!("no input")
}

/// Target piped on stdin.
pub fn read_stdin_target() -> Result<String> {
    read_first_line(io::stdin().lock())
}
