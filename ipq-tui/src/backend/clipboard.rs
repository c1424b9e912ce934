//! 剪贴板
//!
//! 通过 OSC 52 转义序列让终端写入系统剪贴板，
//! 在 SSH 会话和 tmux 中同样可用，无需本地剪贴板守护进程。

use std::io::{self, Write};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ipq_core::{ClipboardWriter, CoreError, CoreResult};

/// `\x1b]52;c;<base64>\x07`
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard that asks the terminal to store the text.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

#[async_trait]
impl ClipboardWriter for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> CoreResult<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CoreError::ClipboardError(e.to_string()))
    }
}
