//! 终端文本样式
//!
//! 颜色开关在构造时确定并显式传递，不读取全局状态。

use crossterm::style::Stylize;

/// ANSI styles for plain (non-TUI) output.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    color: bool,
}

impl Styles {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn error(self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn hint(self, text: &str) -> String {
        if self.color {
            text.dark_grey().italic().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn suggestion(self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }
}
