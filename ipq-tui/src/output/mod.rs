//! 非交互输出
//!
//! 管道、CI 和 `-o text|json|yaml|quiet` 使用的输出格式，
//! 以及统一的错误提示块。

mod error;
mod format;
mod style;

pub use error::friendly_error;
pub use format::{render, render_batch};
pub use style::Styles;
