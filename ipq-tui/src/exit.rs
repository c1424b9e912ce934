//! 退出码
//!
//! ```text
//! 0  成功
//! 1  一般错误
//! 2  参数或目标无效
//! 3  网络错误（什么都没查到）
//! 4  未找到（批量模式下没有有效目标）
//! ```

use std::process::ExitCode;

use thiserror::Error;

pub const EXIT_GENERAL_ERROR: u8 = 1;
pub const EXIT_INVALID_ARGS: u8 = 2;
pub const EXIT_NETWORK_ERROR: u8 = 3;
pub const EXIT_NOT_FOUND: u8 = 4;

/// Error that ends the process with a specific exit code.
///
/// The message is already formatted for the terminal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidTarget(_) => EXIT_INVALID_ARGS,
            Self::Network(_) => EXIT_NETWORK_ERROR,
            Self::NotFound(_) => EXIT_NOT_FOUND,
            Self::Other(_) => EXIT_GENERAL_ERROR,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
