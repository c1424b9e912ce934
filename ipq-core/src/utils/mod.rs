//! 工具函数模块

pub mod classify;
pub mod host;

pub use classify::{classify, family_of, is_valid_ip};
pub use host::{extract_host, is_acceptable_target};
