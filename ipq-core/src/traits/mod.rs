//! 外部协作者抽象 Trait
//!
//! 网络查询和剪贴板由外层 crate 实现，core 只依赖这些接口。

mod clipboard;
mod gateway;

pub use clipboard::ClipboardWriter;
pub use gateway::{LookupError, LookupGateway, LookupResult};
