//! Backend 层：外部协作者的实现
//!
//! 为 ipq-core 的 trait 提供真实实现：
//!     - `ToolboxGateway`    基于 ipq-toolbox 的网络查询
//!     - `Osc52Clipboard`    基于终端 OSC 52 转义序列的剪贴板

mod clipboard;
mod gateway;

pub use clipboard::Osc52Clipboard;
pub use gateway::ToolboxGateway;
