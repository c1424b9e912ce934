//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 负责终端的初始化和恢复，与查询逻辑无关。
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 `restore_terminal`。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
