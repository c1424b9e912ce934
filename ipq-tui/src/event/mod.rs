//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::handle_event;
//!
//! 事件由 src/app.rs 中的 `EventStream` 异步读取，不再阻塞轮询：
//!
//! ```text
//!     Event::Key(KeyEvent)     → handle_key_event()
//!     Event::Resize(w, h)      → Noop，下一帧自动重绘
//!     其他                     → Noop
//! ```
//!
//! 快捷键：
//!
//! ```text
//!     q / Ctrl+C   → AppMessage::Quit
//!     r            → AppMessage::Refresh
//!     d            → AppMessage::EnableDetail
//!     4 / 6        → AppMessage::Copy(Family::V4 / V6)
//! ```

mod handler;
mod keymap;

pub use handler::handle_event;
