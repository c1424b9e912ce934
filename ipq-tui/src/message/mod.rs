//! Message 层：事件消息
//!
//! Event 层把按键翻译成 `AppMessage`，主循环把后台任务的完成事件
//! 包装成 `AppMessage::Session`，两者都交给 Update 层消费。

mod app;

pub use app::AppMessage;
