//! 事件处理器

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ipq_core::types::Family;

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::DETAIL.matches(key) {
        return AppMessage::EnableDetail;
    }

    if DefaultKeymap::COPY_IPV4.matches(key) {
        return AppMessage::Copy(Family::V4);
    }

    if DefaultKeymap::COPY_IPV6.matches(key) {
        return AppMessage::Copy(Family::V6);
    }

    AppMessage::Noop
}
