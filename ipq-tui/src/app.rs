//!
//! app.rs
//! 应用主循环
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                   // 检查是否应该退出
//!     select! {                                      // 等待任意一个来源
//!         按键事件      → handle_event()  → AppMessage
//!         后台查询完成  → AppMessage::Session(..)
//!         100ms 定时器  → AppMessage::Tick           // 驱动加载动画
//!     }
//!     update::update(&mut app, msg)                  // 更新状态
//! }
//! ```
//!
//! 所有状态修改都发生在这一个任务里，后台任务只通过 channel 回报结果。

use std::time::Duration;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::time::MissedTickBehavior;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 动画帧间隔
const TICK_RATE: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一条消息
        let msg = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => event::handle_event(&event),
                Some(Err(e)) => return Err(e.into()),
                None => AppMessage::Quit,
            },
            Some(completion) = app.orchestrator.next_completion() => AppMessage::Session(completion),
            _ = ticker.tick() => AppMessage::Tick,
        };

        // 4. 更新状态
        update::update(app, msg);
    }

    Ok(())
}
