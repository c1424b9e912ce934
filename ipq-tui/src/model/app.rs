//! 应用状态
//!
//! ```text
//! App {
//!     should_quit: bool = false,        // 决定应用是否应该退出
//!     orchestrator: Orchestrator,       // 查询会话与其异步任务
//!     spinner: usize = 0,               // 加载动画帧
//!     palette: Palette,                 // 颜色方案
//! }
//! ```
//!
//! 查询结果全部保存在 `orchestrator.session()` 中，App 只保存界面相关的状态。

use ipq_core::{Orchestrator, Session};

use crate::view::theme::Palette;

/// Braille spinner frames.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 查询会话
    pub orchestrator: Orchestrator,

    /// 当前动画帧
    pub spinner: usize,

    /// 颜色方案
    pub palette: Palette,
}

impl App {
    /// 创建新的应用实例
    pub fn new(orchestrator: Orchestrator, palette: Palette) -> Self {
        Self {
            should_quit: false,
            orchestrator,
            spinner: 0,
            palette,
        }
    }

    pub fn session(&self) -> &Session {
        self.orchestrator.session()
    }

    /// Advance the spinner, only while something is loading.
    pub fn tick(&mut self) {
        if self.session().loading() {
            self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()]
    }
}
