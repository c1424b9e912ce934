//! 主布局
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ ipq v0.1.0                           │  标题栏
//! ├──────────────────────────────────────┤
//! │ ┌ IP Query ────────────────────────┐ │
//! │ │ Target: ...                      │ │  结果页面
//! │ └──────────────────────────────────┘ │
//! ├──────────────────────────────────────┤
//! │ d for detail │ 4/6 copy │ ...        │  状态栏
//! └──────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" ipq v{}", env!("CARGO_PKG_VERSION")))
        .style(app.palette.title_bar());
    frame.render_widget(title, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" IP Query ")
        .title_style(app.palette.label())
        .borders(Borders::ALL)
        .border_style(app.palette.border());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::query::render(app, frame, inner_area);
}
