//! 主题和样式定义
//!
//! 颜色方案作为 `Palette` 值在构造 App 时确定，
//! 通过参数传递给各视图函数，不使用全局状态。

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the interactive view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub border: Color,
    pub highlight: Color,
    pub highlight_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub suggestion: Color,
    /// Whether modifiers such as bold and italic are applied
    pub decorated: bool,
}

impl Palette {
    /// Dark palette, or a colorless one when `color` is false.
    pub fn new(color: bool) -> Self {
        if color {
            Self::dark()
        } else {
            Self::monochrome()
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            highlight: Color::Rgb(0, 122, 204),
            highlight_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            suggestion: Color::Rgb(86, 156, 214),
            decorated: true,
        }
    }

    /// 无颜色（NO_COLOR / --no-color）
    pub fn monochrome() -> Self {
        Self {
            fg: Color::Reset,
            border: Color::Reset,
            highlight: Color::Reset,
            highlight_fg: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            muted: Color::Reset,
            suggestion: Color::Reset,
            decorated: false,
        }
    }

    fn with_modifier(self, style: Style, modifier: Modifier) -> Style {
        if self.decorated {
            style.add_modifier(modifier)
        } else {
            style
        }
    }

    pub fn text(self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn label(self) -> Style {
        self.with_modifier(Style::default().fg(self.fg), Modifier::BOLD)
    }

    pub fn heading(self) -> Style {
        self.with_modifier(Style::default().fg(self.highlight), Modifier::BOLD)
    }

    pub fn border(self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_bar(self) -> Style {
        if self.decorated {
            Style::default().bg(self.highlight).fg(self.highlight_fg)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn success(self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(self) -> Style {
        self.with_modifier(Style::default().fg(self.error), Modifier::BOLD)
    }

    pub fn muted(self) -> Style {
        self.with_modifier(Style::default().fg(self.muted), Modifier::ITALIC)
    }

    pub fn suggestion(self) -> Style {
        Style::default().fg(self.suggestion)
    }

    /// 快捷键提示样式
    pub fn hint_key(self) -> Style {
        self.with_modifier(Style::default().fg(self.warning), Modifier::BOLD)
    }
}
