//! 状态栏组件
//!
//! 有临时消息（"Copied IPv4 to clipboard!" 等）时只显示消息，
//! 否则显示快捷键提示。

use ipq_core::Session;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Palette;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(line(app.session(), app.palette));
    frame.render_widget(paragraph, area);
}

pub fn line(session: &Session, palette: Palette) -> Line<'static> {
    if let Some(message) = session.message() {
        return Line::from(Span::styled(format!(" {message}"), palette.success()));
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints(session).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", palette.border()));
        }
        spans.push(Span::styled(*key, palette.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, palette.muted()));
    }
    Line::from(spans)
}

fn hints(session: &Session) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if !session.detail_requested() {
        hints.push(("d", "for detail"));
    }
    hints.push(("4/6", "copy"));
    hints.push(("r", "refresh"));
    hints.push(("q", "quit"));

    hints
}

#[cfg(test)]
mod tests {
    use ipq_core::types::{Family, Target};
    use ipq_core::SessionEvent;

    use super::*;

    fn text(session: &Session) -> String {
        line(session, Palette::monochrome())
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_hints_without_detail() {
        let session = Session::new(Target::local(), false);
        assert_eq!(
            text(&session),
            " d for detail │ 4/6 copy │ r refresh │ q quit"
        );
    }

    #[test]
    fn test_hints_with_detail() {
        let session = Session::new(Target::local(), true);
        assert_eq!(text(&session), " 4/6 copy │ r refresh │ q quit");
    }

    #[test]
    fn test_message_replaces_hints() {
        let mut session = Session::new(Target::local(), false);
        session.start();
        session.handle(SessionEvent::Ipv4Completed {
            generation: 0,
            outcome: Ok("8.8.8.8".to_string()),
        });
        session.handle(SessionEvent::CopyRequested(Family::V4));
        assert_eq!(text(&session), " Copied IPv4 to clipboard!");
    }
}
