//! 查询结果页面
//!
//! ```text
//! Target: example.com
//! ⠙ Fetching...
//!
//! IPv4  93.184.216.34  [Public]
//! IPv6  ...
//!
//! [ GEOLOCATION ]
//! ISP       Edgecast
//! Location  Norwell, Massachusetts, United States
//!
//! [ ATTRIBUTES ]
//! Mobile Net   No
//! Proxy/VPN    No
//! Data Center  Yes
//! ```

use ipq_core::types::{AddressSlot, DetailState, Family, GeoDetail, Unavailable};
use ipq_core::Session;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::Palette;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lines = lines(app.session(), app.palette, app.spinner_frame());
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Page content for the current session state.
pub fn lines(session: &Session, palette: Palette, spinner: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Target: ", palette.label()),
            Span::styled(session.target().display_name().to_string(), palette.text()),
        ]),
        status_line(session, palette, spinner),
        Line::default(),
        address_line(Family::V4, session.ipv4(), palette),
        address_line(Family::V6, session.ipv6(), palette),
    ];

    if session.detail_requested() {
        lines.push(Line::default());
        detail_lines(session, palette, &mut lines);
    }

    lines
}

fn status_line(session: &Session, palette: Palette, spinner: &str) -> Line<'static> {
    if session.loading() {
        Line::from(Span::styled(
            format!("{spinner} Fetching..."),
            palette.warning(),
        ))
    } else {
        Line::from(Span::styled("✓ Done", palette.success()))
    }
}

fn address_line(family: Family, slot: &AddressSlot, palette: Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{family}  "), palette.label())];
    match slot {
        AddressSlot::Pending => spans.push(Span::styled("...", palette.muted())),
        AddressSlot::Resolved(ip) => {
            spans.push(Span::styled(ip.clone(), palette.text()));
            if let Some(category) = slot.category() {
                spans.push(Span::styled(format!("  [{category}]"), palette.suggestion()));
            }
        }
        AddressSlot::Unavailable(Unavailable::NotDetected) => {
            spans.push(Span::styled("Not Detected", palette.muted()));
        }
        AddressSlot::Unavailable(Unavailable::NotApplicable) => {
            spans.push(Span::styled("N/A", palette.muted()));
        }
    }
    Line::from(spans)
}

/// Geolocation block; only called while detail mode is on.
///
/// Before an address arrives no fetch is issued yet, but the page already
/// shows that one is coming.
fn detail_lines(session: &Session, palette: Palette, lines: &mut Vec<Line<'static>>) {
    match session.detail() {
        DetailState::NotRequested if !session.loading() => {}
        DetailState::NotRequested | DetailState::Pending => {
            lines.push(Line::from(Span::styled(
                "Fetching geolocation...",
                palette.muted(),
            )));
        }
        DetailState::Available(geo) => geo_lines(geo, palette, lines),
        DetailState::Failed(message) => {
            lines.push(Line::from(Span::styled(message.clone(), palette.error())));
            lines.push(Line::from(Span::styled(
                "→ Press 'r' to retry",
                palette.suggestion(),
            )));
        }
    }
}

fn geo_lines(geo: &GeoDetail, palette: Palette, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled("[ GEOLOCATION ]", palette.heading())));
    lines.push(field("ISP       ", or_unknown(&geo.isp), palette));
    lines.push(field(
        "Location  ",
        geo.location().unwrap_or_else(|| "(unknown)".to_string()),
        palette,
    ));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[ ATTRIBUTES ]", palette.heading())));
    lines.push(flag("Mobile Net   ", geo.mobile, palette));
    lines.push(flag("Proxy/VPN    ", geo.proxy, palette));
    lines.push(flag("Data Center  ", geo.hosting, palette));
}

fn field(label: &'static str, value: String, palette: Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, palette.label()),
        Span::styled(value, palette.text()),
    ])
}

fn flag(label: &'static str, value: bool, palette: Palette) -> Line<'static> {
    let value = if value {
        Span::styled("Yes", palette.warning())
    } else {
        Span::styled("No", palette.text())
    };
    Line::from(vec![Span::styled(label, palette.label()), value])
}

fn or_unknown(text: &str) -> String {
    if text.trim().is_empty() {
        "(unknown)".to_string()
    } else {
        text.to_string()
    }
}
