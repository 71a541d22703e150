use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

use super::tabs::Tab;
use super::theme;
use crate::util::format_interval;

pub fn render(frame: &mut Frame, area: Rect, current_tab: Tab, poll_interval: Duration) {
    let mut hints = vec![
        Span::styled(" q", theme::key_hint_style()),
        Span::styled(" quit  ", theme::label_style()),
        Span::styled("?", theme::key_hint_style()),
        Span::styled(" help  ", theme::label_style()),
        Span::styled("Tab", theme::key_hint_style()),
        Span::styled(" switch  ", theme::label_style()),
        Span::styled("r", theme::key_hint_style()),
        Span::styled(" refresh  ", theme::label_style()),
    ];

    match current_tab {
        Tab::Monitor => {
            hints.extend([
                Span::styled("click ring", theme::key_hint_style()),
                Span::styled(" set target  ", theme::label_style()),
                Span::styled("\u{2191}/\u{2193}", theme::key_hint_style()),
                Span::styled(" adjust", theme::label_style()),
            ]);
        }
        Tab::Temperature => {
            hints.extend([
                Span::styled("click ring", theme::key_hint_style()),
                Span::styled(" set target  ", theme::label_style()),
                Span::styled("p", theme::key_hint_style()),
                Span::styled(" pool type", theme::label_style()),
            ]);
        }
        Tab::Advanced => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(theme::footer_style()),
        chunks[0],
    );

    let rate_line = Line::from(vec![
        Span::styled("poll ", theme::label_style()),
        Span::styled(
            format!("{} ", format_interval(poll_interval.as_millis())),
            theme::value_style(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(rate_line)
            .alignment(Alignment::Right)
            .style(theme::footer_style()),
        chunks[1],
    );
}
