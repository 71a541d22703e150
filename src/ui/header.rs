use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::tabs::Tab;
use super::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_tab: Tab,
    connected: bool,
    last_error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Top line: app name + controller connectivity
    let mut info_spans = vec![Span::styled(" poolmon ", theme::title_style())];
    if connected {
        info_spans.push(Span::styled("  \u{25cf} controller", theme::connected_style()));
    } else {
        info_spans.push(Span::styled("  \u{25cb} offline", theme::disconnected_style()));
        if let Some(err) = last_error {
            let budget = area.width.saturating_sub(24) as usize;
            let text: String = format!("  {err}").chars().take(budget).collect();
            info_spans.push(Span::styled(text, theme::label_style()));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(info_spans)).style(theme::header_style()),
        chunks[0],
    );

    // Tab bar
    let mut tab_spans = vec![Span::raw(" ")];
    for tab in &Tab::ALL {
        let label = format!(" {}:{} ", tab.index() + 1, tab.label());
        if *tab == current_tab {
            tab_spans.push(Span::styled(label, theme::active_tab_style()));
        } else {
            tab_spans.push(Span::styled(label, theme::inactive_tab_style()));
        }
        tab_spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(tab_spans)).style(theme::header_style()),
        chunks[1],
    );
}
