use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 20, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        header_line("Navigation"),
        key_line("1-3", "Switch to tab by number"),
        key_line("Tab / Shift+Tab", "Cycle through tabs"),
        key_line("F1-F3", "Switch to tab by function key"),
        Line::raw(""),
        header_line("Target Temperature"),
        key_line("click ring", "Set target where you click"),
        key_line("\u{2191} / k", "Raise target by 1\u{00b0}C"),
        key_line("\u{2193} / j", "Lower target by 1\u{00b0}C"),
        key_line("scroll wheel", "Adjust target by 1\u{00b0}C"),
        Line::raw(""),
        header_line("Temperature Tab"),
        key_line("p", "Cycle pool type preset"),
        Line::raw(""),
        header_line("General"),
        key_line("r", "Poll the controller now"),
        key_line("?", "Toggle this help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    let block = Block::default()
        .title(Line::styled(" Help ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(ratatui::style::Style::default().bg(theme::BASE));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn header_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(format!("  {text}"), theme::title_style()))
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<20}"), theme::key_hint_style()),
        Span::styled(desc, theme::label_style()),
    ])
}

fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
