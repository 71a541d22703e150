use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme;

/// Bordered reading card with a status badge, as used for the pH and
/// ORP panels flanking the monitor gauge.
pub fn render(frame: &mut Frame, area: Rect, title: &str, value: &str, good: bool) {
    let badge = if good {
        Line::styled(" GOOD ", theme::good_badge_style())
    } else {
        Line::styled(" WARNING ", theme::warning_badge_style())
    };

    let block = Block::default()
        .title(Line::styled(format!(" {title} "), theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());

    let lines = vec![
        Line::raw(""),
        Line::styled(value.to_string(), theme::value_style()),
        badge,
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
