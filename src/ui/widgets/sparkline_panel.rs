use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Sparkline};
use ratatui::Frame;

use crate::pool::History;
use crate::ui::theme;

/// Titled sparkline over a reading history, annotated with the latest
/// value in the bottom border.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    history: &History,
    color: Color,
    annotation: &str,
) {
    let block = Block::default()
        .title(Line::styled(format!(" {title} "), theme::title_style()))
        .title_bottom(Line::styled(
            format!(" {annotation} "),
            Style::default().fg(color),
        ))
        .borders(Borders::ALL)
        .border_style(theme::border_style());

    let data = history.as_u64_vec(area.width.saturating_sub(2) as usize);
    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .max(crate::pool::TEMP_MAX as u64 * 10)
        .style(Style::default().fg(color));

    frame.render_widget(sparkline, area);
}
