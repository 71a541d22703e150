//! Full-circle water temperature dial with pool-type comfort bands.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::gauge::mapper;
use crate::ui::theme;
use crate::ui::widgets::ring_gauge;
use crate::util::{format_ph, format_setpoint, format_temp};

fn split(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);
    (rows[0], rows[1], rows[2])
}

/// On-screen rect of the temperature dial, shared with click handling.
pub fn gauge_area(body: Rect) -> Rect {
    split(body).1
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (status_area, gauge, preset_area) = split(area);
    let pool_type = app.pool_type();
    let status = pool_type.classify(app.current_temp);
    let color = theme::temp_status_color(status);

    let status_line = Line::from(vec![
        Span::styled(
            format!(" {}", pool_type.status_message(app.current_temp)),
            Style::default().fg(color),
        ),
        Span::styled(format!("   pH {}", format_ph(app.ph)), theme::label_style()),
    ]);
    frame.render_widget(Paragraph::new(status_line), status_area);

    let center = vec![
        Line::styled("WATER", theme::label_style()),
        Line::styled(
            format_temp(app.animated_temp),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("target {}", format_setpoint(app.target_temp)),
            theme::label_style(),
        ),
    ];
    ring_gauge::render(
        frame,
        gauge,
        &app.temp_config,
        mapper::value_to_fraction(app.current_temp, &app.temp_config),
        app.temp_state.displayed_angle(),
        color,
        center,
    );

    let preset_line = Line::from(vec![
        Span::styled(" Pool type ", theme::label_style()),
        Span::styled(pool_type.name, theme::value_style()),
        Span::styled("  p", theme::key_hint_style()),
        Span::styled(" next preset", theme::label_style()),
    ]);
    frame.render_widget(
        Paragraph::new(preset_line).alignment(Alignment::Center),
        preset_area,
    );
}
