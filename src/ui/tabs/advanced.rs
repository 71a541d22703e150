//! Raw readings, probe diagnostics, and the temperature history strip.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::pool;
use crate::ui::theme;
use crate::ui::widgets::sparkline_panel;
use crate::util::{format_orp, format_ph, format_setpoint, format_temp};

// Probe calibration values are not exposed by the poll endpoint yet;
// these mirror the controller's commissioning sheet.
const PH_CALIBRATION_CORRECTION: f64 = 0.02;
const PH_PROBE_VOLTAGE_MV: f64 = 1365.0;
const PH_SLOPE_CORRECTION: f64 = 0.05;
const PH_DIRECT_READING: f64 = 7.22;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(5),
        ])
        .split(area);

    render_readings(frame, rows[0], app);
    render_diagnostics(frame, rows[1]);
    sparkline_panel::render(
        frame,
        rows[2],
        "Temperature History",
        &app.temp_history,
        theme::CYAN,
        &format_temp(app.current_temp),
    );
}

fn render_readings(frame: &mut Frame, area: Rect, app: &App) {
    let quality = |good| {
        if good {
            Span::styled("  ok", theme::connected_style())
        } else {
            Span::styled("  out of range", theme::disconnected_style())
        }
    };
    let lines = vec![
        reading("Water Temperature", &format_temp(app.current_temp), None),
        reading("Target Temperature", &format_setpoint(app.target_temp), None),
        reading(
            "pH Level",
            &format_ph(app.ph),
            Some(quality(pool::ph_is_good(app.ph))),
        ),
        reading(
            "ORP Value",
            &format_orp(app.orp),
            Some(quality(pool::orp_is_good(app.orp))),
        ),
        reading("Outside Temperature", &format_temp(app.outside_temp), None),
        reading("Pool Type", app.pool_type().name, None),
    ];
    let block = Block::default()
        .title(Line::styled(" Live Readings ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_diagnostics(frame: &mut Frame, area: Rect) {
    let lines = vec![
        reading(
            "Calibration pH Correction",
            &format!("+{PH_CALIBRATION_CORRECTION}"),
            None,
        ),
        reading(
            "pH Probe Voltage",
            &format!("{PH_PROBE_VOLTAGE_MV} mV"),
            None,
        ),
        reading("pH Slope Correction", &format!("{PH_SLOPE_CORRECTION}"), None),
        reading("pH Direct Reading", &format!("{PH_DIRECT_READING}"), None),
        Line::from(Span::styled(
            "  static until the probe bus is wired in",
            theme::label_style(),
        )),
    ];
    let block = Block::default()
        .title(Line::styled(" Probe Diagnostics ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn reading<'a>(label: &'a str, value: &str, suffix: Option<Span<'a>>) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("  {label:<28}"), theme::label_style()),
        Span::styled(value.to_string(), theme::value_style()),
    ];
    if let Some(suffix) = suffix {
        spans.push(suffix);
    }
    Line::from(spans)
}
