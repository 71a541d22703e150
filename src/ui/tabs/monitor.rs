//! Main dashboard tab: target dial flanked by water-chemistry cards.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::gauge::mapper;
use crate::pool;
use crate::ui::theme;
use crate::ui::widgets::{info_card, ring_gauge};
use crate::util::{format_orp, format_ph, format_setpoint, format_temp};

struct Areas {
    banner: Rect,
    ph_card: Rect,
    quality: Rect,
    gauge: Rect,
    orp_card: Rect,
    sanitation: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28),
            Constraint::Min(20),
            Constraint::Length(28),
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(columns[2]);

    Areas {
        banner: rows[0],
        ph_card: left[0],
        quality: left[1],
        gauge: columns[1],
        orp_card: right[0],
        sanitation: right[1],
        status: rows[2],
    }
}

/// On-screen rect of the target dial, shared with click handling.
pub fn gauge_area(body: Rect) -> Rect {
    split(body).gauge
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let areas = split(area);

    let banner = vec![
        Line::styled("TARGET TEMPERATURE", theme::label_style()),
        Line::styled(
            format_setpoint(app.target_temp),
            theme::title_style().add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        areas.banner,
    );

    info_card::render(
        frame,
        areas.ph_card,
        "pH Level",
        &format_ph(app.ph),
        pool::ph_is_good(app.ph),
    );
    render_quality(frame, areas.quality, app);

    let badge = if app.temps_match() {
        Line::styled(" \u{2713} Perfect ", theme::good_badge_style())
    } else {
        Line::styled(" \u{21c5} Adjusting ", theme::warning_badge_style())
    };
    let center = vec![
        Line::styled("CURRENT", theme::label_style()),
        Line::styled(
            format_temp(app.animated_temp),
            theme::value_style().add_modifier(Modifier::BOLD),
        ),
        badge,
    ];
    ring_gauge::render(
        frame,
        areas.gauge,
        &app.monitor_config,
        mapper::value_to_fraction(app.target_temp, &app.monitor_config),
        app.monitor_state.displayed_angle(),
        theme::CYAN,
        center,
    );

    info_card::render(
        frame,
        areas.orp_card,
        "ORP Value",
        &format_orp(app.orp),
        pool::orp_is_good(app.orp),
    );
    render_sanitation(frame, areas.sanitation, app);

    let status = Line::from(vec![
        Span::styled(" Outside ", theme::label_style()),
        Span::styled(format_temp(app.outside_temp), theme::value_style()),
        Span::styled("   Pump ", theme::label_style()),
        Span::styled("Running", theme::connected_style()),
    ]);
    frame.render_widget(Paragraph::new(status), areas.status);
}

fn render_quality(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }
    let verdict = if pool::ph_is_good(app.ph) {
        Span::styled("balanced", theme::connected_style())
    } else if app.ph < pool::PH_GOOD_MIN {
        Span::styled("acidic, add pH+", theme::disconnected_style())
    } else {
        Span::styled("alkaline, add pH-", theme::disconnected_style())
    };
    let lines = vec![
        Line::raw(""),
        Line::from(vec![Span::styled(" Water is ", theme::label_style()), verdict]),
        Line::from(Span::styled(
            format!(
                " Ideal {} - {}",
                pool::PH_GOOD_MIN,
                pool::PH_GOOD_MAX
            ),
            theme::label_style(),
        )),
    ];
    let block = Block::default()
        .title(Line::styled(" Water Quality ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sanitation(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }
    let verdict = if pool::orp_is_good(app.orp) {
        Span::styled("effective", theme::connected_style())
    } else {
        Span::styled("weak, check chlorine", theme::disconnected_style())
    };
    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Sanitization ", theme::label_style()),
            verdict,
        ]),
        Line::from(Span::styled(
            format!(" Target above {} mV", pool::ORP_GOOD_MIN_MV as i64),
            theme::label_style(),
        )),
    ];
    let block = Block::default()
        .title(Line::styled(" Sanitization ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
