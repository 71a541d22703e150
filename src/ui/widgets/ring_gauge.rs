//! Braille-canvas renderer for circular gauges.
//!
//! The fill is derived from the same stroke-dash geometry the gauge
//! core computes, so what the terminal shows is exactly what the math
//! says: the filled run is anchored at the arc start and the dead
//! region of a partial dial is never touched.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as Segment};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::gauge::arc::ArcStroke;
use crate::gauge::{interaction, GaugeConfig};
use crate::ui::theme;

const SEGMENTS: usize = 256;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    config: &GaugeConfig,
    fraction: f64,
    dot_angle: f64,
    color: Color,
    center: Vec<Line<'static>>,
) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let (half_x, half_y) = interaction::canvas_half_bounds(config, area);
    let stroke = ArcStroke::build(fraction, config);
    let fill_ratio = if stroke.dash_visible > 0.0 {
        stroke.filled_len() / stroke.dash_visible
    } else {
        0.0
    };

    let cfg = *config;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-half_x, half_x])
        .y_bounds([-half_y, half_y])
        .paint(move |ctx| {
            draw_ring(ctx, &cfg, fill_ratio, color);
            ctx.layer();
            draw_dot(ctx, &cfg, dot_angle, color);
        });
    frame.render_widget(canvas, area);

    if !center.is_empty() {
        let center_area = center_rect(area, center.len() as u16);
        frame.render_widget(
            Paragraph::new(center).alignment(Alignment::Center),
            center_area,
        );
    }
}

fn draw_ring(ctx: &mut Context, config: &GaugeConfig, fill_ratio: f64, color: Color) {
    let start = config.arc_start_deg.to_radians();
    let span = config.arc_span_deg.to_radians();
    let radius = config.radius();

    // three concentric passes approximate the stroke width
    for offset in [-config.stroke / 2.0, 0.0, config.stroke / 2.0] {
        let r = radius + offset;
        for i in 0..SEGMENTS {
            let t0 = i as f64 / SEGMENTS as f64;
            let t1 = (i + 1) as f64 / SEGMENTS as f64;
            let mid = (t0 + t1) / 2.0;
            let seg_color = if mid <= fill_ratio {
                color
            } else {
                theme::SURFACE1
            };
            let a0 = start + span * t0;
            let a1 = start + span * t1;
            // canvas y points up, screen angles assume y down
            ctx.draw(&Segment {
                x1: r * a0.cos(),
                y1: -r * a0.sin(),
                x2: r * a1.cos(),
                y2: -r * a1.sin(),
                color: seg_color,
            });
        }
    }
}

fn draw_dot(ctx: &mut Context, config: &GaugeConfig, angle: f64, color: Color) {
    let radius = config.radius();
    let x = radius * angle.cos();
    let y = -radius * angle.sin();
    let dot = config.stroke * 0.7;
    for r in [dot, dot * 0.55] {
        ctx.draw(&Circle {
            x,
            y,
            radius: r,
            color,
        });
    }
    ctx.draw(&Circle {
        x,
        y,
        radius: dot * 0.2,
        color: theme::TEXT,
    });
}

fn center_rect(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let width = (area.width / 2).max(1);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
