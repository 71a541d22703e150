use ratatui::style::{Color, Modifier, Style};

// Neon-on-dark palette lifted from the pool dashboard design
pub const BASE: Color = Color::Rgb(13, 20, 33);
pub const SURFACE0: Color = Color::Rgb(26, 35, 50);
pub const SURFACE1: Color = Color::Rgb(45, 55, 72);
pub const TEXT: Color = Color::Rgb(226, 232, 240);
pub const SUBTEXT: Color = Color::Rgb(148, 163, 184);
pub const CYAN: Color = Color::Rgb(0, 229, 255);
pub const GREEN: Color = Color::Rgb(50, 205, 50);
pub const RED: Color = Color::Rgb(255, 69, 0);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const ICE: Color = Color::Rgb(135, 206, 235);

pub fn title_style() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}

pub fn active_tab_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(CYAN)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_tab_style() -> Style {
    Style::default().fg(SUBTEXT).bg(SURFACE0)
}

pub fn header_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE0)
}

pub fn footer_style() -> Style {
    Style::default().fg(SUBTEXT).bg(SURFACE0)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn label_style() -> Style {
    Style::default().fg(SUBTEXT)
}

pub fn value_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn border_style() -> Style {
    Style::default().fg(SURFACE1)
}

pub fn good_badge_style() -> Style {
    Style::default().fg(BASE).bg(GREEN).add_modifier(Modifier::BOLD)
}

pub fn warning_badge_style() -> Style {
    Style::default().fg(BASE).bg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn connected_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn disconnected_style() -> Style {
    Style::default().fg(RED)
}

/// Ring color for the temperature gauge, following the comfort band.
pub fn temp_status_color(status: crate::pool::TempStatus) -> Color {
    use crate::pool::TempStatus;
    match status {
        TempStatus::TooHot | TempStatus::AboveIdeal => RED,
        TempStatus::Ideal => GREEN,
        TempStatus::TooCold | TempStatus::BelowIdeal => ICE,
    }
}
