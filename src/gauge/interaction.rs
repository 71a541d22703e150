//! Pointer-event plumbing: terminal cells in, value-change callback out.

use ratatui::layout::{Position, Rect};

use super::{mapper, GaugeConfig, PointerSample};

/// Gauge units per braille dot when the gauge is drawn into `area`.
///
/// A terminal cell carries 2 braille dots across and 4 down, which
/// makes individual dots square; scaling by dots rather than cells is
/// what keeps the ring round and the click inversion exact.
pub fn units_per_dot(config: &GaugeConfig, area: Rect) -> f64 {
    let dots_x = f64::from(area.width) * 2.0;
    let dots_y = f64::from(area.height) * 4.0;
    let dots = dots_x.min(dots_y).max(1.0);
    2.0 * config.half_extent() / dots
}

/// Half-extents of the canvas coordinate window for `area`, in gauge
/// units. The shorter axis spans exactly the gauge face; the longer
/// one gets proportional slack so nothing stretches.
pub fn canvas_half_bounds(config: &GaugeConfig, area: Rect) -> (f64, f64) {
    let unit = units_per_dot(config, area);
    (unit * f64::from(area.width), unit * f64::from(area.height) * 2.0)
}

/// Translates clicks on a gauge's screen area into value changes.
///
/// Owns no network or app state; its single side effect is invoking
/// the supplied callback exactly once per click that lands on the
/// gauge surface, even when the computed value equals the previous
/// one. The consumer decides whether to ignore repeats.
#[derive(Clone, Copy, Debug)]
pub struct InteractionController {
    config: GaugeConfig,
}

impl InteractionController {
    pub fn new(config: GaugeConfig) -> Self {
        Self { config }
    }

    /// `area` is the gauge's on-screen rect, re-read per event so a
    /// resize between render and click cannot skew the geometry.
    pub fn handle_click(
        &self,
        column: u16,
        row: u16,
        area: Rect,
        mut on_change: impl FnMut(f64),
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if !area.contains(Position::new(column, row)) {
            return;
        }
        let sample = self.pointer_sample(column, row, area);
        on_change(mapper::pointer_to_value(sample, &self.config));
    }

    /// Cell coordinates to gauge units relative to the gauge center,
    /// screen orientation (y down).
    fn pointer_sample(&self, column: u16, row: u16, area: Rect) -> PointerSample {
        let unit = units_per_dot(&self.config, area);
        let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
        let center_y = f64::from(area.y) + f64::from(area.height) / 2.0;
        PointerSample {
            x: (f64::from(column) + 0.5 - center_x) * 2.0 * unit,
            y: (f64::from(row) + 0.5 - center_y) * 4.0 * unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::GaugeConfig;

    fn controller() -> InteractionController {
        let config = GaugeConfig::full_circle(5.0, 45.0, 320.0, 18.0).unwrap();
        InteractionController::new(config)
    }

    #[test]
    fn click_outside_area_is_ignored() {
        let ctl = controller();
        let area = Rect::new(10, 5, 40, 20);
        let mut calls = 0;
        ctl.handle_click(0, 0, area, |_| calls += 1);
        ctl.handle_click(60, 30, area, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn callback_fires_once_per_click_even_when_unchanged() {
        let ctl = controller();
        let area = Rect::new(0, 0, 40, 20);
        let mut values = Vec::new();
        ctl.handle_click(20, 19, area, |v| values.push(v));
        ctl.handle_click(20, 19, area, |v| values.push(v));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], values[1]);
    }

    #[test]
    fn bottom_click_reads_range_midpoint() {
        let ctl = controller();
        let area = Rect::new(0, 0, 40, 20);
        // bottom center of a 5..45 full ring is the 50% position
        let mut picked = None;
        ctl.handle_click(20, 19, area, |v| picked = Some(v));
        assert_eq!(picked, Some(25.0));
    }

    #[test]
    fn top_click_reads_near_an_endpoint() {
        let ctl = controller();
        let area = Rect::new(0, 0, 40, 20);
        let mut picked = None;
        ctl.handle_click(20, 0, area, |v| picked = Some(v));
        let v = picked.unwrap();
        assert!(v <= 6.0 || v >= 44.0, "top of ring should be near min/max, got {v}");
    }

    #[test]
    fn scale_is_isotropic() {
        let config = GaugeConfig::full_circle(5.0, 45.0, 320.0, 18.0).unwrap();
        // a 2:1 cell rect has a square dot grid; both halves then
        // cover the same number of gauge units
        let (hx, hy) = canvas_half_bounds(&config, Rect::new(0, 0, 40, 20));
        assert!((hx - hy).abs() < 1e-9);
    }
}
