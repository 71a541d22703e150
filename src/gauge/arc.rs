//! Stroke-dash geometry for circular progress rings.

use std::f64::consts::TAU;

use super::GaugeConfig;

/// Dash parameters for drawing a fill fraction onto a ring.
///
/// The circle perimeter splits into a visible arc and a hidden
/// remainder; the hidden segment is never part of any stroke, so a
/// partial dial's dead region stays blank. The fill is anchored at the
/// arc start: the offset shrinks as the fraction grows and reaches 0
/// exactly at fraction 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStroke {
    /// Length of the drawable arc.
    pub dash_visible: f64,
    /// Length of the complementary dead region.
    pub dash_hidden: f64,
    /// Unfilled tail of the visible arc.
    pub dash_offset: f64,
}

impl ArcStroke {
    pub fn build(fraction: f64, config: &GaugeConfig) -> Self {
        let perimeter = TAU * config.radius();
        let visible = perimeter * config.arc_span_deg / 360.0;
        let fraction = fraction.clamp(0.0, 1.0);
        // exact zero at full fill, no residue keeping the ring open
        let offset = if fraction >= 1.0 {
            0.0
        } else {
            visible * (1.0 - fraction)
        };
        Self {
            dash_visible: visible,
            dash_hidden: perimeter - visible,
            dash_offset: offset,
        }
    }

    /// Arc length rendered as filled, measured from the arc start.
    pub fn filled_len(&self) -> f64 {
        self.dash_visible - self.dash_offset
    }

    pub fn perimeter(&self) -> f64 {
        self.dash_visible + self.dash_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::GaugeConfig;

    #[test]
    fn full_ring_endpoints() {
        let config = GaugeConfig::full_circle(5.0, 45.0, 320.0, 18.0).unwrap();
        let empty = ArcStroke::build(0.0, &config);
        assert_eq!(empty.dash_offset, empty.dash_visible);
        assert_eq!(empty.filled_len(), 0.0);
        assert_eq!(empty.dash_hidden, 0.0);

        let complete = ArcStroke::build(1.0, &config);
        assert_eq!(complete.dash_offset, 0.0);
        assert_eq!(complete.filled_len(), complete.dash_visible);
    }

    #[test]
    fn partial_arc_half_fill() {
        let config = GaugeConfig::new(5.0, 45.0, 320.0, 18.0, -135.0, 270.0).unwrap();
        let stroke = ArcStroke::build(0.5, &config);
        let perimeter = stroke.perimeter();
        // the 270° dial exposes three quarters of the circle; half of
        // that is filled, and the dead 90° belongs to neither segment
        assert!((stroke.dash_visible - perimeter * 0.75).abs() < 1e-9);
        assert!((stroke.dash_hidden - perimeter * 0.25).abs() < 1e-9);
        assert!((stroke.filled_len() - stroke.dash_visible / 2.0).abs() < 1e-9);
    }

    #[test]
    fn overfill_clamps() {
        let config = GaugeConfig::full_circle(5.0, 45.0, 320.0, 18.0).unwrap();
        let stroke = ArcStroke::build(1.7, &config);
        assert_eq!(stroke.dash_offset, 0.0);
        let stroke = ArcStroke::build(-0.3, &config);
        assert_eq!(stroke.filled_len(), 0.0);
    }
}
