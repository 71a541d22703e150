//! Pure value/angle conversions for circular gauges.
//!
//! Out-of-range input is a normal condition (sensor noise, user
//! overshoot): everything clamps, nothing here errors or panics.

use super::{GaugeConfig, PointerSample};

/// Normalized position of `value` within the gauge range, in [0, 1].
///
/// The endpoints are exact: `min` yields 0.0 and `max` yields 1.0 with
/// no floating residue, so a full ring closes visibly.
pub fn value_to_fraction(value: f64, config: &GaugeConfig) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value >= config.max_value {
        return 1.0;
    }
    if value <= config.min_value {
        return 0.0;
    }
    (value - config.min_value) / config.value_span()
}

/// Angle in radians for a fill fraction, measured in screen coordinates
/// (0 at 3 o'clock, clockwise positive).
pub fn fraction_to_angle(fraction: f64, config: &GaugeConfig) -> f64 {
    let start = config.arc_start_deg.to_radians();
    let span = config.arc_span_deg.to_radians();
    start + fraction.clamp(0.0, 1.0) * span
}

/// Invert a pointer position back to a gauge value.
///
/// The pointer angle is rotated so 0° aligns with the arc start and
/// wrapped into [0, 360). On a partial dial, positions in the dead
/// region clamp to whichever endpoint is angularly closer. The result
/// is rounded to the nearest whole unit and clamped to the range.
pub fn pointer_to_value(sample: PointerSample, config: &GaugeConfig) -> f64 {
    let deg = sample.y.atan2(sample.x).to_degrees();
    let mut rel = (deg - config.arc_start_deg).rem_euclid(360.0);

    if rel > config.arc_span_deg {
        let past_end = rel - config.arc_span_deg;
        let before_start = 360.0 - rel;
        rel = if past_end <= before_start {
            config.arc_span_deg
        } else {
            0.0
        };
    }

    let fraction = rel / config.arc_span_deg;
    let value = config.min_value + fraction * config.value_span();
    value.round().clamp(config.min_value, config.max_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> GaugeConfig {
        GaugeConfig::full_circle(5.0, 45.0, 320.0, 18.0).unwrap()
    }

    fn arc270() -> GaugeConfig {
        GaugeConfig::new(5.0, 45.0, 320.0, 18.0, -135.0, 270.0).unwrap()
    }

    fn sample_at(angle: f64) -> PointerSample {
        PointerSample {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    #[test]
    fn fraction_endpoints_are_exact() {
        let config = full();
        assert_eq!(value_to_fraction(5.0, &config), 0.0);
        assert_eq!(value_to_fraction(45.0, &config), 1.0);
    }

    #[test]
    fn fraction_is_monotonic() {
        let config = full();
        let mut prev = -1.0;
        for i in 0..=400 {
            let value = 5.0 + f64::from(i) * 0.1;
            let f = value_to_fraction(value, &config);
            assert!(f >= prev, "not monotonic at {value}");
            assert!((0.0..=1.0).contains(&f));
            prev = f;
        }
    }

    #[test]
    fn out_of_range_clamps_without_nan() {
        let config = full();
        assert_eq!(value_to_fraction(-10.0, &config), 0.0);
        assert_eq!(value_to_fraction(100.0, &config), 1.0);
        assert_eq!(value_to_fraction(f64::NEG_INFINITY, &config), 0.0);
        assert_eq!(value_to_fraction(f64::INFINITY, &config), 1.0);
        assert_eq!(value_to_fraction(f64::NAN, &config), 0.0);
    }

    #[test]
    fn full_circle_starts_at_twelve() {
        let config = full();
        let angle = fraction_to_angle(0.0, &config);
        assert!((angle - (-90.0_f64).to_radians()).abs() < 1e-12);
    }

    #[test]
    fn halfway_click_reads_midpoint() {
        // 50% of a 5..45 full ring is the 6 o'clock position
        let config = full();
        let value = pointer_to_value(sample_at(90.0_f64.to_radians()), &config);
        assert_eq!(value, 25.0);
    }

    #[test]
    fn dead_region_clamps_to_nearest_endpoint() {
        let config = arc270();
        // straight down (+90°) is the middle of the dead 90° region;
        // just past the end edge clamps to max, just before start to min
        let near_end = pointer_to_value(sample_at(140.0_f64.to_radians()), &config);
        assert_eq!(near_end, 45.0);
        let near_start = pointer_to_value(sample_at((-140.0_f64).to_radians()), &config);
        assert_eq!(near_start, 5.0);
    }

    #[test]
    fn round_trips_within_one_unit() {
        let arc = arc270();
        for v in 5..=45 {
            let value = f64::from(v);
            let angle = fraction_to_angle(value_to_fraction(value, &arc), &arc);
            let back = pointer_to_value(sample_at(angle), &arc);
            assert!((back - value).abs() <= 1.0, "arc gauge {value} -> {back}");
        }
        // on a full ring min and max share a point, so the closing
        // endpoint is excluded from the round trip
        let full = full();
        for v in 5..45 {
            let value = f64::from(v);
            let angle = fraction_to_angle(value_to_fraction(value, &full), &full);
            let back = pointer_to_value(sample_at(angle), &full);
            assert!((back - value).abs() <= 1.0, "full ring {value} -> {back}");
        }
    }
}
