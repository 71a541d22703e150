pub mod arc;
pub mod interaction;
pub mod interp;
pub mod mapper;

use color_eyre::eyre::{ensure, Result};

/// Geometry and range of one gauge instance. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeConfig {
    pub min_value: f64,
    pub max_value: f64,
    /// Diameter of the gauge face, in gauge units.
    pub size: f64,
    /// Ring thickness, in gauge units.
    pub stroke: f64,
    /// Where the indicator sits at `min_value`, degrees. 0° is 3 o'clock,
    /// angles grow clockwise (screen coordinates, y down).
    pub arc_start_deg: f64,
    /// Angular extent of the dial; 360 for a full ring.
    pub arc_span_deg: f64,
}

impl GaugeConfig {
    pub fn new(
        min_value: f64,
        max_value: f64,
        size: f64,
        stroke: f64,
        arc_start_deg: f64,
        arc_span_deg: f64,
    ) -> Result<Self> {
        ensure!(
            min_value < max_value,
            "degenerate gauge range {min_value}..{max_value}"
        );
        ensure!(
            arc_span_deg > 0.0 && arc_span_deg <= 360.0,
            "arc span {arc_span_deg}° outside (0, 360]"
        );
        ensure!(size > 0.0, "non-positive gauge size {size}");
        ensure!(
            stroke > 0.0 && stroke < size,
            "stroke {stroke} must be positive and thinner than the face"
        );
        Ok(Self {
            min_value,
            max_value,
            size,
            stroke,
            arc_start_deg,
            arc_span_deg,
        })
    }

    /// Full ring starting at 12 o'clock.
    pub fn full_circle(min_value: f64, max_value: f64, size: f64, stroke: f64) -> Result<Self> {
        Self::new(min_value, max_value, size, stroke, -90.0, 360.0)
    }

    /// Radius of the ring centerline.
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn value_span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Half-extent of the drawable square around the gauge center,
    /// including a margin for the indicator dot.
    pub fn half_extent(&self) -> f64 {
        self.size / 2.0 + self.stroke
    }
}

/// Mutable per-gauge state: the authoritative value and the animated
/// on-screen angle. The angle is only moved by an [`interp::Interpolator`]
/// (or snapped at initialization).
#[derive(Clone, Copy, Debug)]
pub struct GaugeState {
    pub current_value: f64,
    displayed_angle: f64,
}

impl GaugeState {
    /// Start with the indicator already on the value, no sweep-in.
    pub fn new(value: f64, config: &GaugeConfig) -> Self {
        let fraction = mapper::value_to_fraction(value, config);
        Self {
            current_value: value,
            displayed_angle: mapper::fraction_to_angle(fraction, config),
        }
    }

    pub fn displayed_angle(&self) -> f64 {
        self.displayed_angle
    }

    pub(crate) fn set_displayed_angle(&mut self, angle: f64) {
        self.displayed_angle = angle;
    }
}

/// One pointer event, in gauge units relative to the gauge center.
/// Screen convention: x grows right, y grows down.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}
