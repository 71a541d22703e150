//! Pool domain rules: preset types, temperature classification, and
//! water-chemistry thresholds.

use std::collections::VecDeque;

/// Gauge range shared by both temperature gauges, wide enough to cover
/// every preset.
pub const TEMP_MIN: f64 = 5.0;
pub const TEMP_MAX: f64 = 45.0;

/// Slack around a preset's comfort band before a reading counts as an
/// outright fault rather than a drift.
const TOLERANCE: f64 = 3.0;

pub const PH_GOOD_MIN: f64 = 7.0;
pub const PH_GOOD_MAX: f64 = 7.8;
pub const ORP_GOOD_MIN_MV: f64 = 650.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolType {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub ideal: f64,
}

pub const POOL_TYPES: &[PoolType] = &[
    PoolType { id: "recreational", name: "Recreational Pool", min: 26.0, max: 30.0, ideal: 28.0 },
    PoolType { id: "lap", name: "Lap / Competition Pool", min: 25.0, max: 28.0, ideal: 26.5 },
    PoolType { id: "therapy", name: "Therapy / Rehabilitation Pool", min: 32.0, max: 35.0, ideal: 33.5 },
    PoolType { id: "kids", name: "Kids / Toddler Pool", min: 30.0, max: 34.0, ideal: 32.0 },
    PoolType { id: "spa", name: "Hot Tub / Spa Pool", min: 36.0, max: 40.0, ideal: 38.0 },
    PoolType { id: "cold", name: "Cold Plunge Pool", min: 10.0, max: 15.0, ideal: 12.5 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TempStatus {
    TooCold,
    BelowIdeal,
    Ideal,
    AboveIdeal,
    TooHot,
}

impl PoolType {
    pub fn by_id(id: &str) -> &'static PoolType {
        POOL_TYPES
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&POOL_TYPES[0])
    }

    /// Classify a water temperature against this preset's comfort band.
    /// Readings exactly on the band edges count as ideal.
    pub fn classify(&self, temp: f64) -> TempStatus {
        if temp > self.max + TOLERANCE {
            TempStatus::TooHot
        } else if temp > self.max {
            TempStatus::AboveIdeal
        } else if temp < self.min - TOLERANCE {
            TempStatus::TooCold
        } else if temp < self.min {
            TempStatus::BelowIdeal
        } else {
            TempStatus::Ideal
        }
    }

    pub fn status_message(&self, temp: f64) -> String {
        let detail = format!(
            "Ideal: {}\u{00b0}C (Range: {}-{}\u{00b0}C)",
            self.ideal, self.min, self.max
        );
        match self.classify(temp) {
            TempStatus::TooHot => format!("Temperature too high! {detail}"),
            TempStatus::AboveIdeal => format!("Temperature above ideal! {detail}"),
            TempStatus::TooCold => format!("Temperature too low! {detail}"),
            TempStatus::BelowIdeal => format!("Temperature below ideal! {detail}"),
            TempStatus::Ideal => format!("Perfect temperature! {detail}"),
        }
    }
}

pub fn ph_is_good(ph: f64) -> bool {
    (PH_GOOD_MIN..=PH_GOOD_MAX).contains(&ph)
}

pub fn orp_is_good(orp_mv: f64) -> bool {
    orp_mv > ORP_GOOD_MIN_MV
}

/// Rolling window of recent readings for the history sparkline.
/// 240 samples covers 10 minutes at the default 2.5 s poll.
#[derive(Clone)]
pub struct History {
    data: VecDeque<f64>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        const CAPACITY: usize = 240;
        Self {
            data: VecDeque::with_capacity(CAPACITY),
            capacity: CAPACITY,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Most recent `count` samples as sparkline heights. Temperatures
    /// are scaled by 10 so tenths of a degree stay visible.
    pub fn as_u64_vec(&self, count: usize) -> Vec<u64> {
        let skip = self.data.len().saturating_sub(count);
        self.data
            .iter()
            .skip(skip)
            .map(|&v| (v.max(0.0) * 10.0) as u64)
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_ideal() {
        let pool = PoolType::by_id("recreational");
        assert_eq!(pool.classify(26.0), TempStatus::Ideal);
        assert_eq!(pool.classify(30.0), TempStatus::Ideal);
        assert_eq!(pool.classify(28.0), TempStatus::Ideal);
    }

    #[test]
    fn tolerance_splits_drift_from_fault() {
        let pool = PoolType::by_id("recreational");
        assert_eq!(pool.classify(31.0), TempStatus::AboveIdeal);
        assert_eq!(pool.classify(33.0), TempStatus::AboveIdeal);
        assert_eq!(pool.classify(33.1), TempStatus::TooHot);
        assert_eq!(pool.classify(25.0), TempStatus::BelowIdeal);
        assert_eq!(pool.classify(23.0), TempStatus::BelowIdeal);
        assert_eq!(pool.classify(22.9), TempStatus::TooCold);
    }

    #[test]
    fn unknown_preset_falls_back_to_first() {
        assert_eq!(PoolType::by_id("no-such-pool").id, "recreational");
    }

    #[test]
    fn chemistry_thresholds() {
        assert!(ph_is_good(7.0));
        assert!(ph_is_good(7.8));
        assert!(!ph_is_good(6.99));
        assert!(!ph_is_good(7.81));
        assert!(orp_is_good(651.0));
        assert!(!orp_is_good(650.0));
    }

    #[test]
    fn history_caps_and_scales() {
        let mut h = History::new();
        for i in 0..300 {
            h.push(f64::from(i % 40));
        }
        let v = h.as_u64_vec(usize::MAX);
        assert_eq!(v.len(), 240);
        let mut h = History::new();
        h.push(27.5);
        assert_eq!(h.as_u64_vec(10), vec![275]);
    }
}
