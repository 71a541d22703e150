/// Format a water temperature with one decimal (e.g., "27.5°C").
pub fn format_temp(celsius: f64) -> String {
    format!("{celsius:.1}\u{00b0}C")
}

/// Format a setpoint as a whole degree (e.g., "28°C").
pub fn format_setpoint(celsius: f64) -> String {
    format!("{celsius:.0}\u{00b0}C")
}

/// Format a pH reading with two decimals.
pub fn format_ph(ph: f64) -> String {
    format!("{ph:.2}")
}

/// Format an ORP reading in millivolts (e.g., "712 mV").
pub fn format_orp(orp_mv: f64) -> String {
    format!("{orp_mv:.0} mV")
}

/// Format a millisecond interval compactly ("2.5s" or "250ms").
pub fn format_interval(ms: u128) -> String {
    if ms >= 1000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{ms}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(format_temp(27.46), "27.5\u{00b0}C");
        assert_eq!(format_setpoint(28.0), "28\u{00b0}C");
        assert_eq!(format_ph(7.213), "7.21");
        assert_eq!(format_orp(711.6), "712 mV");
        assert_eq!(format_interval(2500), "2.5s");
        assert_eq!(format_interval(250), "250ms");
    }
}
