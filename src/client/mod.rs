//! HTTP client for the pool controller service.
//!
//! Polls run on background threads and report over a long-lived
//! channel; the single-threaded app drains results between frames.
//! Overlapping polls are tolerated (a slow response simply lands
//! late) and setpoint writes are fire-and-forget.

use serde::Deserialize;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// One reading set from `GET /api/jsmartPoolData`. Field names follow
/// the controller firmware; a null field means "no reading yet" and
/// leaves the last known value untouched.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PoolData {
    #[serde(rename = "Tmer")]
    pub current_temp: Option<f64>,
    #[serde(rename = "Tzad")]
    pub target_temp: Option<f64>,
    #[serde(rename = "pHmer")]
    pub ph: Option<f64>,
    #[serde(rename = "orp")]
    pub orp: Option<f64>,
    #[serde(rename = "Temp")]
    pub outside_temp: Option<f64>,
}

enum PollOutcome {
    Data(PoolData),
    Failed(String),
}

pub struct PoolClient {
    base_url: String,
    poll_interval: Duration,
    last_poll: Option<Instant>,
    tx: mpsc::Sender<PollOutcome>,
    rx: mpsc::Receiver<PollOutcome>,
    pub connected: bool,
    pub last_error: Option<String>,
}

impl PoolClient {
    pub fn new(base_url: String, poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval,
            last_poll: None,
            tx,
            rx,
            connected: false,
            last_error: None,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn agent() -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(500))
            .timeout_read(Duration::from_secs(2))
            .build()
    }

    /// Kick off a background fetch if the poll interval has elapsed.
    pub fn maybe_poll(&mut self) {
        let due = match self.last_poll {
            Some(t) => t.elapsed() >= self.poll_interval,
            None => true,
        };
        if due {
            self.poll_now();
        }
    }

    /// Fetch immediately and restart the interval from here.
    pub fn poll_now(&mut self) {
        self.spawn_fetch();
        self.last_poll = Some(Instant::now());
    }

    fn spawn_fetch(&self) {
        let tx = self.tx.clone();
        let url = format!("{}/api/jsmartPoolData", self.base_url);
        thread::spawn(move || {
            let outcome = match Self::agent().get(&url).call() {
                Ok(resp) => match resp.into_json::<PoolData>() {
                    Ok(data) => PollOutcome::Data(data),
                    Err(e) => PollOutcome::Failed(format!("malformed response: {e}")),
                },
                Err(e) => PollOutcome::Failed(e.to_string()),
            };
            // receiver may be gone during shutdown
            let _ = tx.send(outcome);
        });
    }

    /// Drain every result that arrived since the last call, oldest
    /// first, updating the connectivity flag along the way.
    pub fn drain(&mut self) -> Vec<PoolData> {
        let mut updates = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            match outcome {
                PollOutcome::Data(data) => {
                    self.connected = true;
                    self.last_error = None;
                    updates.push(data);
                }
                PollOutcome::Failed(e) => {
                    self.connected = false;
                    self.last_error = Some(e);
                }
            }
        }
        updates
    }

    /// Request a new target temperature. No retry, no confirmation;
    /// the next poll reflects whatever the controller accepted.
    pub fn push_target(&self, target: f64) {
        let url = format!("{}/api/jsmartPoolUpdate", self.base_url);
        thread::spawn(move || {
            let body = serde_json::json!({ "targetTemperature": target });
            let _ = Self::agent().post(&url).send_json(&body);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_firmware_fields() {
        let json = r#"{"Tmer": 27.5, "Tzad": 28.0, "pHmer": 7.21, "orp": 712.0, "Temp": 18.0}"#;
        let data: PoolData = serde_json::from_str(json).unwrap();
        assert_eq!(data.current_temp, Some(27.5));
        assert_eq!(data.target_temp, Some(28.0));
        assert_eq!(data.ph, Some(7.21));
        assert_eq!(data.orp, Some(712.0));
        assert_eq!(data.outside_temp, Some(18.0));
    }

    #[test]
    fn null_fields_deserialize_to_none() {
        let json = r#"{"Tmer": null, "Tzad": 28.0, "pHmer": null, "orp": null, "Temp": null}"#;
        let data: PoolData = serde_json::from_str(json).unwrap();
        assert_eq!(data.current_temp, None);
        assert_eq!(data.target_temp, Some(28.0));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let data: PoolData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.current_temp, None);
        assert_eq!(data.orp, None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PoolClient::new("http://pool:5000/".into(), Duration::from_secs(1));
        assert_eq!(client.base_url, "http://pool:5000");
    }
}
