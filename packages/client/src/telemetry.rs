//! Mock telemetry publisher.
//!
//! Sends a random robot status reading on a fixed interval. Any connection
//! error is logged, followed by a pause and a reconnect.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tokio_tungstenite::tungstenite::Message;

use crate::{error::ClientError, session::connect};

pub const STATUSES: [&str; 3] = ["idle", "standing", "working"];
pub const LOCATIONS: [&str; 4] = ["corridor", "living room", "kitchen", "bedroom"];

/// Battery percentage range of mock readings (inclusive)
pub const BATTERY_RANGE: std::ops::RangeInclusive<u8> = 20..=100;

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingType {
    Telemetry,
}

/// One telemetry reading as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub r#type: ReadingType,
    pub battery: u8,
    pub status: String,
    pub location: String,
}

impl TelemetryReading {
    /// Random reading drawn from the mock value tables.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r#type: ReadingType::Telemetry,
            battery: rng.gen_range(BATTERY_RANGE),
            status: STATUSES.choose(rng).copied().unwrap_or("idle").to_string(),
            location: LOCATIONS
                .choose(rng)
                .copied()
                .unwrap_or("corridor")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub url: String,
    /// Pause between readings
    pub interval: Duration,
    /// Pause before reconnecting after an error
    pub retry_delay: Duration,
    /// Stop after this many readings; `None` runs forever
    pub max_readings: Option<usize>,
}

impl TelemetryConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interval: Duration::from_secs(3),
            retry_delay: Duration::from_secs(5),
            max_readings: None,
        }
    }
}

/// Publish readings, reconnecting after every failure.
///
/// Only returns once `max_readings` readings have been sent, or right away
/// with `ClientError::ZeroInterval` when `interval` is zero.
pub async fn run_telemetry(config: &TelemetryConfig) -> Result<(), ClientError> {
    if config.interval.is_zero() {
        return Err(ClientError::ZeroInterval);
    }

    let mut sent = 0;
    loop {
        match telemetry_session(config, &mut sent).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::warn!("Telemetry error: {}", e);
                tracing::info!("Retrying in {} seconds...", config.retry_delay.as_secs_f32());
                tokio::time::sleep(config.retry_delay).await;
            }
        }
    }
}

async fn telemetry_session(config: &TelemetryConfig, sent: &mut usize) -> Result<(), ClientError> {
    let stream = connect(&config.url).await?;
    tracing::info!("Telemetry connected to {}", config.url);
    let (mut sink, mut source) = stream.split();
    let mut ticker = tokio::time::interval(config.interval);

    loop {
        if config.max_readings.is_some_and(|max| *sent >= max) {
            let _ = sink.close().await;
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {
                let reading = TelemetryReading::random(&mut rand::thread_rng());
                let payload = serde_json::to_string(&reading)?;
                sink.send(Message::text(payload)).await?;
                *sent += 1;
                tracing::info!("Sent: {:?}", reading);
            }
            // Drain broadcasts (including our own readings) so the socket never backs up
            frame = source.next() => match frame {
                Some(Ok(Message::Close(_))) | None => return Err(ClientError::Closed),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_reading_uses_mock_tables() {
        // テスト項目: ランダムな計測値が定義済みの範囲・候補から選ばれる
        // given (前提条件):
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            // when (操作):
            let reading = TelemetryReading::random(&mut rng);

            // then (期待する結果):
            assert!(BATTERY_RANGE.contains(&reading.battery));
            assert!(STATUSES.contains(&reading.status.as_str()));
            assert!(LOCATIONS.contains(&reading.location.as_str()));
        }
    }

    #[test]
    fn test_reading_wire_format() {
        // テスト項目: 送信形式が {"type":"telemetry",...} になる
        let reading = TelemetryReading {
            r#type: ReadingType::Telemetry,
            battery: 55,
            status: "working".to_string(),
            location: "kitchen".to_string(),
        };

        let value = serde_json::to_value(&reading).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "type": "telemetry",
                "battery": 55,
                "status": "working",
                "location": "kitchen"
            })
        );
    }

    #[tokio::test]
    async fn test_zero_interval_is_rejected_before_connecting() {
        // テスト項目: 送信間隔 0 は接続前にエラーになる（パニックしない）
        // given (前提条件): 接続先は存在しないが、接続は試みられない
        let config = TelemetryConfig {
            interval: Duration::ZERO,
            ..TelemetryConfig::new("ws://127.0.0.1:9")
        };

        // when (操作):
        let result = run_telemetry(&config).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::ZeroInterval)));
    }

    #[test]
    fn test_config_defaults() {
        let config = TelemetryConfig::new("ws://127.0.0.1:8080");
        assert_eq!(config.interval, Duration::from_secs(3));
        assert_eq!(config.retry_delay, Duration::from_secs(5));
        assert_eq!(config.max_readings, None);
    }
}
