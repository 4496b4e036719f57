//! Options trade records and the JSON data source
//!
//! Records are loaded once and never mutated. The bundled demo dataset is
//! compiled in so both the desktop and the web build have something to show
//! without any file access.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use super::error::{DataError, RecordDefect};

/// Demo trades shipped with the crate
pub const DEMO_TRADES_JSON: &str = include_str!("../../data/play_data.json");

/// Numeric field as it appears in the feed: sometimes quoted, sometimes not
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Whether the value counts as present. Empty strings and zero do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            RawNumber::Number(n) => *n != 0.0 && !n.is_nan(),
            RawNumber::Text(s) => !s.is_empty(),
        }
    }

    /// Finite numeric value, `None` when the text is not a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|v| v.is_finite())
    }

    fn raw(&self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s.clone(),
        }
    }
}

/// One options trade.
///
/// Every field tolerates null or absence so that one bad record cannot
/// reject the whole file; such records surface later as [`RecordDefect`]s.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeRecord {
    #[serde(default)]
    pub delta: Option<RawNumber>,
    #[serde(default)]
    pub volume: Option<RawNumber>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub underlying_symbol: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TradeRecord {
    /// Records without a truthy delta never become spheres
    pub fn has_delta(&self) -> bool {
        self.delta.as_ref().is_some_and(RawNumber::is_truthy)
    }

    pub fn delta_value(&self) -> Result<f64, RecordDefect> {
        let delta = self
            .delta
            .as_ref()
            .ok_or_else(|| RecordDefect::InvalidDelta(String::new()))?;
        delta
            .as_f64()
            .ok_or_else(|| RecordDefect::InvalidDelta(delta.raw()))
    }

    pub fn timestamp(&self) -> Result<DateTime<Utc>, RecordDefect> {
        parse_timestamp(&self.created_time)
    }

    pub fn checked_volume(&self) -> Result<f64, RecordDefect> {
        match &self.volume {
            Some(volume) => volume
                .as_f64()
                .ok_or_else(|| RecordDefect::InvalidVolume(volume.raw())),
            None => Err(RecordDefect::InvalidVolume("null".to_string())),
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339, a naive date-time (taken as UTC) or a bare `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RecordDefect> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| RecordDefect::InvalidTimestamp(raw.to_string()))
}

/// Parse a JSON array of trades
pub fn load_trades_json(json: &str) -> Result<Vec<TradeRecord>, DataError> {
    let trades: Vec<TradeRecord> = serde_json::from_str(json)?;
    debug!(count = trades.len(), "Parsed trade records");
    Ok(trades)
}

/// Read and parse a JSON trade file
pub fn load_trades_file(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>, DataError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let trades = load_trades_json(&json)?;
    info!(path = %path.display(), count = trades.len(), "Loaded trades from file");
    Ok(trades)
}

/// The bundled demo dataset
pub fn demo_trades() -> Result<Vec<TradeRecord>, DataError> {
    load_trades_json(DEMO_TRADES_JSON)
}
