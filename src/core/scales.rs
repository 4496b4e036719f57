//! Scales: map trade attributes onto visual-space values
//!
//! - `delta`  -> y offset (fixed linear domain)
//! - `volume` -> sphere radius (linear over the data extent)
//! - `created_time` -> z depth (time-linear over the data extent)
//! - `underlying_symbol` -> color (ordinal over a 10-color palette)
//!
//! Data-driven domains need the whole dataset, so a [`ScaleBank`] is always
//! built from the full trade list before any sphere exists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::error::RecordDefect;
use super::trades::TradeRecord;

/// 8-bit sRGB color
pub type Rgb = [u8; 3];

pub const DELTA_DOMAIN: [f64; 2] = [-2.0, 2.0];
pub const DELTA_RANGE: [f64; 2] = [-50.0, 50.0];
pub const VOLUME_RANGE: [f64; 2] = [0.2, 3.0];
pub const TIME_RANGE: [f64; 2] = [-50.0, 30.0];

/// Domain used when there is no data to take an extent from
pub const FALLBACK_DOMAIN: [f64; 2] = [0.0, 1.0];

/// The classic "category10" palette
pub const CATEGORY10: [Rgb; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

/// Min and max of the finite values, `None` if there are none
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear map from a domain interval onto a range interval.
///
/// Values outside the domain extrapolate. A zero-width domain maps every
/// input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Domain from a data extent, or [`FALLBACK_DOMAIN`] when there is none
    pub fn from_extent(extent: Option<(f64, f64)>, range: [f64; 2]) -> Self {
        let domain = extent.map_or(FALLBACK_DOMAIN, |(lo, hi)| [lo, hi]);
        Self::new(domain, range)
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Linear scale over wall-clock time (milliseconds since the epoch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    extent: Option<(DateTime<Utc>, DateTime<Utc>)>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn from_times(times: impl IntoIterator<Item = DateTime<Utc>>, range: [f64; 2]) -> Self {
        let extent = times.into_iter().fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((t.min(lo), t.max(hi))),
        });
        let millis = extent.map(|(lo, hi)| (to_millis(lo), to_millis(hi)));
        Self {
            extent,
            linear: LinearScale::from_extent(millis, range),
        }
    }

    /// Earliest and latest timestamp seen
    pub fn extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.extent
    }

    pub fn apply(&self, t: DateTime<Utc>) -> f64 {
        self.linear.apply(to_millis(t))
    }
}

fn to_millis(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64
}

/// Categorical color assignment in first-seen order.
///
/// Key `n` (zero-based, in registration order) gets `palette[n % len]`.
#[derive(Debug, Clone)]
pub struct OrdinalScale {
    palette: &'static [Rgb],
    slots: HashMap<String, usize>,
}

impl OrdinalScale {
    pub fn new(palette: &'static [Rgb]) -> Self {
        Self {
            palette,
            slots: HashMap::new(),
        }
    }

    pub fn category10() -> Self {
        Self::new(&CATEGORY10)
    }

    /// Assign a slot to `key` if it has none yet, and return its color
    pub fn register(&mut self, key: &str) -> Rgb {
        let next = self.slots.len();
        let slot = *self.slots.entry(key.to_string()).or_insert(next);
        self.palette[slot % self.palette.len()]
    }

    /// Color for `key`.
    ///
    /// Unregistered keys get the color the next registration would receive,
    /// without being recorded.
    pub fn color(&self, key: &str) -> Rgb {
        let slot = self.slots.get(key).copied().unwrap_or(self.slots.len());
        self.palette[slot % self.palette.len()]
    }

    /// Number of distinct keys registered
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Per-record visual encoding, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEncoding {
    pub y_offset: f32,
    pub radius: f32,
    pub z_depth: f32,
    pub color: Rgb,
}

/// The four scales, configured from one full pass over the trades
#[derive(Debug, Clone)]
pub struct ScaleBank {
    pub delta: LinearScale,
    pub volume: LinearScale,
    pub time: TimeScale,
    pub color: OrdinalScale,
}

impl ScaleBank {
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        let delta = LinearScale::new(DELTA_DOMAIN, DELTA_RANGE);

        let volume_extent = extent(trades.iter().filter_map(|t| t.checked_volume().ok()));
        let volume = LinearScale::from_extent(volume_extent, VOLUME_RANGE);

        let time = TimeScale::from_times(
            trades.iter().filter_map(|t| t.timestamp().ok()),
            TIME_RANGE,
        );

        // Colors are handed out in the order spheres will be visited.
        let mut color = OrdinalScale::category10();
        for trade in trades.iter().filter(|t| t.has_delta()) {
            color.register(&trade.underlying_symbol);
        }

        match time.extent() {
            Some((first, last)) => info!(%first, %last, "Time extent"),
            None => info!("Time extent empty"),
        }
        debug!(
            volume_domain = ?volume.domain(),
            symbols = color.len(),
            "Scales configured"
        );

        Self {
            delta,
            volume,
            time,
            color,
        }
    }

    /// Encode one record, or report why it cannot be drawn
    pub fn encode(&self, trade: &TradeRecord) -> Result<VisualEncoding, RecordDefect> {
        let delta = trade.delta_value()?;
        let volume = trade.checked_volume()?;
        let created = trade.timestamp()?;

        Ok(VisualEncoding {
            y_offset: self.delta.apply(delta) as f32,
            radius: self.volume.apply(volume) as f32,
            z_depth: self.time.apply(created) as f32,
            color: self.color.color(&trade.underlying_symbol),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trades::{parse_timestamp, RawNumber};
    use approx::assert_relative_eq;

    fn trade(delta: &str, volume: f64, time: &str, symbol: &str) -> TradeRecord {
        TradeRecord {
            delta: Some(RawNumber::Text(delta.to_string())),
            volume: Some(RawNumber::Number(volume)),
            created_time: time.to_string(),
            underlying_symbol: symbol.to_string(),
        }
    }

    #[test]
    fn test_delta_scale_extrapolates() {
        let s = LinearScale::new(DELTA_DOMAIN, DELTA_RANGE);
        assert_relative_eq!(s.apply(0.0), 0.0);
        assert_relative_eq!(s.apply(1.0), 25.0);
        assert_relative_eq!(s.apply(-2.0), -50.0);
        assert_relative_eq!(s.apply(4.0), 100.0);
    }

    #[test]
    fn test_volume_scale_endpoints_and_monotonic() {
        let trades = vec![
            trade("1", 100.0, "2023-01-01", "A"),
            trade("1", 250.0, "2023-01-02", "A"),
            trade("1", 300.0, "2023-01-03", "A"),
        ];
        let bank = ScaleBank::from_trades(&trades);
        assert_relative_eq!(bank.volume.apply(100.0), 0.2, epsilon = 1e-12);
        assert_relative_eq!(bank.volume.apply(300.0), 3.0, epsilon = 1e-12);

        let mut prev = f64::MIN;
        for v in (100..=300).step_by(10) {
            let r = bank.volume.apply(v as f64);
            assert!(r >= prev, "volume scale must not decrease");
            prev = r;
        }
    }

    #[test]
    fn test_time_scale_endpoints_and_monotonic() {
        let trades = vec![
            trade("1", 1.0, "2023-12-31", "A"),
            trade("1", 1.0, "2023-01-01", "A"),
            trade("1", 1.0, "2023-06-01", "A"),
        ];
        let bank = ScaleBank::from_trades(&trades);
        let first = parse_timestamp("2023-01-01").unwrap();
        let mid = parse_timestamp("2023-06-01").unwrap();
        let last = parse_timestamp("2023-12-31").unwrap();
        assert_relative_eq!(bank.time.apply(first), -50.0, epsilon = 1e-9);
        assert_relative_eq!(bank.time.apply(last), 30.0, epsilon = 1e-9);
        assert!(bank.time.apply(first) < bank.time.apply(mid));
        assert!(bank.time.apply(mid) < bank.time.apply(last));
        assert_eq!(bank.time.extent(), Some((first, last)));
    }

    #[test]
    fn test_degenerate_domains_map_to_midpoint() {
        let trades = vec![
            trade("1", 42.0, "2023-03-03", "A"),
            trade("1", 42.0, "2023-03-03", "B"),
        ];
        let bank = ScaleBank::from_trades(&trades);
        assert_relative_eq!(bank.volume.apply(42.0), 1.6);
        assert_relative_eq!(bank.volume.apply(1000.0), 1.6);
        let t = parse_timestamp("2023-03-03").unwrap();
        assert_relative_eq!(bank.time.apply(t), -10.0);
    }

    #[test]
    fn test_empty_trades_use_fallback_domain() {
        let bank = ScaleBank::from_trades(&[]);
        assert_eq!(bank.volume.domain(), FALLBACK_DOMAIN);
        assert_relative_eq!(bank.volume.apply(0.5), 1.6);
        assert!(bank.time.extent().is_none());
        assert!(bank.color.is_empty());
    }

    #[test]
    fn test_extent_skips_non_finite() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, f64::INFINITY]), Some((-1.0, 3.0)));
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_color_scale_stable_and_distinct() {
        let mut scale = OrdinalScale::category10();
        let symbols: Vec<String> = (0..10).map(|i| format!("SYM{i}")).collect();
        let colors: Vec<Rgb> = symbols.iter().map(|s| scale.register(s)).collect();

        for (s, c) in symbols.iter().zip(&colors) {
            assert_eq!(scale.color(s), *c);
            assert_eq!(scale.register(s), *c);
        }
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j], "symbols {} and {} share a color", i, j);
            }
        }
    }

    #[test]
    fn test_color_scale_wraps_after_ten() {
        let mut scale = OrdinalScale::category10();
        for i in 0..10 {
            scale.register(&format!("SYM{i}"));
        }
        assert_eq!(scale.register("ELEVENTH"), CATEGORY10[0]);
        assert_eq!(scale.len(), 11);
    }

    #[test]
    fn test_color_order_follows_emitted_records() {
        let trades = vec![
            trade("", 1.0, "2023-01-01", "SKIP"),
            trade("1", 1.0, "2023-01-02", "FIRST"),
            trade("1", 1.0, "2023-01-03", "SECOND"),
        ];
        let bank = ScaleBank::from_trades(&trades);
        assert_eq!(bank.color.color("FIRST"), CATEGORY10[0]);
        assert_eq!(bank.color.color("SECOND"), CATEGORY10[1]);
        assert_eq!(bank.color.len(), 2);
    }

    #[test]
    fn test_encode_reports_defects() {
        let trades = vec![trade("abc", 1.0, "2023-01-01", "A")];
        let bank = ScaleBank::from_trades(&trades);
        assert!(matches!(
            bank.encode(&trades[0]),
            Err(RecordDefect::InvalidDelta(_))
        ));

        let bad_time = trade("1", 1.0, "not a date", "A");
        assert!(matches!(
            bank.encode(&bad_time),
            Err(RecordDefect::InvalidTimestamp(_))
        ));

        let bad_volume = trade("1", f64::NAN, "2023-01-01", "A");
        assert!(matches!(
            bank.encode(&bad_volume),
            Err(RecordDefect::InvalidVolume(_))
        ));
    }
}
