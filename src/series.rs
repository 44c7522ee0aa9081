// =============================================================================
// OHLCV series types and preprocessing
// =============================================================================
//
// The history provider hands the dashboard a list of bar records in whatever
// shape and order its upstream produced: possibly unsorted, possibly with
// duplicate dates, possibly with fields missing entirely.  `preprocess`
// normalizes that into the clean, ascending, unique-dated `Bar` sequence that
// every indicator in this crate is computed against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::IndicatorError;

/// One indicator output slot per input bar.  `None` means "not yet defined"
/// (a moving-average warm-up window, the bar before the first RSI delta, a
/// zero-volume VWAP prefix) and must never be collapsed into `0.0` — the
/// chart renders a gap for `None` and a real trace point for `Some(0.0)`.
pub type Series = Vec<Option<f64>>;

/// A bar record exactly as the history provider sends it.  Every field is
/// optional because upstream feeds routinely omit fields on halted or
/// partially reported sessions; validation happens in [`preprocess`], not in
/// the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBar {
    #[serde(default)]
    pub time: Option<NaiveDate>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// A single validated OHLCV observation.  Produced by [`preprocess`] and
/// never mutated afterwards; the indicator functions only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl RawBar {
    /// Promote to a [`Bar`] when every required field is present.
    ///
    /// `volume` is the one optional field — a missing volume becomes `0.0`
    /// rather than dropping the bar, since price-only indicators still work.
    fn validate(&self) -> Option<Bar> {
        Some(Bar {
            time: self.time?,
            open: self.open?,
            high: self.high?,
            low: self.low?,
            close: self.close?,
            volume: self.volume.unwrap_or(0.0),
        })
    }
}

/// Normalize a raw provider response into the bar sequence the indicators
/// consume.
///
/// Steps, in order:
/// 1. Drop every record missing `time`, `open`, `high`, `low`, or `close`.
/// 2. Sort ascending by `time` (stable, so provider order breaks ties).
/// 3. Collapse runs of equal `time`, keeping the first bar of each run.
///
/// Pure and idempotent — preprocessing an already-clean sequence returns it
/// unchanged.
///
/// # Errors
/// Returns [`IndicatorError::EmptySeries`] when nothing survives step 1, so
/// the caller is forced into its "no data" rendering branch instead of
/// feeding an empty slice downstream by accident.
pub fn preprocess(raw: &[RawBar]) -> Result<Vec<Bar>, IndicatorError> {
    let mut bars: Vec<Bar> = Vec::with_capacity(raw.len());
    for record in raw {
        match record.validate() {
            Some(bar) => bars.push(bar),
            None => {
                warn!(time = ?record.time, "dropping bar with missing OHLC field");
            }
        }
    }

    bars.sort_by_key(|b| b.time);
    bars.dedup_by_key(|b| b.time);

    if bars.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }

    debug!(
        raw = raw.len(),
        clean = bars.len(),
        "preprocessed bar series"
    );
    Ok(bars)
}

/// Extract the closing-price slice the single-input indicators run on.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
