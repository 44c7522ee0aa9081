// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line  = EMA(fast) - EMA(slow)
// Signal     = EMA(signal) over the *defined* MACD values only
// Histogram  = MACD line - Signal
//
// The signal line is the subtle part: the MACD line starts with a warm-up of
// absent slots (one per slot where the slow EMA is still undefined).  The
// signal EMA must run over a compacted array holding only the defined MACD
// values and then be re-expanded to full length, each signal value landing at
// the index of its source MACD value.  Running the EMA over the raw
// full-length array would treat the warm-up as data and shift every value.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::ema::calculate_ema;
use crate::series::Series;

/// Default (fast, slow, signal) periods used by the dashboard.
pub const DEFAULT_MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);

/// The three index-aligned series a MACD panel draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

/// Compute MACD for the given closes.
///
/// All three output series have exactly the input length.
///
/// # Edge cases
/// - any period of zero, or `fast >= slow` => `InvalidParameter`
/// - input shorter than `slow` => every slot of every series absent
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput, IndicatorError> {
    if fast == 0 {
        return Err(IndicatorError::invalid("fast", "must be >= 1"));
    }
    if slow == 0 {
        return Err(IndicatorError::invalid("slow", "must be >= 1"));
    }
    if signal == 0 {
        return Err(IndicatorError::invalid("signal", "must be >= 1"));
    }
    if fast >= slow {
        return Err(IndicatorError::invalid(
            "fast",
            format!("fast period {fast} must be below slow period {slow}"),
        ));
    }

    let ema_fast = calculate_ema(closes, fast)?;
    let ema_slow = calculate_ema(closes, slow)?;

    let macd: Series = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // Compact the defined MACD values, remembering where each came from.
    let mut defined_values: Vec<f64> = Vec::with_capacity(macd.len());
    let mut defined_indices: Vec<usize> = Vec::with_capacity(macd.len());
    for (i, v) in macd.iter().enumerate() {
        if let Some(v) = v {
            defined_values.push(*v);
            defined_indices.push(i);
        }
    }

    let compact_signal = calculate_ema(&defined_values, signal)?;

    // Re-expand: each compacted signal slot maps back to its source index.
    let mut signal_line: Series = vec![None; macd.len()];
    for (slot, value) in defined_indices.iter().zip(compact_signal.iter()) {
        signal_line[*slot] = *value;
    }

    let histogram: Series = macd
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Ok(MacdOutput {
        macd,
        signal: signal_line,
        histogram,
    })
}
