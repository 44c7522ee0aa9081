// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// The arithmetic mean of the last `period` closes, recomputed at every index.
// The output is index-aligned with the input: the first `period - 1` slots
// are absent because their window is not yet full.

use crate::error::IndicatorError;
use crate::series::Series;

/// Compute the SMA series for the given `closes` slice and look-back `period`.
///
/// Each window is summed fresh rather than maintained as a running sum, so
/// every output is bit-identical to the plain windowed mean.  Input sizes
/// here are a few thousand bars at most; the extra passes do not matter.
///
/// # Edge cases
/// - `period == 0` => `InvalidParameter`
/// - `closes.len() < period` => every slot absent
pub fn calculate_sma(closes: &[f64], period: usize) -> Result<Series, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::invalid("period", "must be >= 1"));
    }

    let mut result: Series = vec![None; closes.len()];
    if closes.len() < period {
        return Ok(result);
    }

    for i in period - 1..closes.len() {
        let window = &closes[i + 1 - period..=i];
        result[i] = Some(window.iter().sum::<f64>() / period as f64);
    }

    Ok(result)
}
