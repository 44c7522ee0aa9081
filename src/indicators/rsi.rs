// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the simple average of the
//          first `period` gains / losses; the first defined RSI lands at
//          closes index `period` (one bar later than an SMA of the same
//          period seeds — the deltas array is one shorter than the closes).
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS), or 100 when avg_loss is zero.
//
// Thresholds:  RSI >= 70 => OVERBOUGHT,  RSI <= 30 => OVERSOLD.

use crate::error::IndicatorError;
use crate::series::Series;

/// Default look-back used by the dashboard.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute the full RSI series for the given `closes` and `period`.
///
/// Output is index-aligned with the input.  Slot 0 is always absent (there
/// is no prior close to diff against) and the first defined value sits at
/// index `period`.
///
/// # Edge cases
/// - `period == 0` => `InvalidParameter`
/// - `closes.len() < period + 1` => every slot absent (not enough deltas)
/// - `avg_loss == 0` (no down moves yet) => RSI pinned to 100.0
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<Series, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::invalid("period", "must be >= 1"));
    }

    let mut result: Series = vec![None; closes.len()];
    if closes.len() < period + 1 {
        return Ok(result);
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // Seed averages with the simple mean of the first `period` deltas.
    let (sum_gain, sum_loss) =
        deltas[..period]
            .iter()
            .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
                if d > 0.0 {
                    (g + d, l)
                } else {
                    (g, l - d)
                }
            });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for the rest of the series.
    for (j, &delta) in deltas.iter().enumerate().skip(period) {
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        // deltas[j] is the change into closes[j + 1].
        result[j + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(result)
}

/// Latest defined RSI value together with the zone label the dashboard's
/// alert row displays.
///
/// Returns `None` when no RSI value is defined yet.
pub fn current_rsi(
    closes: &[f64],
    period: usize,
) -> Result<Option<(f64, &'static str)>, IndicatorError> {
    let series = calculate_rsi(closes, period)?;
    let value = match series.iter().rev().find_map(|v| *v) {
        Some(v) => v,
        None => return Ok(None),
    };

    let label = if value >= 70.0 {
        "OVERBOUGHT"
    } else if value <= 30.0 {
        "OVERSOLD"
    } else {
        "NEUTRAL"
    };

    Ok(Some((value, label)))
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// A zero average loss means no down moves in the window — RSI saturates at
/// 100 rather than dividing by zero.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
