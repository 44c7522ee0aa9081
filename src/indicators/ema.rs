// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = (close_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The first EMA value sits at index `period - 1` and is seeded with the SMA
// of the first `period` closes.  MACD depends on this exact seeding rule for
// numeric compatibility, so it must not change.

use crate::error::IndicatorError;
use crate::series::Series;

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// Output is index-aligned with the input; slots before the seed are absent.
///
/// # Edge cases
/// - `period == 0` => `InvalidParameter`
/// - `closes.len() < period` => every slot absent
pub fn calculate_ema(closes: &[f64], period: usize) -> Result<Series, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::invalid("period", "must be >= 1"));
    }

    let mut result: Series = vec![None; closes.len()];
    if closes.len() < period {
        return Ok(result);
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let seed: f64 = closes[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(seed);

    let mut prev_ema = seed;
    for i in period..closes.len() {
        let ema = (closes[i] - prev_ema) * multiplier + prev_ema;
        result[i] = Some(ema);
        prev_ema = ema;
    }

    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sma::calculate_sma;

    #[test]
    fn ema_period_zero_is_invalid() {
        assert!(calculate_ema(&[1.0, 2.0, 3.0], 0).is_err());
    }

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn ema_period_exceeds_length() {
        let out = calculate_ema(&[1.0, 2.0], 5).unwrap();
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn ema_flat_input_stays_flat() {
        let out = calculate_ema(&[1.0, 1.0, 1.0, 1.0, 1.0], 3).unwrap();
        assert_eq!(out, vec![None, None, Some(1.0), Some(1.0), Some(1.0)]);
    }

    #[test]
    fn ema_seed_equals_sma_at_same_index() {
        let closes = vec![
            22.27, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23, 22.43, 22.24, 22.29,
        ];
        for period in 1..=closes.len() {
            let ema = calculate_ema(&closes, period).unwrap();
            let sma = calculate_sma(&closes, period).unwrap();
            assert!(
                (ema[period - 1].unwrap() - sma[period - 1].unwrap()).abs() < 1e-10,
                "period {period}: seed diverges from SMA"
            );
        }
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..10]: seed = 3.0, multiplier = 1/3.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let out = calculate_ema(&closes, 5).unwrap();

        assert_eq!(out.len(), closes.len());
        assert!(out[..4].iter().all(Option::is_none));

        let mult = 2.0 / 6.0;
        let mut expected = 3.0;
        assert!((out[4].unwrap() - expected).abs() < 1e-10);
        for i in 5..closes.len() {
            expected = (closes[i] - expected) * mult + expected;
            assert!(
                (out[i].unwrap() - expected).abs() < 1e-10,
                "index {i}: got {:?}, expected {expected}",
                out[i]
            );
        }
    }
}
