// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ).  σ is the *population* standard deviation of
// the same window as the SMA (divide by `period`, not `period - 1`).

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::sma::calculate_sma;
use crate::series::Series;

/// Default (period, k) used by the dashboard.
pub const DEFAULT_BOLLINGER_PARAMS: (usize, f64) = (20, 2.0);

/// The three index-aligned band series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// Calculate Bollinger Bands over the full closing-price series.
///
/// The bands are absent exactly where the middle SMA is absent, so all three
/// series share the input length and warm-up window.
///
/// # Edge cases
/// - `period == 0` => `InvalidParameter`
/// - `closes.len() < period` => every slot of every band absent
/// - constant window => zero deviation, all three bands coincide
pub fn calculate_bollinger(
    closes: &[f64],
    period: usize,
    k: f64,
) -> Result<BollingerOutput, IndicatorError> {
    let middle = calculate_sma(closes, period)?;

    let mut upper: Series = vec![None; closes.len()];
    let mut lower: Series = vec![None; closes.len()];

    for (i, mid) in middle.iter().enumerate() {
        let Some(mid) = mid else { continue };

        let window = &closes[i + 1 - period..=i];
        let variance =
            window.iter().map(|x| (x - mid).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();

        upper[i] = Some(mid + k * std_dev);
        lower[i] = Some(mid - k * std_dev);
    }

    Ok(BollingerOutput {
        upper,
        middle,
        lower,
    })
}
