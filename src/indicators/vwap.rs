// =============================================================================
// Volume Weighted Average Price (VWAP)
// =============================================================================
//
// A cumulative statistic over the whole series, not a windowed one:
//
//   typical_price = (high + low + close) / 3
//   VWAP_i        = Σ typical_price * volume  /  Σ volume     (over bars 0..=i)
//
// There is no warm-up window; a slot is absent only while the cumulative
// volume is still exactly zero.  The accumulation is never reset — resetting
// per trading session is a caller policy, not enforced here.

use crate::series::{Bar, Series};

/// Compute the cumulative VWAP series for the given bars.
///
/// Infallible: VWAP has no parameters to get wrong.
///
/// # Edge cases
/// - empty input => empty output
/// - zero-volume prefix => absent until the first traded bar
pub fn calculate_vwap(bars: &[Bar]) -> Series {
    let mut cumulative_tpv = 0.0_f64;
    let mut cumulative_volume = 0.0_f64;

    bars.iter()
        .map(|bar| {
            let typical_price = (bar.high + bar.low + bar.close) / 3.0;
            cumulative_tpv += typical_price * bar.volume;
            cumulative_volume += bar.volume;

            if cumulative_volume == 0.0 {
                None
            } else {
                Some(cumulative_tpv / cumulative_volume)
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            time: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn vwap_empty_input() {
        assert!(calculate_vwap(&[]).is_empty());
    }

    #[test]
    fn vwap_constant_typical_price_is_fixed_point() {
        // typical price 10 on every bar, volumes vary => VWAP == 10 throughout.
        let bars = vec![
            bar(1, 11.0, 9.0, 10.0, 100.0),
            bar(2, 12.0, 8.0, 10.0, 50.0),
            bar(3, 10.5, 9.5, 10.0, 900.0),
        ];
        let out = calculate_vwap(&bars);
        assert_eq!(out.len(), 3);
        for v in out.iter().flatten() {
            assert!((v - 10.0).abs() < 1e-10);
        }
    }

    #[test]
    fn vwap_zero_volume_prefix_is_absent() {
        let bars = vec![
            bar(1, 11.0, 9.0, 10.0, 0.0),
            bar(2, 11.0, 9.0, 10.0, 0.0),
            bar(3, 13.0, 11.0, 12.0, 100.0),
        ];
        let out = calculate_vwap(&bars);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!((out[2].unwrap() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn vwap_weights_by_volume() {
        // Heavy volume at typical price 10, light at 20: VWAP stays near 10.
        let bars = vec![
            bar(1, 10.0, 10.0, 10.0, 900.0),
            bar(2, 20.0, 20.0, 20.0, 100.0),
        ];
        let out = calculate_vwap(&bars);
        assert!((out[0].unwrap() - 10.0).abs() < 1e-10);
        assert!((out[1].unwrap() - 11.0).abs() < 1e-10);
    }

    #[test]
    fn vwap_all_zero_volume_is_all_absent() {
        let bars = vec![bar(1, 11.0, 9.0, 10.0, 0.0), bar(2, 11.0, 9.0, 10.0, 0.0)];
        let out = calculate_vwap(&bars);
        assert_eq!(out, vec![None, None]);
    }
}
