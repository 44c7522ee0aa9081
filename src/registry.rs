// =============================================================================
// Indicator Registry — static catalog + chart dispatch
// =============================================================================
//
// The catalog is what the dashboard's toggle panel renders: one row per
// indicator with its display strings, trace color, and whether it draws on
// the price panel or in a separate sub-panel.  It carries no math; the math
// lives behind `compute`, which maps a catalog id to the corresponding
// calculation with the dashboard's default parameters.

use serde::Serialize;

use crate::error::IndicatorError;
use crate::indicators::bollinger::{calculate_bollinger, DEFAULT_BOLLINGER_PARAMS};
use crate::indicators::ema::calculate_ema;
use crate::indicators::macd::{calculate_macd, DEFAULT_MACD_PERIODS};
use crate::indicators::rsi::{calculate_rsi, DEFAULT_RSI_PERIOD};
use crate::indicators::sma::calculate_sma;
use crate::indicators::vwap::calculate_vwap;
use crate::series::{closes, Bar, Series};

/// Where the chart layer draws an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Drawn on top of the candlesticks in the price panel.
    Overlay,
    /// Drawn in its own sub-panel with an independent y-axis.
    Separate,
}

/// One catalog row.  Static display metadata only — never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndicatorConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub placement: Placement,
    pub default_enabled: bool,
}

/// The full catalog, in the order the toggle panel lists it.
pub const INDICATORS: &[IndicatorConfig] = &[
    IndicatorConfig {
        id: "sma",
        name: "Simple Moving Average (20)",
        short_name: "SMA 20",
        color: "#f59e0b",
        placement: Placement::Overlay,
        default_enabled: true,
    },
    IndicatorConfig {
        id: "ema",
        name: "Exponential Moving Average (50)",
        short_name: "EMA 50",
        color: "#8b5cf6",
        placement: Placement::Overlay,
        default_enabled: false,
    },
    IndicatorConfig {
        id: "bollinger",
        name: "Bollinger Bands (20, 2)",
        short_name: "BB",
        color: "#64748b",
        placement: Placement::Overlay,
        default_enabled: false,
    },
    IndicatorConfig {
        id: "vwap",
        name: "Volume Weighted Average Price",
        short_name: "VWAP",
        color: "#0ea5e9",
        placement: Placement::Overlay,
        default_enabled: false,
    },
    IndicatorConfig {
        id: "rsi",
        name: "Relative Strength Index (14)",
        short_name: "RSI 14",
        color: "#ec4899",
        placement: Placement::Separate,
        default_enabled: true,
    },
    IndicatorConfig {
        id: "macd",
        name: "MACD (12, 26, 9)",
        short_name: "MACD",
        color: "#22c55e",
        placement: Placement::Separate,
        default_enabled: false,
    },
];

/// Default SMA look-back shown on the price panel.
pub const DEFAULT_SMA_PERIOD: usize = 20;

/// Default EMA look-back shown on the price panel.
pub const DEFAULT_EMA_PERIOD: usize = 50;

/// Look up a catalog row by id.
pub fn find(id: &str) -> Option<&'static IndicatorConfig> {
    INDICATORS.iter().find(|c| c.id == id)
}

/// What a single indicator hands the chart: one trace, a band triple, or the
/// MACD panel triple.  Every contained series is index-aligned with `bars`.
#[derive(Debug, Clone, Serialize)]
pub enum IndicatorOutput {
    Single(Series),
    Bands {
        upper: Series,
        middle: Series,
        lower: Series,
    },
    Macd {
        macd: Series,
        signal: Series,
        histogram: Series,
    },
}

/// Compute the indicator behind a catalog id over the cleaned bar series,
/// using the catalog's default parameters.
///
/// # Errors
/// `InvalidParameter` for an id the catalog does not know.
pub fn compute(id: &str, bars: &[Bar]) -> Result<IndicatorOutput, IndicatorError> {
    let closes = closes(bars);

    match id {
        "sma" => Ok(IndicatorOutput::Single(calculate_sma(
            &closes,
            DEFAULT_SMA_PERIOD,
        )?)),
        "ema" => Ok(IndicatorOutput::Single(calculate_ema(
            &closes,
            DEFAULT_EMA_PERIOD,
        )?)),
        "rsi" => Ok(IndicatorOutput::Single(calculate_rsi(
            &closes,
            DEFAULT_RSI_PERIOD,
        )?)),
        "vwap" => Ok(IndicatorOutput::Single(calculate_vwap(bars))),
        "bollinger" => {
            let (period, k) = DEFAULT_BOLLINGER_PARAMS;
            let out = calculate_bollinger(&closes, period, k)?;
            Ok(IndicatorOutput::Bands {
                upper: out.upper,
                middle: out.middle,
                lower: out.lower,
            })
        }
        "macd" => {
            let (fast, slow, signal) = DEFAULT_MACD_PERIODS;
            let out = calculate_macd(&closes, fast, slow, signal)?;
            Ok(IndicatorOutput::Macd {
                macd: out.macd,
                signal: out.signal,
                histogram: out.histogram,
            })
        }
        _ => Err(IndicatorError::invalid(
            "id",
            format!("unknown indicator id `{id}`"),
        )),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bars(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.4).sin() * 4.0;
                Bar {
                    time: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                        + chrono::Days::new(i as u64),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1000.0,
                }
            })
            .collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in INDICATORS.iter().enumerate() {
            for b in &INDICATORS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("rsi").unwrap().placement, Placement::Separate);
        assert_eq!(find("vwap").unwrap().placement, Placement::Overlay);
        assert!(find("stochastic").is_none());
    }

    #[test]
    fn every_catalog_id_computes_aligned_output() {
        let bars = bars(80);
        for config in INDICATORS {
            let out = compute(config.id, &bars).unwrap();
            match out {
                IndicatorOutput::Single(s) => assert_eq!(s.len(), bars.len()),
                IndicatorOutput::Bands {
                    upper,
                    middle,
                    lower,
                } => {
                    assert_eq!(upper.len(), bars.len());
                    assert_eq!(middle.len(), bars.len());
                    assert_eq!(lower.len(), bars.len());
                }
                IndicatorOutput::Macd {
                    macd,
                    signal,
                    histogram,
                } => {
                    assert_eq!(macd.len(), bars.len());
                    assert_eq!(signal.len(), bars.len());
                    assert_eq!(histogram.len(), bars.len());
                }
            }
        }
    }

    #[test]
    fn unknown_id_is_invalid_parameter() {
        let bars = bars(10);
        assert!(matches!(
            compute("nope", &bars),
            Err(IndicatorError::InvalidParameter { name: "id", .. })
        ));
    }

    #[test]
    fn short_series_still_aligns() {
        // Shorter than every warm-up window: all-absent but correct length.
        let bars = bars(3);
        for config in INDICATORS {
            let out = compute(config.id, &bars).unwrap();
            if let IndicatorOutput::Single(s) = out {
                assert_eq!(s.len(), 3);
            }
        }
    }

    #[test]
    fn catalog_serializes_for_the_toggle_panel() {
        let json = serde_json::to_string(INDICATORS).unwrap();
        assert!(json.contains("\"placement\":\"overlay\""));
        assert!(json.contains("\"placement\":\"separate\""));
        assert!(json.contains("\"id\":\"macd\""));
    }
}
