// =============================================================================
// Marketpulse Indicators — technical-analysis core of the dashboard
// =============================================================================
//
// Pure, synchronous, allocation-only computation: a raw provider history goes
// through `preprocess`, fans out to the indicator functions, and comes back
// as index-aligned `Option<f64>` series for the chart renderer.  Everything
// async (fetching history, drawing) lives outside this crate.
//
// Pipeline:
//   raw history -> preprocess -> Vec<Bar>
//                             -> closes() -> SMA / EMA / RSI / MACD / Bollinger
//                             -> full bars -> VWAP / support-resistance levels
//
// Indicators are recomputed from scratch on every data refresh; input sizes
// are a few thousand bars at most, so there is no incremental update path.

mod error;
pub mod indicators;
pub mod levels;
pub mod registry;
pub mod series;

pub use error::IndicatorError;
pub use indicators::bollinger::{calculate_bollinger, BollingerOutput};
pub use indicators::ema::calculate_ema;
pub use indicators::macd::{calculate_macd, MacdOutput};
pub use indicators::rsi::{calculate_rsi, current_rsi};
pub use indicators::sma::calculate_sma;
pub use indicators::vwap::calculate_vwap;
pub use levels::{detect_levels, Level, LevelKind};
pub use registry::{compute, find, IndicatorConfig, IndicatorOutput, Placement, INDICATORS};
pub use series::{closes, preprocess, Bar, RawBar, Series};
