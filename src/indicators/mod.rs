// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators the chart layer
// draws.  Every function returns a full-length, index-aligned series where
// `None` marks the warm-up window, so callers can zip any output against the
// bar series without re-deriving alignment.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod vwap;
