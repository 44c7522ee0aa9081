// =============================================================================
// Error types shared across the indicator core
// =============================================================================

use thiserror::Error;

/// Everything that can go wrong inside the indicator core.
///
/// Bad *data* is never an error here — malformed bars are dropped during
/// preprocessing and short series produce all-absent output.  Errors are
/// reserved for caller programming mistakes and the one "nothing left to
/// chart" signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A parameter that can only be wrong through a caller bug, e.g. a zero
    /// period or a MACD fast period that is not below the slow period.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// Preprocessing removed every input bar; the chart should render its
    /// "no data" state.
    #[error("series is empty after preprocessing")]
    EmptySeries,
}

impl IndicatorError {
    /// Shorthand used by the indicator functions for their parameter checks.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
