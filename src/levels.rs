// =============================================================================
// Support / Resistance Level Detection
// =============================================================================
//
// Two stages:
//
// 1. Pivot scan — a close is a local support when it is <= every close
//    within `lookback` bars on both sides, a local resistance when it is >=
//    every such close.  A flat run can qualify as both at once; both are
//    recorded independently.
//
// 2. Greedy clustering — same-kind levels within `cluster_threshold`
//    relative distance of a cluster's seed merge into one zone.  The pass is
//    single and runs in detection order: each still-unclaimed level seeds a
//    cluster, then claims every later unclaimed match.  This is
//    order-dependent and not globally optimal (levels that chain A~B~C
//    without A~C land differently under another traversal), which is the
//    behavior charts have been tuned against.  Keep it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::series::Bar;

/// Default number of neighbor bars checked on each side of a pivot.
pub const DEFAULT_LOOKBACK: usize = 5;

/// Default relative distance under which same-kind levels merge.
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 0.02;

/// Merged clusters never report a strength above this, however many pivots
/// they swallowed.
const MAX_STRENGTH: u32 = 3;

/// Which side of price a level sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    Support,
    Resistance,
}

/// One clustered support/resistance zone, rebuilt per chart render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub kind: LevelKind,
    /// Number of merged pivot points, capped at 3.
    pub strength: u32,
}

impl Level {
    fn pivot(price: f64, kind: LevelKind) -> Self {
        Self {
            price,
            kind,
            strength: 1,
        }
    }
}

/// Detect support/resistance zones over the cleaned bar series.
///
/// Returns the clustered levels sorted by price descending.
///
/// # Edge cases
/// - `lookback == 0` or `cluster_threshold <= 0` => `InvalidParameter`
/// - fewer than `2 * lookback + 1` bars => no pivots, empty output
pub fn detect_levels(
    bars: &[Bar],
    lookback: usize,
    cluster_threshold: f64,
) -> Result<Vec<Level>, IndicatorError> {
    if lookback == 0 {
        return Err(IndicatorError::invalid("lookback", "must be >= 1"));
    }
    if !(cluster_threshold > 0.0) {
        return Err(IndicatorError::invalid(
            "cluster_threshold",
            format!("must be positive, got {cluster_threshold}"),
        ));
    }

    let pivots = scan_pivots(bars, lookback);
    let mut levels = cluster_levels(&pivots, cluster_threshold);
    levels.sort_by(|a, b| b.price.total_cmp(&a.price));

    debug!(
        bars = bars.len(),
        pivots = pivots.len(),
        zones = levels.len(),
        "support/resistance detection complete"
    );
    Ok(levels)
}

/// Stage 1: collect raw pivot levels in scan order.
fn scan_pivots(bars: &[Bar], lookback: usize) -> Vec<Level> {
    let n = bars.len();
    let mut pivots = Vec::new();
    if n < 2 * lookback + 1 {
        return pivots;
    }

    for i in lookback..n - lookback {
        let close = bars[i].close;
        let before = &bars[i - lookback..i];
        let after = &bars[i + 1..=i + lookback];

        let is_support = before.iter().chain(after).all(|b| close <= b.close);
        let is_resistance = before.iter().chain(after).all(|b| close >= b.close);

        if is_support {
            pivots.push(Level::pivot(close, LevelKind::Support));
        }
        if is_resistance {
            pivots.push(Level::pivot(close, LevelKind::Resistance));
        }
    }

    pivots
}

/// Stage 2: single-pass greedy clustering in detection order.
///
/// Distances are measured against the cluster *seed*, not a running mean.
/// The zone's price is the plain mean of the member prices; its strength is
/// the sum of member strengths, capped, so an already-merged level keeps its
/// weight when fed back through.
pub(crate) fn cluster_levels(levels: &[Level], threshold: f64) -> Vec<Level> {
    let mut claimed = vec![false; levels.len()];
    let mut clusters = Vec::with_capacity(levels.len());

    for i in 0..levels.len() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;

        let seed = &levels[i];
        let mut price_sum = seed.price;
        let mut members: u32 = 1;
        let mut strength: u32 = seed.strength;

        for j in i + 1..levels.len() {
            if claimed[j] || levels[j].kind != seed.kind {
                continue;
            }
            if (levels[j].price - seed.price).abs() / seed.price < threshold {
                claimed[j] = true;
                price_sum += levels[j].price;
                members += 1;
                strength += levels[j].strength;
            }
        }

        clusters.push(Level {
            price: price_sum / f64::from(members),
            kind: seed.kind,
            strength: strength.min(MAX_STRENGTH),
        });
    }

    clusters
}
