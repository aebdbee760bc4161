//! The four knapsack strategies.
//!
//! - [`naive`]           : exhaustive include/exclude recursion, O(2^n).
//! - [`top_down`]        : the same recursion backed by a memo table.
//! - [`bottom_up`]       : `(n + 1) x (capacity + 1)` tabulation.
//! - [`space_optimized`] : tabulation over a single row updated in place.
//!
//! Every strategy returns the same value for the same instance and capacity.

pub mod bottom_up;
pub mod naive;
pub mod space_optimized;
pub mod top_down;

use std::fmt;

pub use bottom_up::{BottomUpSolver, Selection};
pub use naive::NaiveSolver;
pub use space_optimized::SpaceOptimizedSolver;
pub use top_down::TopDownSolver;

use crate::traits::KnapsackSolver;
#[cfg(feature = "tracing")]
use crate::table::Snapshot;

/// Selector over the built-in solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    TopDown,
    BottomUp,
    SpaceOptimized,
}

impl Strategy {
    /// All strategies, from slowest to most economical.
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::TopDown,
        Strategy::BottomUp,
        Strategy::SpaceOptimized,
    ];

    pub fn solver(self) -> &'static dyn KnapsackSolver {
        match self {
            Strategy::Naive => &NaiveSolver,
            Strategy::TopDown => &TopDownSolver,
            Strategy::BottomUp => &BottomUpSolver,
            Strategy::SpaceOptimized => &SpaceOptimizedSolver,
        }
    }

    pub fn name(self) -> &'static str {
        self.solver().name()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_snapshot(strategy: &'static str, snapshot: &Snapshot) {
    tracing::debug!(
        target: "knapsack_dp::snapshot",
        strategy,
        label = snapshot.label(),
        "{snapshot}"
    );
}
