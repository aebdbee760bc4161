//! The solver seam.
//!
//! Each algorithm is a stateless unit struct implementing [`KnapsackSolver`].
//! A solve call is a pure function of `(items, capacity)`: every table it
//! needs is allocated inside the call and either dropped or handed back in
//! the [`Solution`], so solvers can be shared freely across threads.

use crate::error::Result;
use crate::item::Item;
use crate::table::Snapshot;

/// Outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Best achievable total value.
    pub value: i64,
    /// Table the solver filled, if it keeps one.
    pub snapshot: Option<Snapshot>,
}

impl Solution {
    pub fn new(value: i64, snapshot: Option<Snapshot>) -> Self {
        Self { value, snapshot }
    }
}

/// A 0/1 knapsack algorithm.
pub trait KnapsackSolver {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Solve for `capacity` and return the value together with the filled table.
    ///
    /// Fails with [`InvalidArgument`](crate::error::KnapsackError::InvalidArgument)
    /// before allocating anything when `capacity < 0` or an item has a
    /// negative weight. Solvers that keep a table fail with
    /// [`TableTooLarge`](crate::error::KnapsackError::TableTooLarge) when it
    /// cannot be allocated for `capacity`.
    fn solve_with_snapshot(&self, items: &[Item], capacity: i64) -> Result<Solution>;

    /// Solve for `capacity`, discarding any diagnostic table.
    fn solve(&self, items: &[Item], capacity: i64) -> Result<i64> {
        self.solve_with_snapshot(items, capacity).map(|s| s.value)
    }
}
