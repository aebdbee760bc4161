//! Tabulation over a single row.
//!
//! Row `k` of the bottom-up table only reads row `k - 1`, so one array of
//! `capacity + 1` cells is enough. For each item the row is updated from
//! `capacity` down to the item's weight: walking downwards guarantees that
//! `row[c - weight]` still holds the previous item's value when it is read.
//! Walking upwards would let an item be taken repeatedly, which is the
//! unbounded knapsack and not this problem.

use crate::error::Result;
use crate::item::Item;
use crate::table::{row_for_capacity, Snapshot};
use crate::traits::{KnapsackSolver, Solution};
use crate::utils::{take, validate, weight_of};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceOptimizedSolver;

impl SpaceOptimizedSolver {
    /// Final row: best value per capacity `0..=capacity` over all items.
    pub fn final_row(&self, items: &[Item], capacity: i64) -> Result<Vec<i64>> {
        let capacity = validate(items, capacity)?;
        let mut row = row_for_capacity(capacity, 0i64)?;

        for (index, item) in items.iter().enumerate() {
            let weight = weight_of(item);
            if weight > capacity {
                continue;
            }
            for c in (weight..=capacity).rev() {
                let picked = take(item, index, row[c - weight], c)?;
                if picked > row[c] {
                    row[c] = picked;
                }
            }
        }

        Ok(row)
    }
}

impl KnapsackSolver for SpaceOptimizedSolver {
    fn name(&self) -> &'static str {
        "Bottom Up Optimized"
    }

    fn solve_with_snapshot(&self, items: &[Item], capacity: i64) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("space_optimized", items = items.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let row = self.final_row(items, capacity)?;
        let value = row.last().copied().unwrap_or(0);

        let snapshot = Snapshot::Row(row);
        #[cfg(feature = "tracing")]
        super::trace_snapshot(self.name(), &snapshot);
        Ok(Solution::new(value, Some(snapshot)))
    }
}
