//! Full-table tabulation.
//!
//! `table[k][c]` is the best value using only the first `k` items with
//! capacity `c`. Row 0 is all zeros and row `k` depends only on row `k - 1`,
//! so rows are filled in increasing order while columns within a row are
//! independent. The answer is `table[n][capacity]`.
//!
//! Because the whole table survives the call, it also supports tracing back
//! which items were chosen (see [`BottomUpSolver::solve_with_selection`]).

use crate::error::Result;
use crate::item::Item;
use crate::table::{DpTable, Snapshot};
use crate::traits::{KnapsackSolver, Solution};
use crate::utils::{take, validate, weight_of};

#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUpSolver;

/// An optimal choice of items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Positions of the chosen items, ascending.
    pub indices: Vec<usize>,
    /// Total weight of the chosen items; never exceeds the capacity.
    pub weight: i64,
    /// Total value of the chosen items; equals the optimum.
    pub value: i64,
}

impl BottomUpSolver {
    /// Fill the table for `capacity`.
    pub fn tabulate(&self, items: &[Item], capacity: i64) -> Result<DpTable<i64>> {
        let capacity = validate(items, capacity)?;
        let mut table = DpTable::for_capacity(items.len() + 1, capacity, 0i64)?;

        for (index, item) in items.iter().enumerate() {
            let weight = weight_of(item);
            let (prev, row) = table.row_pair_mut(index + 1);
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = if c < weight {
                    prev[c]
                } else {
                    prev[c].max(take(item, index, prev[c - weight], c)?)
                };
            }
        }

        Ok(table)
    }

    /// Solve and trace back one optimal set of items.
    pub fn solve_with_selection(&self, items: &[Item], capacity: i64) -> Result<Selection> {
        let table = self.tabulate(items, capacity)?;
        let mut c = table.cols() - 1;
        let value = *table.get(items.len(), c);

        let mut indices = Vec::new();
        let mut weight = 0i64;
        for k in (1..=items.len()).rev() {
            // A changed cell means row k had to take item k - 1 to beat row k - 1.
            if table.get(k, c) != table.get(k - 1, c) {
                let item = &items[k - 1];
                indices.push(k - 1);
                weight += item.weight();
                c -= weight_of(item);
            }
        }
        indices.reverse();

        Ok(Selection {
            indices,
            weight,
            value,
        })
    }
}

impl KnapsackSolver for BottomUpSolver {
    fn name(&self) -> &'static str {
        "Bottom Up"
    }

    fn solve_with_snapshot(&self, items: &[Item], capacity: i64) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("bottom_up", items = items.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = self.tabulate(items, capacity)?;
        let value = *table.get(table.rows() - 1, table.cols() - 1);

        let snapshot = Snapshot::Table(table);
        #[cfg(feature = "tracing")]
        super::trace_snapshot(self.name(), &snapshot);
        Ok(Solution::new(value, Some(snapshot)))
    }
}
