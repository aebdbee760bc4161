//! Memoized top-down recursion.
//!
//! Same recursion as [`naive`](super::naive), but each `(items_remaining,
//! capacity)` result is cached in a `(n + 1) x (capacity + 1)` table owned by
//! the call. Cells start as `None` ("not yet computed") so the cache stays
//! sound even for negative item values. O(n * capacity) time and space.

use crate::error::Result;
use crate::item::Item;
use crate::table::{DpTable, Snapshot};
use crate::traits::{KnapsackSolver, Solution};
use crate::utils::{take, validate, weight_of};

#[derive(Debug, Clone, Copy, Default)]
pub struct TopDownSolver;

impl KnapsackSolver for TopDownSolver {
    fn name(&self) -> &'static str {
        "Top Down"
    }

    fn solve_with_snapshot(&self, items: &[Item], capacity: i64) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("top_down", items = items.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let capacity = validate(items, capacity)?;
        let mut memo = DpTable::for_capacity(items.len() + 1, capacity, None)?;
        let value = memoized(items, &mut memo, items.len(), capacity)?;

        let snapshot = Snapshot::Memo(memo);
        #[cfg(feature = "tracing")]
        super::trace_snapshot(self.name(), &snapshot);
        Ok(Solution::new(value, Some(snapshot)))
    }
}

fn memoized(
    items: &[Item],
    memo: &mut DpTable<Option<i64>>,
    remaining: usize,
    capacity: usize,
) -> Result<i64> {
    if let Some(stored) = *memo.get(remaining, capacity) {
        return Ok(stored);
    }

    let value = match remaining.checked_sub(1) {
        None => 0,
        Some(index) => {
            let item = &items[index];
            let weight = weight_of(item);
            let skipped = memoized(items, memo, index, capacity)?;
            if weight > capacity {
                skipped
            } else {
                let rest = memoized(items, memo, index, capacity - weight)?;
                skipped.max(take(item, index, rest, capacity)?)
            }
        }
    };

    memo.set(remaining, capacity, Some(value));
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo_of(solution: &Solution) -> &DpTable<Option<i64>> {
        match solution.snapshot.as_ref() {
            Some(Snapshot::Memo(memo)) => memo,
            other => panic!("expected memo snapshot, got {other:?}"),
        }
    }

    #[test]
    fn memo_has_one_row_per_prefix() {
        let items = [Item::new(4, 1), Item::new(5, 2), Item::new(1, 3)];
        let solution = TopDownSolver.solve_with_snapshot(&items, 4).unwrap();
        assert_eq!(solution.value, 3);

        let memo = memo_of(&solution);
        assert_eq!((memo.rows(), memo.cols()), (4, 5));
        assert_eq!(*memo.get(3, 4), Some(3));
    }

    #[test]
    fn only_reachable_subproblems_are_filled() {
        let items = [Item::new(4, 1), Item::new(5, 2), Item::new(1, 3)];
        let solution = TopDownSolver.solve_with_snapshot(&items, 4).unwrap();
        let memo = memo_of(&solution);

        // Taking the weight-1 item leaves capacity 3; skipping it keeps 4.
        assert_eq!(*memo.get(2, 4), Some(1));
        assert_eq!(*memo.get(2, 3), Some(0));
        assert_eq!(*memo.get(2, 0), None);
        assert_eq!(*memo.get(1, 1), None);
        assert_eq!(
            solution.snapshot.unwrap().to_string(),
            "[[0, -1, -1, 0, 0], [-1, -1, -1, 0, 1], [-1, -1, -1, 0, 1], [-1, -1, -1, -1, 3]]"
        );
    }

    #[test]
    fn negative_values_do_not_collide_with_uncomputed_cells() {
        let items = [Item::new(0, -1), Item::new(1, 2)];
        assert_eq!(TopDownSolver.solve(&items, 1), Ok(2));
        assert_eq!(TopDownSolver.solve(&items, 0), Ok(0));
    }
}
