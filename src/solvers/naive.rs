//! Exhaustive recursion over include/exclude choices.
//!
//! Items are considered from the last to the first. Identical subproblems are
//! recomputed, so the running time is O(2^n); this solver exists as the
//! reference the others are checked against. It keeps no table and never
//! emits a snapshot.

use crate::error::Result;
use crate::item::Item;
use crate::traits::{KnapsackSolver, Solution};
use crate::utils::{take, validate, weight_of};

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSolver;

impl KnapsackSolver for NaiveSolver {
    fn name(&self) -> &'static str {
        "Naive"
    }

    fn solve_with_snapshot(&self, items: &[Item], capacity: i64) -> Result<Solution> {
        let capacity = validate(items, capacity)?;
        let value = best(items, items.len(), capacity)?;
        Ok(Solution::new(value, None))
    }
}

/// Best value using the first `remaining` items within `capacity`.
fn best(items: &[Item], remaining: usize, capacity: usize) -> Result<i64> {
    let Some(index) = remaining.checked_sub(1) else {
        return Ok(0);
    };
    let item = &items[index];
    let weight = weight_of(item);

    let skipped = best(items, index, capacity)?;
    if weight > capacity {
        return Ok(skipped);
    }
    let picked = take(item, index, best(items, index, capacity - weight)?, capacity)?;
    Ok(skipped.max(picked))
}
