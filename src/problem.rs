//! A fixed knapsack instance and the entry points for solving it.

use crate::error::Result;
use crate::item::Item;
use crate::solvers::{BottomUpSolver, Selection, Strategy};
use crate::traits::{KnapsackSolver, Solution};

/// An ordered, immutable list of items.
///
/// The instance owns a private copy of the caller's items and never mutates
/// it, so a single `KnapsackProblem` can be solved from many threads at once.
///
/// ```
/// use knapsack_dp::{Item, KnapsackProblem, Strategy};
///
/// let problem = KnapsackProblem::new(&[Item::new(4, 1), Item::new(5, 2), Item::new(1, 3)]);
/// for strategy in Strategy::ALL {
///     assert_eq!(problem.solve(strategy, 4).unwrap(), 3);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnapsackProblem {
    items: Vec<Item>,
}

/// Results of every strategy for one capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub capacity: i64,
    pub results: Vec<(Strategy, Solution)>,
}

impl Comparison {
    /// The common value if every strategy agrees.
    pub fn agreed_value(&self) -> Option<i64> {
        let (_, first) = self.results.first()?;
        self.results
            .iter()
            .all(|(_, s)| s.value == first.value)
            .then_some(first.value)
    }
}

impl KnapsackProblem {
    pub fn new(items: &[Item]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Build from `(weight, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self {
            items: pairs.into_iter().map(Item::from).collect(),
        }
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Best achievable value for `capacity` using `strategy`.
    pub fn solve(&self, strategy: Strategy, capacity: i64) -> Result<i64> {
        strategy.solver().solve(&self.items, capacity)
    }

    /// Like [`solve`](Self::solve), also returning the table the strategy filled.
    pub fn solve_with_snapshot(&self, strategy: Strategy, capacity: i64) -> Result<Solution> {
        strategy.solver().solve_with_snapshot(&self.items, capacity)
    }

    /// Run every strategy for `capacity`.
    ///
    /// Fails on the first strategy that fails; argument errors are identical
    /// for all strategies, so that is always the naive solver.
    pub fn compare(&self, capacity: i64) -> Result<Comparison> {
        let results = Strategy::ALL
            .into_iter()
            .map(|s| self.solve_with_snapshot(s, capacity).map(|sol| (s, sol)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Comparison { capacity, results })
    }

    /// One optimal set of items for `capacity`.
    pub fn best_selection(&self, capacity: i64) -> Result<Selection> {
        BottomUpSolver.solve_with_selection(&self.items, capacity)
    }

    /// Solve for each capacity in turn, preserving input order.
    ///
    /// With the `parallel` feature the calls run on rayon's thread pool.
    pub fn solve_capacities(&self, strategy: Strategy, capacities: &[i64]) -> Result<Vec<i64>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve_capacities", %strategy, batch = capacities.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            capacities
                .par_iter()
                .map(|&c| self.solve(strategy, c))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            capacities
                .iter()
                .map(|&c| self.solve(strategy, c))
                .collect()
        }
    }
}

impl From<Vec<Item>> for KnapsackProblem {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidArgument, KnapsackError};

    #[test]
    fn instance_is_independent_of_caller_buffer() {
        let mut buffer = vec![Item::new(1, 10)];
        let problem = KnapsackProblem::new(&buffer);
        buffer[0] = Item::new(1, 99);
        buffer.push(Item::new(1, 1));
        assert_eq!(problem.items(), &[Item::new(1, 10)]);
        assert_eq!(problem.solve(Strategy::BottomUp, 5), Ok(10));
    }

    #[test]
    fn compare_reports_every_strategy() {
        let problem = KnapsackProblem::from_pairs([(4, 1), (5, 2), (1, 3)]);
        let cmp = problem.compare(4).unwrap();
        assert_eq!(cmp.results.len(), 4);
        assert_eq!(cmp.agreed_value(), Some(3));
        assert!(cmp.results[0].1.snapshot.is_none());
        assert!(cmp.results[1..].iter().all(|(_, s)| s.snapshot.is_some()));
    }

    #[test]
    fn agreed_value_detects_disagreement() {
        let cmp = Comparison {
            capacity: 1,
            results: vec![
                (Strategy::Naive, Solution::new(1, None)),
                (Strategy::TopDown, Solution::new(2, None)),
            ],
        };
        assert_eq!(cmp.agreed_value(), None);
        let empty = Comparison {
            capacity: 1,
            results: Vec::new(),
        };
        assert_eq!(empty.agreed_value(), None);
    }

    #[test]
    fn batch_preserves_order_and_fails_on_negative() {
        let problem = KnapsackProblem::from_pairs([(1, 1), (3, 4), (4, 5), (5, 7)]);
        assert_eq!(
            problem.solve_capacities(Strategy::SpaceOptimized, &[7, 0, 3]),
            Ok(vec![9, 0, 4])
        );
        assert_eq!(
            problem.solve_capacities(Strategy::TopDown, &[2, -4]),
            Err(KnapsackError::InvalidArgument(
                InvalidArgument::NegativeCapacity(-4)
            ))
        );
    }
}
