//! 0/1 knapsack by dynamic programming.
//!
//! This crate solves the classical 0/1 knapsack problem (each item taken at
//! most once, total weight bounded by a capacity) with four interchangeable
//! strategies of increasing efficiency:
//!
//! 1. [`NaiveSolver`]: exhaustive include/exclude recursion, O(2^n).
//! 2. [`TopDownSolver`]: the same recursion with a memo table, O(n * C).
//! 3. [`BottomUpSolver`]: iterative tabulation over an `(n + 1) x (C + 1)` table.
//! 4. [`SpaceOptimizedSolver`]: tabulation over a single row of `C + 1` cells.
//!
//! All four return the same value for the same instance and capacity.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{KnapsackProblem, Strategy};
//!
//! let problem = KnapsackProblem::from_pairs([(1, 1), (3, 4), (4, 5), (5, 7)]);
//! assert_eq!(problem.solve(Strategy::SpaceOptimized, 7).unwrap(), 9);
//!
//! let selection = problem.best_selection(7).unwrap();
//! assert_eq!(selection.indices, vec![1, 2]);
//! ```
//!
//! ## Diagnostics
//! The memoizing and tabulating solvers hand back the table they filled as a
//! [`Snapshot`] via [`KnapsackSolver::solve_with_snapshot`]; nothing is
//! printed. With the `tracing` feature each solve runs in a span and the
//! snapshot is emitted as a `debug` event.
//!
//! ## Features
//! - `parallel`: [`KnapsackProblem::solve_capacities`] runs on rayon's pool.
//! - `tracing`: spans and snapshot events through `tracing`.
//! - `heavy`: long-running stress tests.

pub mod builder;
pub mod error;
pub mod item;
pub mod problem;
pub mod solvers;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::KnapsackProblemBuilder;
pub use crate::error::{InvalidArgument, KnapsackError, Result};
pub use crate::item::Item;
pub use crate::problem::{Comparison, KnapsackProblem};
pub use crate::solvers::{
    BottomUpSolver, NaiveSolver, Selection, SpaceOptimizedSolver, Strategy, TopDownSolver,
};
pub use crate::table::{DpTable, Snapshot};
pub use crate::traits::{KnapsackSolver, Solution};
