//! Dynamically sized DP storage and the diagnostic snapshots built from it.
//!
//! A [`DpTable`] is a row-major, contiguous `rows x cols` grid whose bounds
//! are fixed when a solve call starts. Row `k` holds results that use the
//! first `k` items; column `c` is the remaining capacity.

use std::fmt;

use crate::error::{KnapsackError, Result};

/// Contiguous two-dimensional table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> DpTable<T> {
    /// Allocate a `rows x cols` table with every cell set to `fill`.
    ///
    /// Fails with [`KnapsackError::TableTooLarge`] instead of panicking when
    /// the cell count overflows `usize` or the allocator refuses it.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        let cells = filled(rows, cols, fill)?;
        Ok(Self { rows, cols, cells })
    }

    /// Table with one column per capacity `0..=capacity`.
    pub fn for_capacity(rows: usize, capacity: usize, fill: T) -> Result<Self> {
        Self::new(rows, columns(rows, capacity)?, fill)
    }
}

/// Single row with one cell per capacity `0..=capacity`.
pub fn row_for_capacity<T: Clone>(capacity: usize, fill: T) -> Result<Vec<T>> {
    filled(1, columns(1, capacity)?, fill)
}

fn columns(rows: usize, capacity: usize) -> Result<usize> {
    capacity
        .checked_add(1)
        .ok_or(KnapsackError::TableTooLarge {
            rows,
            cols: usize::MAX,
        })
}

fn filled<T: Clone>(rows: usize, cols: usize, fill: T) -> Result<Vec<T>> {
    let too_large = KnapsackError::TableTooLarge { rows, cols };
    let len = rows.checked_mul(cols).ok_or(too_large.clone())?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large)?;
    cells.resize(len, fill);
    Ok(cells)
}

impl<T> DpTable<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        &self.cells[row * self.cols + col]
    }

    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        self.cells[row * self.cols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Borrow row `row - 1` immutably together with row `row` mutably.
    ///
    /// # Panics
    /// Panics if `row == 0` or `row >= rows`.
    pub fn row_pair_mut(&mut self, row: usize) -> (&[T], &mut [T]) {
        assert!(row > 0 && row < self.rows, "row {row} has no predecessor");
        let (before, after) = self.cells.split_at_mut(row * self.cols);
        let prev = &before[(row - 1) * self.cols..];
        (prev, &mut after[..self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a zero-width table still has `rows` rows.
        (0..self.rows).map(move |r| self.row(r))
    }
}

/// Filled table handed back by a solver for inspection.
///
/// Purely diagnostic: discarding it never changes a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Memo cache of the top-down solver; `None` marks an uncomputed cell.
    Memo(DpTable<Option<i64>>),
    /// Full table of the bottom-up solver.
    Table(DpTable<i64>),
    /// Final row of the space-optimized solver.
    Row(Vec<i64>),
}

impl Snapshot {
    /// Short label used when printing the snapshot.
    pub fn label(&self) -> &'static str {
        match self {
            Snapshot::Memo(_) => "memo",
            Snapshot::Table(_) | Snapshot::Row(_) => "dp",
        }
    }

    /// Number of cells recorded.
    pub fn len(&self) -> usize {
        match self {
            Snapshot::Memo(t) => t.rows() * t.cols(),
            Snapshot::Table(t) => t.rows() * t.cols(),
            Snapshot::Row(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn write_row<T>(
    f: &mut fmt::Formatter<'_>,
    row: &[T],
    cell: impl Fn(&T) -> i64,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", cell(v))?;
    }
    f.write_str("]")
}

fn write_table<T>(
    f: &mut fmt::Formatter<'_>,
    table: &DpTable<T>,
    cell: impl Fn(&T) -> i64 + Copy,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, row) in table.iter_rows().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_row(f, row, cell)?;
    }
    f.write_str("]")
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Uncomputed memo cells print as the classic -1 sentinel.
            Snapshot::Memo(t) => write_table(f, t, |v| v.unwrap_or(-1)),
            Snapshot::Table(t) => write_table(f, t, |v| *v),
            Snapshot::Row(r) => write_row(f, r, |v| *v),
        }
    }
}
