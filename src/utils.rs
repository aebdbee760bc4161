//! Argument validation and checked arithmetic shared by the solvers.

use crate::error::{InvalidArgument, KnapsackError, Result};
use crate::item::Item;

/// Validate a solve call and return the capacity as a table index.
///
/// Runs before any allocation so a rejected call has no side effects.
pub fn validate(items: &[Item], capacity: i64) -> Result<usize> {
    if capacity < 0 {
        return Err(InvalidArgument::NegativeCapacity(capacity).into());
    }
    if let Some((index, item)) = items.iter().enumerate().find(|(_, it)| it.weight() < 0) {
        return Err(InvalidArgument::NegativeWeight {
            index,
            weight: item.weight(),
        }
        .into());
    }
    Ok(usize::try_from(capacity).unwrap_or(usize::MAX))
}

/// Weight of a validated item as an index offset.
///
/// Weights too large for `usize` saturate; they can never fit a table anyway.
#[inline]
pub fn weight_of(item: &Item) -> usize {
    usize::try_from(item.weight()).unwrap_or(usize::MAX)
}

/// Value of taking item `index` on top of `rest`, failing on overflow.
#[inline]
pub fn take(item: &Item, index: usize, rest: i64, capacity: usize) -> Result<i64> {
    rest.checked_add(item.value())
        .ok_or(KnapsackError::Overflow {
            item: index,
            capacity,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_capacity_rejected() {
        assert_eq!(
            validate(&[], -1),
            Err(KnapsackError::InvalidArgument(
                InvalidArgument::NegativeCapacity(-1)
            ))
        );
    }

    #[test]
    fn first_negative_weight_reported() {
        let items = [Item::new(1, 1), Item::new(-2, 5), Item::new(-3, 5)];
        assert_eq!(
            validate(&items, 4),
            Err(KnapsackError::InvalidArgument(
                InvalidArgument::NegativeWeight {
                    index: 1,
                    weight: -2
                }
            ))
        );
    }

    #[test]
    fn capacity_checked_before_weights() {
        let items = [Item::new(-2, 5)];
        assert_eq!(
            validate(&items, -1),
            Err(KnapsackError::InvalidArgument(
                InvalidArgument::NegativeCapacity(-1)
            ))
        );
    }

    #[test]
    fn valid_call_yields_index() {
        assert_eq!(validate(&[Item::new(0, 3)], 0), Ok(0));
        assert_eq!(validate(&[], 12), Ok(12));
    }

    #[test]
    fn take_detects_overflow() {
        let item = Item::new(1, i64::MAX);
        assert_eq!(take(&item, 0, 0, 1), Ok(i64::MAX));
        assert_eq!(
            take(&item, 3, 1, 9),
            Err(KnapsackError::Overflow {
                item: 3,
                capacity: 9
            })
        );
    }
}
