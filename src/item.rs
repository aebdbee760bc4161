//! Items and their (weight, value) pairs.

/// A single candidate for the knapsack.
///
/// Items have no identity beyond their position in a
/// [`KnapsackProblem`](crate::KnapsackProblem). Weights are expected to be
/// non-negative; solvers reject an instance containing a negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Item {
    weight: i64,
    value: i64,
}

impl Item {
    pub const fn new(weight: i64, value: i64) -> Self {
        Self { weight, value }
    }

    #[inline]
    pub const fn weight(&self) -> i64 {
        self.weight
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl From<(i64, i64)> for Item {
    fn from((weight, value): (i64, i64)) -> Self {
        Self::new(weight, value)
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn tuple_conversion_keeps_field_order() {
        let item = Item::from((4, 1));
        assert_eq!(item.weight(), 4);
        assert_eq!(item.value(), 1);
        assert_eq!(item, Item::new(4, 1));
    }
}
