use crate::item::Item;
use crate::KnapsackProblem;

/// Incremental construction of a [`KnapsackProblem`].
#[derive(Debug, Clone, Default)]
pub struct KnapsackProblemBuilder {
    items: Vec<Item>,
}

impl KnapsackProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn item(mut self, weight: i64, value: i64) -> Self {
        self.items.push(Item::new(weight, value));
        self
    }
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }
    pub fn build(self) -> KnapsackProblem {
        KnapsackProblem::from(self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strategy;

    #[test]
    fn builder_keeps_insertion_order() {
        let problem = KnapsackProblemBuilder::new()
            .item(4, 1)
            .items([(5, 2), (1, 3)])
            .build();
        assert_eq!(
            problem.items(),
            &[Item::new(4, 1), Item::new(5, 2), Item::new(1, 3)]
        );
        assert_eq!(problem.solve(Strategy::Naive, 4), Ok(3));
    }

    #[test]
    fn empty_builder_gives_empty_problem() {
        let problem = KnapsackProblemBuilder::new().build();
        assert!(problem.is_empty());
        assert_eq!(problem.len(), 0);
    }
}
