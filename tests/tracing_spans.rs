#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use knapsack_dp::{KnapsackProblem, Strategy};
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl<S: tracing::Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

fn spans_opened(strategy: Strategy, capacity: i64) -> Vec<&'static str> {
    let names = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(SpanNames(Arc::clone(&names)));
    let problem = KnapsackProblem::from_pairs([(4, 1), (5, 2), (1, 3)]);
    tracing::subscriber::with_default(subscriber, || {
        let _ = problem.solve(strategy, capacity);
    });
    let names = names.lock().unwrap().clone();
    names
}

#[test]
fn rejected_calls_are_traced_like_accepted_ones() {
    let expected = [
        (Strategy::TopDown, "top_down"),
        (Strategy::BottomUp, "bottom_up"),
        (Strategy::SpaceOptimized, "space_optimized"),
    ];
    for (strategy, span_name) in expected {
        assert_eq!(spans_opened(strategy, 4), vec![span_name], "{strategy}");
        assert_eq!(spans_opened(strategy, -1), vec![span_name], "{strategy}");
    }
}

#[test]
fn naive_solver_opens_no_span() {
    assert!(spans_opened(Strategy::Naive, 4).is_empty());
    assert!(spans_opened(Strategy::Naive, -1).is_empty());
}
