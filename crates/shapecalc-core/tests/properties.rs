use proptest::prelude::*;
use shapecalc_core::{calculate, Action, ShapeKind};

fn any_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn metrics_are_idempotent(kind in any_kind(), values in prop::collection::vec(0.1f64..1000.0, 5)) {
        let params = &values[..kind.arity()];
        let action = Action::for_dimension(kind.dimension());
        let first = calculate(kind, params, action);
        let second = calculate(kind, params, action);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arity_mismatch_is_always_invalid(kind in any_kind(), len in 0usize..8, value in 0.1f64..100.0) {
        prop_assume!(len != kind.arity());
        let params = vec![value; len];
        prop_assert!(!kind.is_valid(&params));
        let action = Action::for_dimension(kind.dimension());
        prop_assert!(calculate(kind, &params, action).is_err());
    }

    #[test]
    fn positive_measurements_give_positive_results(kind in any_kind(), side in 0.1f64..1000.0) {
        // Equal sides always satisfy the triangle inequality.
        let params = vec![side; kind.arity()];
        prop_assert!(kind.is_valid(&params));
        for &metric in kind.metrics() {
            if let Ok(value) = kind.metric(metric, &params) {
                prop_assert!(value > 0.0 && value.is_finite());
            }
        }
    }
}
