//! Call counting, to observe when the primitives actually run.
//!
//! Wrapping `add` and `double_value` in counted versions and handing them
//! to the `make_add_then_double*_with` constructors shows that construction
//! runs nothing: both counts stay at zero until the composed function is
//! called.

use crate::arith::{add, double_value};
use crate::compose::{make_add_then_double_curried_with, make_add_then_double_with};
use crate::demo::Strategy;
use serde::Serialize;
use std::cell::Cell;

/// Single-threaded invocation counter.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

/// Wrap a unary function so every call is recorded on `counter`.
pub fn counted_unary<A, B>(counter: &CallCounter, f: impl Fn(A) -> B) -> impl Fn(A) -> B {
    move |x| {
        counter.hit();
        f(x)
    }
}

/// Wrap a binary function so every call is recorded on `counter`.
pub fn counted_binary<A, B, C>(
    counter: &CallCounter,
    f: impl Fn(A, B) -> C,
) -> impl Fn(A, B) -> C {
    move |a, b| {
        counter.hit();
        f(a, b)
    }
}

/// Calls of each primitive at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallCounts {
    pub add: usize,
    pub double_value: usize,
}

impl CallCounts {
    fn observe(adds: &CallCounter, doubles: &CallCounter) -> Self {
        Self {
            add: adds.count(),
            double_value: doubles.count(),
        }
    }
}

/// Primitive call counts around each step of one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LazinessWitness {
    pub strategy: Strategy,
    pub value: i64,

    /// Counts right after the first step: building the function, or for
    /// application, the evaluation itself.
    pub constructed: CallCounts,

    /// Counts after fixing `a` (curried only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partially_applied: Option<CallCounts>,

    /// Counts after the value has been produced.
    pub invoked: CallCounts,
}

impl LazinessWitness {
    /// Nothing ran before invocation, and invocation ran each primitive once.
    pub fn is_lazy(&self) -> bool {
        let once = CallCounts {
            add: 1,
            double_value: 1,
        };
        self.constructed == CallCounts::default()
            && self
                .partially_applied
                .is_none_or(|counts| counts == CallCounts::default())
            && self.invoked == once
    }

    /// Whether the observed behavior matches what the strategy promises:
    /// deferred strategies are lazy, application is not.
    pub fn matches_strategy(&self) -> bool {
        self.is_lazy() == self.strategy.is_deferred()
    }
}

/// Run `strategy` over counted primitives and record when they fire.
pub fn witness_laziness(strategy: Strategy, a: i64, b: i64) -> LazinessWitness {
    let adds = CallCounter::new();
    let doubles = CallCounter::new();
    let counted_add = counted_binary(&adds, add);
    let counted_double = counted_unary(&doubles, double_value);
    let observe = || CallCounts::observe(&adds, &doubles);

    let (value, constructed, partially_applied) = match strategy {
        Strategy::Application => {
            let value = counted_double(counted_add(a, b));
            (value, observe(), None)
        }
        Strategy::Composition => {
            let add_then_double = make_add_then_double_with(&counted_add, &counted_double);
            let constructed = observe();
            (add_then_double(a, b), constructed, None)
        }
        Strategy::Curried => {
            let add_then_double =
                make_add_then_double_curried_with(&counted_add, &counted_double);
            let constructed = observe();
            let add_a_then_double = add_then_double(a);
            let partially_applied = observe();
            (add_a_then_double(b), constructed, Some(partially_applied))
        }
    };
    let invoked = observe();

    tracing::debug!(
        %strategy,
        constructed_add = constructed.add,
        constructed_double = constructed.double_value,
        invoked_add = invoked.add,
        invoked_double = invoked.double_value,
        "laziness witnessed"
    );

    LazinessWitness {
        strategy,
        value,
        constructed,
        partially_applied,
        invoked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        let counter = CallCounter::new();
        assert_eq!(counter.count(), 0);
        counter.hit();
        counter.hit();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn counted_wrappers_delegate() {
        let counter = CallCounter::new();
        let counted = counted_binary(&counter, add);
        assert_eq!(counted(2, 3), 5);
        assert_eq!(counted(4, 4), 8);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn composition_is_lazy() {
        let witness = witness_laziness(Strategy::Composition, 3, 7);
        assert_eq!(witness.constructed, CallCounts::default());
        assert_eq!(witness.invoked, CallCounts { add: 1, double_value: 1 });
        assert_eq!(witness.value, 20);
        assert!(witness.is_lazy());
        assert!(witness.matches_strategy());
    }

    #[test]
    fn curried_is_lazy_through_partial_application() {
        let witness = witness_laziness(Strategy::Curried, 3, 7);
        assert_eq!(witness.constructed, CallCounts::default());
        assert_eq!(witness.partially_applied, Some(CallCounts::default()));
        assert_eq!(witness.value, 20);
        assert!(witness.is_lazy());
        assert!(witness.matches_strategy());
    }

    #[test]
    fn application_is_eager() {
        let witness = witness_laziness(Strategy::Application, 3, 7);
        assert_eq!(witness.constructed, CallCounts { add: 1, double_value: 1 });
        assert_eq!(witness.invoked, witness.constructed);
        assert_eq!(witness.value, 20);
        assert!(!witness.is_lazy());
        assert!(witness.matches_strategy());
    }
}
