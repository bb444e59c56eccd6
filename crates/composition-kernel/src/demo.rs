//! The demonstration: one computation, three ways of getting there.
//!
//! - **Application**: `double_value(add(a, b))` evaluated on the spot
//! - **Composition**: build `add_then_double`, then call it with `(a, b)`
//! - **Curried**: build the curried form, apply `a`, then apply `b`
//!
//! All three must produce the same value for the same operands.

use crate::compose::{apply_add_then_double, make_add_then_double, make_add_then_double_curried};
use crate::error::CompositionError;
use serde::Serialize;

/// Left operand used when none is given.
pub const DEFAULT_A: i64 = 3;

/// Right operand used when none is given.
pub const DEFAULT_B: i64 = 7;

/// How `double_value(add(a, b))` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Feed the output of `add` straight into `double_value`.
    Application,

    /// Call the composed function `(a, b) ↦ double_value(add(a, b))`.
    Composition,

    /// Call the curried function with `a`, then the result with `b`.
    Curried,
}

impl Strategy {
    /// Every strategy, in demonstration order.
    pub const ALL: [Strategy; 3] = [Self::Application, Self::Composition, Self::Curried];

    /// Whether this strategy defines a function before anything runs.
    pub fn is_deferred(self) -> bool {
        !matches!(self, Self::Application)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Composition => write!(f, "composition"),
            Self::Curried => write!(f, "curried"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "application" | "apply" => Ok(Self::Application),
            "composition" | "compose" | "composed" => Ok(Self::Composition),
            "curried" | "curry" => Ok(Self::Curried),
            _ => Err(CompositionError::UnknownStrategy(s.to_string())),
        }
    }
}

/// The value one strategy produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub strategy: Strategy,
    pub value: i64,
}

/// Result of running the demonstration over a set of strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub a: i64,
    pub b: i64,
    pub evaluations: Vec<Evaluation>,

    /// True when every evaluation produced the same value.
    pub agree: bool,
}

impl DemoReport {
    /// The shared value, if all strategies agreed and at least one ran.
    pub fn value(&self) -> Option<i64> {
        if self.agree {
            self.evaluations.first().map(|evaluation| evaluation.value)
        } else {
            None
        }
    }
}

/// Compute `double_value(add(a, b))` using `strategy`.
pub fn evaluate(strategy: Strategy, a: i64, b: i64) -> Evaluation {
    let value = match strategy {
        Strategy::Application => apply_add_then_double(a, b),
        Strategy::Composition => {
            let add_then_double = make_add_then_double();
            add_then_double(a, b)
        }
        Strategy::Curried => {
            let add_then_double = make_add_then_double_curried();
            add_then_double(a)(b)
        }
    };
    tracing::debug!(%strategy, a, b, value, "evaluated");
    Evaluation { strategy, value }
}

/// Evaluate every strategy in `strategies`, in order.
pub fn run_demo(a: i64, b: i64, strategies: &[Strategy]) -> DemoReport {
    let evaluations: Vec<Evaluation> = strategies
        .iter()
        .map(|strategy| evaluate(*strategy, a, b))
        .collect();
    let agree = evaluations
        .windows(2)
        .all(|pair| pair[0].value == pair[1].value);

    if !agree {
        tracing::warn!(a, b, "strategies disagree");
    }

    DemoReport {
        a,
        b,
        evaluations,
        agree,
    }
}
