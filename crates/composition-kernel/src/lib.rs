//! # Composition Kernel
//!
//! Function composition versus function application, over plain integers.
//!
//! Composition is a definition artifact, not an execution one: a composed
//! function is built from two others without running either, and when it
//! is finally invoked it behaves like any function defined on its own.
//! Application, by contrast, feeds one function's result straight into
//! another and produces a value immediately.
//!
//! ## Architecture
//!
//! ```text
//! arith        ← add, double_value (the two input functions)
//!     │
//! compose      ← compose, compose_binary, curry, make_add_then_double*
//!     │
//! probe        ← CallCounter + counted wrappers, LazinessWitness
//!     │
//! demo         ← Strategy, Evaluation, DemoReport, run_demo
//! ```

pub mod arith;
pub mod compose;
pub mod demo;
pub mod error;
pub mod probe;

pub use arith::{add, double_value};
pub use compose::{
    apply_add_then_double, compose, compose_binary, curry, make_add_then_double,
    make_add_then_double_curried, make_add_then_double_curried_with, make_add_then_double_with,
};
pub use demo::{DEFAULT_A, DEFAULT_B, DemoReport, Evaluation, Strategy, evaluate, run_demo};
pub use error::CompositionError;
pub use probe::{
    CallCounter, CallCounts, LazinessWitness, counted_binary, counted_unary, witness_laziness,
};
