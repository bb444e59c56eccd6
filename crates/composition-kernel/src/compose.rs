//! Composition constructors and the combinators they are built from.
//!
//! Every constructor here returns a function value. None of them invoke
//! the functions they are given: the body of a composed function only
//! runs once the composed function itself is called with concrete
//! arguments.

use crate::arith::{add, double_value};
use std::rc::Rc;

/// Unary composition `g ∘ f`: a function that feeds `f`'s result to `g`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

/// Composition of a binary function with a unary one:
/// `(a, b) ↦ g(f(a, b))`.
pub fn compose_binary<A, B, C, D>(
    f: impl Fn(A, B) -> C,
    g: impl Fn(C) -> D,
) -> impl Fn(A, B) -> D {
    move |a, b| g(f(a, b))
}

/// Curry a binary function into a chain of single-argument functions.
///
/// The first call fixes `a` and returns a closure capturing it; `f` is
/// not called until that closure receives `b`. The inner closure is
/// boxed because a closure cannot name an `impl Fn` as its own output.
pub fn curry<'f, A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C + 'f>
where
    F: Fn(A, B) -> C + 'f,
    A: Clone + 'f,
    B: 'f,
    C: 'f,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> C + 'f> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Direct application: `double_value(add(a, b))`, evaluated right away.
///
/// No new function is defined here; the output of `add` is simply passed
/// as the input of `double_value`.
pub fn apply_add_then_double(a: i64, b: i64) -> i64 {
    double_value(add(a, b))
}

/// The composed output function: `(a, b) ↦ double_value(add(a, b))`.
pub fn make_add_then_double() -> impl Fn(i64, i64) -> i64 {
    make_add_then_double_with(add, double_value)
}

/// [`make_add_then_double`] over caller-supplied primitives.
///
/// `add_fn` and `double_fn` are only called once the returned function is.
pub fn make_add_then_double_with(
    add_fn: impl Fn(i64, i64) -> i64,
    double_fn: impl Fn(i64) -> i64,
) -> impl Fn(i64, i64) -> i64 {
    compose_binary(add_fn, double_fn)
}

/// Curried form of [`make_add_then_double`]: `a ↦ (b ↦ double_value(add(a, b)))`.
pub fn make_add_then_double_curried() -> impl Fn(i64) -> Box<dyn Fn(i64) -> i64> {
    make_add_then_double_curried_with(add, double_value)
}

/// [`make_add_then_double_curried`] over caller-supplied primitives.
pub fn make_add_then_double_curried_with<'f>(
    add_fn: impl Fn(i64, i64) -> i64 + 'f,
    double_fn: impl Fn(i64) -> i64 + 'f,
) -> impl Fn(i64) -> Box<dyn Fn(i64) -> i64 + 'f> {
    curry(make_add_then_double_with(add_fn, double_fn))
}
