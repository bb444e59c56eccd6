//! The two input functions.
//!
//! Plain `i64` arithmetic. No overflow policy is defined here: debug
//! builds panic on overflow, release builds wrap. Callers that take
//! untrusted operands keep them inside `i32` range (see the CLI).

/// The first input function: integer addition.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// The second input function: double the value.
pub fn double_value(x: i64) -> i64 {
    x * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_operands() {
        assert_eq!(add(3, 7), 10);
        assert_eq!(add(-4, 4), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn double_value_doubles() {
        assert_eq!(double_value(10), 20);
        assert_eq!(double_value(-6), -12);
        assert_eq!(double_value(0), 0);
    }

    #[test]
    fn handles_i32_extremes_without_overflow() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);
        assert_eq!(double_value(add(max, max)), 4 * max);
        assert_eq!(double_value(add(min, min)), 4 * min);
    }
}
