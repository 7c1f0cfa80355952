// Native arithmetic core
//
// Four pure functions over f64, total over their whole domain. These are the
// direct-call surface: nothing here ever returns an error. Division by zero
// yields the IEEE NaN sentinel instead of raising - callers that want an
// error on a zero divisor go through the binding layer (see primitives/),
// which checks the divisor before this code ever runs.

use num_traits::Zero;

/// Add two numbers: `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract the second number from the first: `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers: `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide the first number by the second: `a / b`.
///
/// Returns [`f64::NAN`] when `b` is zero. The explicit check forces NaN for
/// every zero divisor; bare IEEE division would give ±infinity for a nonzero
/// dividend and only give NaN for `0/0`.
pub fn divide(a: f64, b: f64) -> f64 {
    if b.is_zero() {
        return f64::NAN;
    }
    a / b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.5, 1.5), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_eq!(multiply(0.0, 1e308), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6.0, 2.0), 3.0);
        assert_eq!(divide(-6.0, 2.0), -3.0);
        assert_eq!(divide(7.0, 2.0), 3.5);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        // The native surface never raises - a zero divisor yields NaN,
        // never infinity, for any dividend.
        assert!(divide(5.0, 0.0).is_nan());
        assert!(divide(-5.0, 0.0).is_nan());
        assert!(divide(0.0, 0.0).is_nan());
    }
}
