// Division binding: ( a b -- a/b )
//
// This is the one operation where the bound and native surfaces disagree.
// The binding checks the divisor and raises DivisionByZero before the core
// function is ever called; ops::divide itself returns NaN for a zero divisor
// and never fails. Both behaviors are part of the contract.

use crate::interpreter::Interpreter;
use crate::ops;
use crate::value::{RuntimeError, Value};
use num_traits::Zero;

pub fn div_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let b = interp.pop_number("'/' requires exactly 2 numeric arguments (e.g., '15 / 3')")?;
    let a = interp.pop_number("'/' requires exactly 2 numeric arguments (e.g., '15 / 3')")?;

    // Short-circuit on a zero divisor - the core's NaN path must not run
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    interp.push(Value::Number(ops::divide(a, b)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_impl() {
        let mut interp = Interpreter::new();

        interp.push(Value::Number(6.0));
        interp.push(Value::Number(2.0));
        div_impl(&mut interp).unwrap();

        let result = interp.pop().unwrap();
        assert!(matches!(result, Value::Number(n) if n == 3.0));

        // Fractional quotient
        interp.push(Value::Number(7.0));
        interp.push(Value::Number(2.0));
        div_impl(&mut interp).unwrap();

        let result = interp.pop().unwrap();
        assert!(matches!(result, Value::Number(n) if n == 3.5));
    }

    #[test]
    fn test_div_impl_by_zero() {
        let mut interp = Interpreter::new();

        interp.push(Value::Number(5.0));
        interp.push(Value::Number(0.0));
        let result = div_impl(&mut interp);
        assert!(matches!(result, Err(RuntimeError::DivisionByZero)));

        // Nothing is pushed when the binding raises
        assert!(interp.stack.is_empty());
    }

    #[test]
    fn test_div_impl_zero_over_zero() {
        let mut interp = Interpreter::new();

        // 0 / 0 through the binding is still an error, not NaN
        interp.push(Value::Number(0.0));
        interp.push(Value::Number(0.0));
        let result = div_impl(&mut interp);
        assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
    }

    #[test]
    fn test_div_impl_non_numeric() {
        let mut interp = Interpreter::new();

        interp.push(Value::Number(6.0));
        interp.push(Value::String("zero".into()));
        let result = div_impl(&mut interp);
        assert!(matches!(result, Err(RuntimeError::ArgumentError(_))));
    }
}
