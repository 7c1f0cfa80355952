// Subtraction binding: ( a b -- a-b )

use crate::interpreter::Interpreter;
use crate::ops;
use crate::value::{RuntimeError, Value};

pub fn sub_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let b = interp.pop_number("'-' requires exactly 2 numeric arguments (e.g., '5 - 3')")?;
    let a = interp.pop_number("'-' requires exactly 2 numeric arguments (e.g., '5 - 3')")?;

    interp.push(Value::Number(ops::subtract(a, b)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_impl() {
        let mut interp = Interpreter::new();

        interp.push(Value::Number(5.0));
        interp.push(Value::Number(3.0));
        sub_impl(&mut interp).unwrap();

        let result = interp.pop().unwrap();
        assert!(matches!(result, Value::Number(n) if n == 2.0));
    }

    #[test]
    fn test_sub_impl_negative_result() {
        let mut interp = Interpreter::new();

        interp.push(Value::Number(3.0));
        interp.push(Value::Number(5.0));
        sub_impl(&mut interp).unwrap();

        let result = interp.pop().unwrap();
        assert!(matches!(result, Value::Number(n) if n == -2.0));
    }

    #[test]
    fn test_sub_impl_empty_stack() {
        let mut interp = Interpreter::new();

        let result = sub_impl(&mut interp);
        assert!(matches!(result, Err(RuntimeError::ArgumentError(_))));
    }
}
