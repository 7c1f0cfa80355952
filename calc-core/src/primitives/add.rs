// Addition binding: ( a b -- a+b )

use crate::interpreter::Interpreter;
use crate::ops;
use crate::value::{RuntimeError, Value};

pub fn add_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let b = interp.pop_number("'+' requires exactly 2 numeric arguments (e.g., '5 + 3')")?;
    let a = interp.pop_number("'+' requires exactly 2 numeric arguments (e.g., '5 + 3')")?;

    interp.push(Value::Number(ops::add(a, b)));
    Ok(())
}
