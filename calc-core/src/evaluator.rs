// This module executes parsed calculations against the host environment.
//
// EXECUTION MODEL:
// 1. Both operands are pushed onto the interpreter's stack
// 2. The operation name is looked up in the dictionary
// 3. The bound primitive pops the operands, runs the native function,
//    and pushes the result
// 4. The result is popped and returned to the caller
//
// Every failure mode surfaces as a RuntimeError: unknown names as
// UndefinedOperation, malformed arguments as ArgumentError (via the
// parser's From conversion), and a zero divisor as DivisionByZero.

use crate::interpreter::Interpreter;
use crate::parser::{Expression, parse};
use crate::value::{RuntimeError, Value};

/// Execute one parsed calculation and return its result value.
pub fn evaluate(expr: &Expression, interp: &mut Interpreter) -> Result<Value, RuntimeError> {
    let entry = interp
        .lookup(&expr.op)
        .cloned()
        .ok_or_else(|| RuntimeError::UndefinedOperation(expr.op.clone()))?;

    interp.push(Value::Number(expr.lhs));
    interp.push(Value::Number(expr.rhs));

    match entry.value {
        Value::Builtin(func) => func(interp)?,
        other => {
            return Err(RuntimeError::UndefinedOperation(format!(
                "{} is not callable (got {})",
                expr.op,
                other.type_name()
            )));
        }
    }

    interp.pop()
}

/// Parse and execute one line of caller input.
///
/// The quit words short-circuit before parsing and signal a clean exit to
/// the REPL via [`RuntimeError::QuitRequested`].
pub fn evaluate_line(input: &str, interp: &mut Interpreter) -> Result<Value, RuntimeError> {
    if matches!(input.trim(), "quit" | "exit" | "q") {
        return Err(RuntimeError::QuitRequested);
    }

    let expr = parse(input)?;
    evaluate(&expr, interp)
}
