use std::fmt;
use std::rc::Rc;

// Primitive function type: a bound operation acting on the host environment.
// Primitives pop their arguments off the stack and push their result.
pub type PrimitiveFn = fn(&mut crate::interpreter::Interpreter) -> Result<(), RuntimeError>;

/// A value in the host environment.
///
/// Operations traffic in `Number`; `String` exists so the binding layer has a
/// non-numeric value to reject, and `Builtin` is what the dictionary stores
/// for each bound operation.
#[derive(Clone)]
pub enum Value {
    Number(f64),     // Double-precision operand/result
    String(Rc<str>), // Literal text - ref counted, not interned
    Builtin(PrimitiveFn),
}

// Implement Debug manually since PrimitiveFn doesn't implement Debug
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({})", s),
            Value::Builtin(_) => write!(f, "Builtin(<function>)"),
        }
    }
}

impl Value {
    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Builtin(_) => "builtin",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Builtin(_) => write!(f, "<builtin>"),
        }
    }
}

/// Errors raised at the host binding boundary.
///
/// `DivisionByZero` is raised by the bound divide only - the native core
/// function ([`crate::ops::divide`]) returns NaN instead and never fails.
#[derive(Debug)]
pub enum RuntimeError {
    ArgumentError(String),      // Wrong arity or non-numeric operand
    DivisionByZero,             // Zero divisor through the binding
    UndefinedOperation(String), // Operation name not in the dictionary
    QuitRequested,              // Special error to signal clean exit from the REPL
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::ArgumentError(msg) => write!(f, "Argument error: {}", msg),
            RuntimeError::DivisionByZero => write!(f, "Division by zero"),
            RuntimeError::UndefinedOperation(op) => write!(f, "Undefined operation: {}", op),
            RuntimeError::QuitRequested => write!(f, "Quit requested"),
        }
    }
}

impl std::error::Error for RuntimeError {}
