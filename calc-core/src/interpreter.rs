use crate::value::{RuntimeError, Value};
use std::collections::HashMap;
use std::rc::Rc;

/// Dictionary entry: a bound operation plus its documentation.
#[derive(Clone)]
pub struct DictEntry {
    pub value: Value,
    pub doc: Option<Rc<str>>, // Optional documentation string for help
}

// Implement Debug manually since Value doesn't auto-derive Debug
impl std::fmt::Debug for DictEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictEntry")
            .field("value", &self.value)
            .field("doc", &self.doc)
            .finish()
    }
}

/// The host environment that bound operations execute in.
///
/// Arguments cross the binding boundary as stack values: callers push two
/// operands, the bound primitive pops them, checks them, and pushes one
/// result. Popping enforces arity and [`Interpreter::pop_number`] enforces
/// type, so malformed calls surface as `ArgumentError` before any native
/// arithmetic runs.
pub struct Interpreter {
    pub stack: Vec<Value>,
    pub dictionary: HashMap<Rc<str>, DictEntry>,
    pub atoms: HashMap<String, Rc<str>>,
}

impl Interpreter {
    pub fn new() -> Self {
        let mut interpreter = Self {
            stack: Vec::new(),
            dictionary: HashMap::new(),
            atoms: HashMap::new(),
        };

        // Bind the arithmetic operations into the dictionary
        crate::builtins::register_builtins(&mut interpreter);

        interpreter
    }

    pub fn intern_atom(&mut self, text: &str) -> Rc<str> {
        if let Some(existing) = self.atoms.get(text) {
            existing.clone()
        } else {
            let atom: Rc<str> = text.into();
            self.atoms.insert(text.to_string(), atom.clone());
            atom
        }
    }

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<Value, RuntimeError> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::ArgumentError("stack is empty".to_string()))
    }

    // Arity check: a missing operand is an argument error at the binding
    // boundary, reported with the operation's own context message.
    pub fn pop_operand(&mut self, context: &str) -> Result<Value, RuntimeError> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::ArgumentError(context.to_string()))
    }

    // Type check: bound operations take exactly two numeric arguments.
    pub fn pop_number(&mut self, context: &str) -> Result<f64, RuntimeError> {
        let value = self.pop_operand(context)?;
        match value {
            Value::Number(n) => Ok(n),
            other => Err(RuntimeError::ArgumentError(format!(
                "expected a number, got {}",
                other.type_name()
            ))),
        }
    }

    /// Look up a bound operation by name.
    pub fn lookup(&self, name: &str) -> Option<&DictEntry> {
        self.dictionary.get(name)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
