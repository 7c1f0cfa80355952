use crate::interpreter::{DictEntry, Interpreter};
use crate::value::{PrimitiveFn, Value};
use std::rc::Rc;

/// Register the four bound operations in the interpreter's dictionary.
///
/// Each operation is bound under both its symbol and its word form, so
/// `5 + 3` and `5 add 3` dispatch to the same primitive.
pub fn register_builtins(interp: &mut Interpreter) {
    // Helper to add a builtin with optional documentation
    let add_builtin = |interp: &mut Interpreter, name: &str, func: PrimitiveFn, doc: Option<&str>| {
        let atom = interp.intern_atom(name);
        interp.dictionary.insert(
            atom,
            DictEntry {
                value: Value::Builtin(func),
                doc: doc.map(Rc::<str>::from),
            },
        );
    };

    let add_doc = "Add two numbers.\nUsage: a + b => sum\nExample: 2 + 3 => 5";
    add_builtin(interp, "+", crate::primitives::add::add_impl, Some(add_doc));
    add_builtin(interp, "add", crate::primitives::add::add_impl, Some(add_doc));

    let sub_doc = "Subtract the second number from the first.\nUsage: a - b => difference\nExample: 5 - 3 => 2";
    add_builtin(interp, "-", crate::primitives::subtract::sub_impl, Some(sub_doc));
    add_builtin(interp, "subtract", crate::primitives::subtract::sub_impl, Some(sub_doc));

    let mul_doc = "Multiply two numbers.\nUsage: a * b => product\nExample: 6 * 7 => 42";
    add_builtin(interp, "*", crate::primitives::multiply::mul_impl, Some(mul_doc));
    add_builtin(interp, "multiply", crate::primitives::multiply::mul_impl, Some(mul_doc));

    let div_doc = "Divide the first number by the second.\nUsage: a / b => quotient\nExample: 6 / 2 => 3\nRaises an error when b is zero.";
    add_builtin(interp, "/", crate::primitives::divide::div_impl, Some(div_doc));
    add_builtin(interp, "divide", crate::primitives::divide::div_impl, Some(div_doc));
}
