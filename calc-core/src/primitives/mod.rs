// Primitives module - one file per bound operation
//
// Each primitive is the host-callable shim for one native arithmetic
// function: it parses two numeric arguments off the stack, invokes the
// core function from ops, and pushes the numeric result. Argument
// failures never reach the arithmetic core.

pub mod add;
pub mod subtract;
pub mod multiply;
pub mod divide;
