//! # calc-core
//!
//! Core library for the calc calculator: four native arithmetic functions
//! plus the host binding layer that exposes them to callers.
//!
//! ## Two surfaces, one asymmetry
//!
//! - The **native surface** ([`ops`]) is four pure, total `f64` functions.
//!   `ops::divide(a, 0.0)` returns NaN and never fails.
//! - The **bound surface** ([`primitives`], dispatched through
//!   [`Interpreter`]) parses exactly two numeric arguments, rejects
//!   malformed calls with `ArgumentError`, and raises `DivisionByZero` for
//!   a zero divisor instead of producing NaN.
//!
//! ## Example
//!
//! ```
//! use calc_core::{Interpreter, Value, evaluate_line, ops};
//!
//! // Native surface: total, NaN sentinel on zero divisor
//! assert_eq!(ops::add(2.0, 3.0), 5.0);
//! assert!(ops::divide(5.0, 0.0).is_nan());
//!
//! // Bound surface: host-visible error on zero divisor
//! let mut interp = Interpreter::new();
//! let result = evaluate_line("6 / 2", &mut interp).unwrap();
//! assert!(matches!(result, Value::Number(n) if n == 3.0));
//! assert!(evaluate_line("5 / 0", &mut interp).is_err());
//! ```

// Public modules
pub mod ops;
pub mod value;
pub mod interpreter;
pub mod parser;
pub mod builtins;
pub mod evaluator;
pub mod primitives;

// Re-exports for convenience
pub use interpreter::{DictEntry, Interpreter};
pub use value::{RuntimeError, Value};
pub use parser::{Expression, ParseError, parse};
pub use evaluator::{evaluate, evaluate_line};
