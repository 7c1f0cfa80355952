// Expression parser
//
// Input is one calculation per line: <number> <operation> <number>,
// e.g. "5 + 3" or "10 divide 2". Parsing happens before execution, so
// it has its own error type; the From impl lets the evaluator propagate
// parse failures with ? as binding-level argument errors.

use crate::value::RuntimeError;
use std::fmt;

/// A parsed infix calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub op: String,
    pub rhs: f64,
}

#[derive(Debug)]
pub enum ParseError {
    MalformedExpression(String), // Not of the form <number> <operation> <number>
    InvalidNumber(String),       // Operand that failed to parse as f64
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedExpression(msg) => write!(f, "{}", msg),
            ParseError::InvalidNumber(text) => write!(f, "Invalid number: {}", text),
        }
    }
}

// Malformed caller input is an argument error at the binding boundary
impl From<ParseError> for RuntimeError {
    fn from(err: ParseError) -> Self {
        RuntimeError::ArgumentError(err.to_string())
    }
}

pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [lhs, op, rhs] = parts.as_slice() else {
        return Err(ParseError::MalformedExpression(format!(
            "expected <number> <operation> <number>, got {} token(s)",
            parts.len()
        )));
    };

    let lhs: f64 = lhs
        .parse()
        .map_err(|_| ParseError::InvalidNumber(lhs.to_string()))?;
    let rhs: f64 = rhs
        .parse()
        .map_err(|_| ParseError::InvalidNumber(rhs.to_string()))?;

    Ok(Expression {
        lhs,
        op: op.to_string(),
        rhs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_expression() {
        let expr = parse("5 + 3").unwrap();
        assert_eq!(expr, Expression { lhs: 5.0, op: "+".to_string(), rhs: 3.0 });
    }

    #[test]
    fn test_parse_word_expression() {
        let expr = parse("10 divide 2").unwrap();
        assert_eq!(expr.op, "divide");
        assert_eq!(expr.lhs, 10.0);
        assert_eq!(expr.rhs, 2.0);
    }

    #[test]
    fn test_parse_negative_and_fractional() {
        let expr = parse("-2.5 * 4").unwrap();
        assert_eq!(expr.lhs, -2.5);
        assert_eq!(expr.rhs, 4.0);
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let expr = parse("  6   /   2 ").unwrap();
        assert_eq!(expr.op, "/");
    }

    #[test]
    fn test_parse_wrong_token_count() {
        assert!(matches!(parse("5 +"), Err(ParseError::MalformedExpression(_))));
        assert!(matches!(parse("5 + 3 4"), Err(ParseError::MalformedExpression(_))));
        assert!(matches!(parse(""), Err(ParseError::MalformedExpression(_))));
    }

    #[test]
    fn test_parse_invalid_number() {
        assert!(matches!(parse("five + 3"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse("5 + three"), Err(ParseError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_error_converts_to_argument_error() {
        let err: RuntimeError = parse("nonsense").unwrap_err().into();
        assert!(matches!(err, RuntimeError::ArgumentError(_)));
    }
}
