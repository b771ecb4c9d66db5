//! Arithmetic expression evaluation for the calculator pad.
//!
//! # Invariants
//! - Accepted grammar: numbers, `+ - * /`, unary sign and parentheses.
//! - Division by zero, overflow and any parse failure are errors, never
//!   infinities.
//! - Parenthesis nesting is capped at [`MAX_NESTING`]; unary signs are
//!   folded without recursion.

use super::ERROR_DISPLAY;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    Empty,
    UnexpectedChar(usize),
    UnexpectedEnd,
    DivisionByZero,
    /// A literal or intermediate result left the finite `f64` range.
    Overflow,
    TooDeep,
}

impl Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "expression is empty"),
            Self::UnexpectedChar(at) => write!(f, "unexpected character at offset {at}"),
            Self::UnexpectedEnd => write!(f, "expression ended unexpectedly"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "result is out of range"),
            Self::TooDeep => write!(f, "parentheses nested deeper than {MAX_NESTING}"),
        }
    }
}

impl Error for ExpressionError {}

/// Evaluates `input` to a finite number.
pub fn evaluate(input: &str) -> Result<f64, ExpressionError> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
        depth: 0,
    };
    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(ExpressionError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(ExpressionError::UnexpectedChar(parser.pos));
    }
    finite(value)
}

fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::Overflow)
    }
}

/// Evaluates `input` into the calculator display text.
pub fn evaluate_display(input: &str) -> String {
    match evaluate(input) {
        Ok(value) => format_number(value),
        Err(_) => ERROR_DISPLAY.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn next_operator(&mut self, ops: &[u8]) -> Option<u8> {
        self.skip_whitespace();
        let op = self.peek().filter(|b| ops.contains(b))?;
        self.pos += 1;
        Some(op)
    }

    fn expr(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        while let Some(op) = self.next_operator(b"+-") {
            let rhs = self.term()?;
            value = finite(if op == b'+' { value + rhs } else { value - rhs })?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.factor()?;
        while let Some(op) = self.next_operator(b"*/") {
            let rhs = self.factor()?;
            if op == b'*' {
                value = finite(value * rhs)?;
            } else {
                if rhs == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                value = finite(value / rhs)?;
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, ExpressionError> {
        let mut negative = false;
        while let Some(sign) = self.next_operator(b"+-") {
            if sign == b'-' {
                negative = !negative;
            }
        }
        let value = self.primary()?;
        Ok(if negative { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64, ExpressionError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some(b'(') => {
                if self.depth >= MAX_NESTING {
                    return Err(ExpressionError::TooDeep);
                }
                self.pos += 1;
                self.depth += 1;
                let value = self.expr();
                self.depth -= 1;
                let value = value?;
                self.skip_whitespace();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(_) => Err(ExpressionError::UnexpectedChar(self.pos)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            Some(_) => Err(ExpressionError::UnexpectedChar(self.pos)),
        }
    }

    fn number(&mut self) -> Result<f64, ExpressionError> {
        let start = self.pos;
        let mut seen_dot = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => {}
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.pos += 1;
        }
        let literal = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| ExpressionError::UnexpectedChar(start))?;
        if literal == "." {
            return Err(ExpressionError::UnexpectedChar(start));
        }
        let normalized = if literal.ends_with('.') {
            &literal[..literal.len() - 1]
        } else {
            literal
        };
        let value = normalized
            .parse::<f64>()
            .map_err(|_| ExpressionError::UnexpectedChar(start))?;
        finite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, evaluate_display, ExpressionError, MAX_NESTING};

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("-3 + 10 / 4"), Ok(-0.5));
        assert_eq!(evaluate(".5*4"), Ok(2.0));
        assert_eq!(evaluate("7."), Ok(7.0));
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(evaluate_display("9/3"), "3");
        assert_eq!(evaluate_display("1/4"), "0.25");
        assert_eq!(evaluate_display("0*-1"), "0");
    }

    #[test]
    fn invalid_input_shows_error() {
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(evaluate("1/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(evaluate_display("1..2"), "Error");
        assert_eq!(evaluate_display("2*"), "Error");
        assert_eq!(evaluate_display("(1+2"), "Error");
        assert_eq!(evaluate_display("alert(1)"), "Error");
    }

    #[test]
    fn out_of_range_values_show_error() {
        let huge_literal = format!("1{}", "0".repeat(400));
        assert_eq!(evaluate(&huge_literal), Err(ExpressionError::Overflow));
        let nines = "9".repeat(201);
        assert_eq!(evaluate_display(&format!("{nines}*{nines}")), "Error");
        assert_eq!(evaluate_display("1e5"), "Error");
    }

    #[test]
    fn long_sign_runs_fold_without_recursion() {
        let input = format!("{}1", "-".repeat(1_000_000));
        assert_eq!(evaluate(&input), Ok(1.0));
        assert_eq!(evaluate("--3"), Ok(3.0));
        assert_eq!(evaluate("-+-+-2"), Ok(-2.0));
        assert_eq!(evaluate_display("-".repeat(1_000_000).as_str()), "Error");
    }

    #[test]
    fn nesting_is_capped() {
        let at_limit = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(evaluate(&at_limit), Ok(1.0));

        let deep = format!("{}1{}", "(".repeat(1_000_000), ")".repeat(1_000_000));
        assert_eq!(evaluate(&deep), Err(ExpressionError::TooDeep));
        assert_eq!(evaluate_display(&deep), "Error");
    }
}
