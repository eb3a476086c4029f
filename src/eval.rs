use crate::error::{CalcError, Result};
use crate::token::{Operator, Token};
use crate::PRECISION;
use rug::Float;
use tracing::{debug, trace};

/// Runs a postfix token sequence on a value stack.
///
/// Each operator pops `b` then `a` and pushes `a op b`. Exactly one value must
/// remain at the end.
pub fn eval_postfix(tokens: &[Token]) -> Result<Float> {
    let mut stack: Vec<Float> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value = parse_number(text)?;
                trace!(%value, "push");
                stack.push(value);
            }
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(CalcError::InvalidExpression);
                };
                let value = apply_operator(*op, &a, &b)?;
                trace!(op = %op.symbol(), %a, %b, %value, "apply");
                stack.push(value);
            }
            // Only reachable for an unclosed `(` carried through conversion.
            Token::LeftParen | Token::RightParen => {
                return Err(CalcError::InvalidNumber(token.to_string()));
            }
        }
    }

    if stack.len() != 1 {
        debug!(remaining = stack.len(), "value stack did not reduce to one");
        return Err(CalcError::InvalidExpression);
    }
    stack.pop().ok_or(CalcError::InvalidExpression)
}

fn apply_operator(op: Operator, a: &Float, b: &Float) -> Result<Float> {
    let value = match op {
        Operator::Add => Float::with_val(PRECISION, a + b),
        Operator::Subtract => Float::with_val(PRECISION, a - b),
        Operator::Multiply => Float::with_val(PRECISION, a * b),
        Operator::Divide => {
            if b.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            Float::with_val(PRECISION, a / b)
        }
    };
    Ok(value)
}

/// Parses a plain decimal literal: digits with at most one `.`, at least one
/// digit overall. Signs, exponents and `inf`/`nan` are not literals here.
pub fn parse_number(text: &str) -> Result<Float> {
    let invalid = || CalcError::InvalidNumber(text.to_owned());

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (text, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty())
        || !all_digits(integer)
        || !all_digits(fraction)
    {
        return Err(invalid());
    }

    // MPFR wants a digit on both sides of the point.
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    let canonical = format!("{integer}.{fraction}");

    let parsed = Float::parse(&canonical).map_err(|_| invalid())?;
    Ok(Float::with_val(PRECISION, parsed))
}
