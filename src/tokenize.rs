use crate::error::{CalcError, Result};
use crate::token::{Operator, Token};
use tracing::debug;

/// Rewrites full-width parentheses (`（`, `）`) as their ASCII forms.
pub fn normalize_parens(input: &str) -> String {
    input.replace('（', "(").replace('）', ")")
}

/// Splits a line into number, operator and parenthesis tokens.
///
/// Spaces are skipped. Runs of digits and `.` become one number token without
/// any check on their shape; a malformed literal such as `1.2.3` is rejected
/// later when the evaluator parses it. Any other character aborts with
/// [`CalcError::InvalidCharacter`].
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut number = String::new();

    for c in input.chars() {
        match c {
            ' ' => continue,
            '0'..='9' | '.' => number.push(c),
            '+' | '-' | '*' | '/' | '(' | ')' => {
                if !number.is_empty() {
                    tokens.push(Token::Number(std::mem::take(&mut number)));
                }
                let token = match c {
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    _ => match Operator::from_char(c) {
                        Some(op) => Token::Operator(op),
                        None => return Err(CalcError::InvalidCharacter(c)),
                    },
                };
                tokens.push(token);
            }
            _ => return Err(CalcError::InvalidCharacter(c)),
        }
    }
    if !number.is_empty() {
        tokens.push(Token::Number(number));
    }

    debug!(?tokens, "tokenized");
    Ok(tokens)
}
