use crate::token::Token;
use tracing::debug;

/// Reorders infix tokens into postfix (shunting-yard).
///
/// Never fails. Operators of equal precedence pop each other, which makes
/// every operator left-associative. A `)` with no matching `(` just drains the
/// stack and is otherwise ignored, so `2 + 3)` behaves like `2 + 3`. An
/// unclosed `(` ends up in the output and is rejected by the evaluator.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operator_stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operator(op) => {
                while let Some(top) = operator_stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.extend(operator_stack.pop());
                }
                operator_stack.push(token);
            }
            Token::LeftParen => operator_stack.push(token),
            Token::RightParen => {
                while let Some(top) = operator_stack.pop() {
                    if top == Token::LeftParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Number(_) => output.push(token),
        }
    }

    while let Some(op) = operator_stack.pop() {
        output.push(op);
    }

    debug!(postfix = %join(&output), "converted to postfix");
    output
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
