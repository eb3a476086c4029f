/// Everything that can stop a single expression from producing a value.
///
/// None of these are fatal to the shell; they abort only the expression being
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The tokenizer met a character outside digits, `.`, space, operators and
    /// parentheses.
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    /// A token in number position is not a decimal literal.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Operand count did not work out: an operator ran short of operands, or
    /// the expression left zero or several values behind.
    #[error("Invalid expression!")]
    InvalidExpression,

    #[error("Division by zero!")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CalcError>;
