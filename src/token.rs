use std::fmt;

/// Binding strength used by the postfix converter. Parentheses sit at
/// `Lowest` so the precedence loop never pops them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Addition,
    Multiplication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::Addition,
            Operator::Multiply | Operator::Divide => Precedence::Multiplication,
        }
    }
}

/// One lexical unit. Numbers keep their source text; whether that text is a
/// valid decimal is decided by the evaluator, not the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub fn precedence(&self) -> Precedence {
        match self {
            Token::Operator(op) => op.precedence(),
            _ => Precedence::Lowest,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}
