//! Arbitrary-precision evaluation of `+ - * /` expressions with parentheses.
//!
//! A line goes through three stages: [`tokenize`](tokenize::tokenize) splits
//! it into tokens, [`to_postfix`](postfix::to_postfix) reorders them by
//! precedence, and [`eval_postfix`](eval::eval_postfix) reduces the postfix
//! sequence on a stack of [`rug::Float`] values. [`evaluate`] runs all three.
//!
//! ```
//! let value = gcalc::evaluate("（2+3）*4").unwrap();
//! assert_eq!(gcalc::format::to_fixed(&value, gcalc::DISPLAY_DIGITS), "20.0000000000");
//! ```

pub mod error;
pub mod eval;
pub mod format;
pub mod postfix;
pub mod token;
pub mod tokenize;

pub use error::{CalcError, Result};
pub use rug::Float;

/// Working precision of every value, in bits (about 77 decimal digits).
pub const PRECISION: u32 = 256;

/// Fractional digits shown for a result.
pub const DISPLAY_DIGITS: u32 = 10;

/// Evaluates one line of input.
///
/// Full-width parentheses are accepted as ASCII ones. Calls share no state.
pub fn evaluate(input: &str) -> Result<Float> {
    let input = tokenize::normalize_parens(input);
    let tokens = tokenize::tokenize(&input)?;
    let postfix = postfix::to_postfix(tokens);
    eval::eval_postfix(&postfix)
}
