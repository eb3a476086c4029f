use gcalc::format::to_fixed;
use gcalc::{evaluate, CalcError, DISPLAY_DIGITS};

fn show(input: &str) -> String {
    let value = evaluate(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
    to_fixed(&value, DISPLAY_DIGITS)
}

#[test]
fn multiplication_before_addition() {
    assert_eq!(show("2 + 3 * 4"), "14.0000000000");
    assert_eq!(show("2 * 3 + 4 * 5"), "26.0000000000");
    assert_eq!(show("1 + 6 / 2 - 1"), "3.0000000000");
}

#[test]
fn same_precedence_runs_left_to_right() {
    assert_eq!(show("10 - 2 - 3"), "5.0000000000");
    assert_eq!(show("100 / 10 / 5"), "2.0000000000");
    assert_eq!(show("8 / 4 * 2"), "4.0000000000");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(show("(2 + 3) * 4"), "20.0000000000");
    assert_eq!(show("((1 + 2) * (3 + 4)) - 1"), "20.0000000000");
}

#[test]
fn full_width_parentheses_match_ascii() {
    assert_eq!(show("（2+3）*4"), "20.0000000000");
    assert_eq!(
        evaluate("（2+3）*4").unwrap(),
        evaluate("(2+3)*4").unwrap()
    );
    assert_eq!(show("（1+（2）)"), "3.0000000000");
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(evaluate("5 / 0"), Err(CalcError::DivisionByZero));
    assert_eq!(show("0 / 5"), "0.0000000000");
}

#[test]
fn decimals_keep_their_digits() {
    assert_eq!(show("1 / 3"), "0.3333333333");
    assert_eq!(show("0.1 + 0.2"), "0.3000000000");
    assert_eq!(show("1.5 * 1.5"), "2.2500000000");
    assert_eq!(show("1 - 3"), "-2.0000000000");
    assert_eq!(show("123456789012345678901234567890 + 1"), "123456789012345678901234567891.0000000000");
}

#[test]
fn invalid_character_names_the_character() {
    let err = evaluate("2 + a").unwrap_err();
    assert_eq!(err, CalcError::InvalidCharacter('a'));
    assert_eq!(err.to_string(), "Invalid character: a");
}

#[test]
fn operator_without_operands() {
    assert_eq!(evaluate("+"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate("-5"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate("2 3"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate(""), Err(CalcError::InvalidExpression));
}

#[test]
fn malformed_numbers() {
    let err = evaluate("1.2.3 * 2").unwrap_err();
    assert_eq!(err, CalcError::InvalidNumber("1.2.3".into()));
    assert_eq!(err.to_string(), "Invalid number: 1.2.3");
    assert_eq!(evaluate("(1 + 2"), Err(CalcError::InvalidNumber("(".into())));
}

#[test]
fn unmatched_close_paren_is_tolerated() {
    assert_eq!(show("2 + 3)"), show("2 + 3"));
    assert_eq!(show("2 + 3)"), "5.0000000000");
}

#[test]
fn repeated_calls_agree() {
    for input in ["1 / 7", "2 + a", "5 / 0", "(4 - 1) * 2.5"] {
        assert_eq!(evaluate(input), evaluate(input));
    }
}
