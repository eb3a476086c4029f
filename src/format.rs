use rug::{Float, Integer};

/// Renders `num` in fixed-point notation with exactly `digits` fractional
/// digits, rounding half to even on the last one.
pub fn to_fixed(num: &Float, digits: u32) -> String {
    if num.is_nan() {
        return "NaN".to_owned();
    }
    if num.is_infinite() {
        let text = if num.is_sign_negative() { "-inf" } else { "inf" };
        return text.to_owned();
    }

    let scale = Float::with_val(num.prec(), Integer::from(Integer::u_pow_u(10, digits)));
    let scaled = Float::with_val(num.prec(), num * &scale);
    let Some(rounded) = scaled.to_integer() else {
        return "NaN".to_owned();
    };

    let negative = rounded.is_negative();
    let mut magnitude = rounded.abs().to_string();
    let digits = digits as usize;
    if magnitude.len() <= digits {
        magnitude = format!("{:0>width$}", magnitude, width = digits + 1);
    }

    let (integer_part, fraction_part) = magnitude.split_at(magnitude.len() - digits);
    let mut result = String::with_capacity(magnitude.len() + 2);
    if negative {
        result.push('-');
    }
    result.push_str(integer_part);
    if !fraction_part.is_empty() {
        result.push('.');
        result.push_str(fraction_part);
    }
    result
}
