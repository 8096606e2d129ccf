use std::str::FromStr;

use kube_quantity::ParsedQuantity;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const DECIMAL_SUFFIXES: [(&str, u32); 6] = [("k", 1), ("M", 2), ("G", 3), ("T", 4), ("P", 5), ("E", 6)];
const BINARY_SUFFIXES: [(&str, u32); 6] = [("Ki", 1), ("Mi", 2), ("Gi", 3), ("Ti", 4), ("Pi", 5), ("Ei", 6)];

/// Strips a trailing `m` and reads the rest as an integer, or 0. Cores are not rescaled to
/// millicores, so "4" is 4 and "500m" is 500.
pub fn parse_cpu(raw: &str) -> i64 {
    return raw.strip_suffix('m').unwrap_or(raw).parse().unwrap_or(0);
}

/// Converts a memory quantity to bytes, rounding fractions up to the next byte. Anything that is
/// not a valid quantity is 0.
pub fn parse_memory(raw: &str) -> i64 {
    if raw.is_empty() || ParsedQuantity::try_from(raw).is_err() {
        return 0;
    }

    return quantity_to_bytes(raw).unwrap_or(0);
}

fn quantity_to_bytes(raw: &str) -> Option<i64> {
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(raw.len());
    let (number, suffix) = raw.split_at(split);
    let mantissa = Decimal::from_str(number).ok()?;

    let bytes = mantissa.checked_mul(suffix_multiplier(suffix)?)?;
    return bytes.ceil().to_i64();
}

fn suffix_multiplier(suffix: &str) -> Option<Decimal> {
    if suffix.is_empty() {
        return Some(Decimal::ONE);
    }
    if suffix == "m" {
        return Some(Decimal::new(1, 3));
    }
    if let Some((_, power)) = BINARY_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Some(Decimal::from(1024i64.pow(*power)));
    }
    if let Some((_, power)) = DECIMAL_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Some(Decimal::from(1000i64.pow(*power)));
    }

    // decimal exponent, e.g. "1e3" or "5E-2"
    let exponent = suffix.strip_prefix('e').or_else(|| suffix.strip_prefix('E'))?;
    let exponent: i32 = exponent.parse().ok()?;
    return Decimal::from_scientific(&format!("1e{}", exponent)).ok();
}
