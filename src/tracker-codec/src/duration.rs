use chrono::TimeDelta;

use crate::error::DurationError;

type Result<T> = std::result::Result<T, DurationError>;

const MICROSECOND: u64 = 1_000;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        // U+00B5 micro sign and U+03BC greek mu
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses compound durations such as `"1h30m"`, `"45m"`, `"1.5h"` or `"-300ms"`.
///
/// A leading sign is allowed and `"0"` needs no unit. Zero and negative
/// durations are valid here; callers decide whether they make sense.
pub fn parse_duration(input: &str) -> Result<TimeDelta> {
    let (negative, mut s) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let (whole, rest) = split_digits(s);
        s = rest;
        let whole_value = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| DurationError::Overflow)?
        };

        let mut fraction: u64 = 0;
        let mut scale = 1.0_f64;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (digits, rest) = split_digits(rest);
            s = rest;
            has_fraction = !digits.is_empty();
            for digit in digits.bytes() {
                // Digits past u64 precision are dropped.
                let Some(next) = fraction
                    .checked_mul(10)
                    .and_then(|f| f.checked_add(u64::from(digit - b'0')))
                else {
                    break;
                };
                fraction = next;
                scale *= 10.0;
            }
        }

        if whole.is_empty() && !has_fraction {
            return Err(DurationError::InvalidNumber);
        }

        let unit_end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        let (unit, rest) = s.split_at(unit_end);
        s = rest;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let mut value = whole_value
            .checked_mul(unit)
            .ok_or(DurationError::Overflow)?;
        if fraction > 0 {
            let partial = (fraction as f64 * (unit as f64 / scale)) as u64;
            value = value.checked_add(partial).ok_or(DurationError::Overflow)?;
        }
        total = total.checked_add(value).ok_or(DurationError::Overflow)?;
    }

    let nanos = if negative {
        0_i64.checked_sub_unsigned(total)
    } else {
        i64::try_from(total).ok()
    }
    .ok_or(DurationError::Overflow)?;

    Ok(TimeDelta::nanoseconds(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_hours_and_minutes() {
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("1h15m").unwrap(), TimeDelta::minutes(75));
    }

    #[test]
    fn single_units() {
        assert_eq!(parse_duration("45m").unwrap(), TimeDelta::minutes(45));
        assert_eq!(parse_duration("2h").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("90s").unwrap(), TimeDelta::seconds(90));
        assert_eq!(parse_duration("300ms").unwrap(), TimeDelta::milliseconds(300));
        assert_eq!(parse_duration("7ns").unwrap(), TimeDelta::nanoseconds(7));
    }

    #[test]
    fn micro_second_spellings() {
        let expected = TimeDelta::microseconds(5);
        assert_eq!(parse_duration("5us").unwrap(), expected);
        assert_eq!(parse_duration("5\u{b5}s").unwrap(), expected);
        assert_eq!(parse_duration("5\u{3bc}s").unwrap(), expected);
    }

    #[test]
    fn fractional_values() {
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), TimeDelta::seconds(30));
        assert_eq!(parse_duration("2.m").unwrap(), TimeDelta::minutes(2));
        assert_eq!(parse_duration("0.25s").unwrap(), TimeDelta::milliseconds(250));
    }

    #[test]
    fn signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("0s").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-1h").unwrap(), TimeDelta::hours(-1));
        assert_eq!(parse_duration("+5s").unwrap(), TimeDelta::seconds(5));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("-"), Err(DurationError::Empty));
    }

    #[test]
    fn rejects_missing_unit() {
        assert_eq!(parse_duration("1"), Err(DurationError::MissingUnit));
        assert_eq!(parse_duration("1h2"), Err(DurationError::MissingUnit));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert_eq!(
            parse_duration("1d"),
            Err(DurationError::UnknownUnit("d".to_string()))
        );
        assert_eq!(
            parse_duration("1 h"),
            Err(DurationError::UnknownUnit(" h".to_string()))
        );
    }

    #[test]
    fn rejects_missing_number() {
        assert_eq!(parse_duration("h"), Err(DurationError::InvalidNumber));
        assert_eq!(parse_duration("."), Err(DurationError::InvalidNumber));
        assert_eq!(parse_duration("1h.m"), Err(DurationError::InvalidNumber));
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(
            parse_duration("9999999999999h"),
            Err(DurationError::Overflow)
        );
        assert_eq!(
            parse_duration("99999999999999999999s"),
            Err(DurationError::Overflow)
        );
    }
}
