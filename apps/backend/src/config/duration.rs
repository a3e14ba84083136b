//! Parsing of human-written durations such as `15m`, `1h30m` or `-90s`.

use time::Duration;

const MAX_COMPONENT: i64 = 1_000_000_000;

/// Parse a sequence of `<integer><unit>` pairs with units `h`, `m`, `s`, `ms`,
/// optionally prefixed by `-`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    let (negative, mut rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };

    if rest.is_empty() {
        return Err(format!("invalid duration {input:?}"));
    }

    let mut total = Duration::ZERO;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("missing unit in duration {input:?}"))?;
        if digits_end == 0 {
            return Err(format!("invalid duration {input:?}"));
        }

        let value: i64 = rest[..digits_end]
            .parse()
            .ok()
            .filter(|v| *v <= MAX_COMPONENT)
            .ok_or_else(|| format!("invalid number in duration {input:?}"))?;
        rest = &rest[digits_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let part = match &rest[..unit_end] {
            "h" => Duration::hours(value),
            "m" => Duration::minutes(value),
            "s" => Duration::seconds(value),
            "ms" => Duration::milliseconds(value),
            unit => return Err(format!("unknown unit {unit:?} in duration {input:?}")),
        };
        total = total
            .checked_add(part)
            .ok_or_else(|| format!("duration {input:?} is too large"))?;
        rest = &rest[unit_end..];
    }

    Ok(if negative { -total } else { total })
}
