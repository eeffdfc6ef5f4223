use crate::constants::{ADDRESS_HEAD, ADDRESS_TAIL};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Keeps the first `head` and last `tail` characters of `value`, joined by `...`.
/// Values too short to benefit are returned unchanged.
pub fn shorten(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return value.to_string();
    }

    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

pub fn shorten_address(address: impl ToString) -> String {
    let address = address.to_string();
    if address.chars().count() > 15 {
        shorten(&address, 10, 5)
    } else {
        address // Return the address as is if it's too short to shorten
    }
}

pub fn shorten_destination_address(address: &str) -> String {
    shorten(address, ADDRESS_HEAD, ADDRESS_TAIL)
}

pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

// Beyond this many decimals an f64 has nothing left to round.
const MAX_FEE_PRECISION: u32 = 15;

/// Rounds the fee to `precision` decimal places, ties away from zero, and drops trailing zeros.
/// Without a precision the fee is shown as is.
pub fn format_fee(fee: f64, precision: Option<u32>) -> String {
    match precision {
        Some(precision) if fee.is_finite() && precision <= MAX_FEE_PRECISION => {
            let scale = 10f64.powi(precision as i32);
            let rounded = (fee * scale).round() / scale;
            if rounded.is_finite() {
                rounded.to_string()
            } else {
                fee.to_string()
            }
        }
        _ => fee.to_string(),
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

pub fn format_date_in<Tz: TimeZone>(date: DateTime<Utc>, timezone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(timezone)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
