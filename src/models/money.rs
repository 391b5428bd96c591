//! Money type for monetary amounts
//!
//! Internally stores amounts in cents (i64) so that subtotals and
//! apportionment stay exact; fractions of a cent never appear anywhere in the
//! engine. Display formatting is the only place a decimal point exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in currency units as a float, for proportion arithmetic
    /// and JSON output. Never fed back into stored amounts.
    pub fn to_unit_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "12.99", "12", ".99", "-3.50" and an optional leading
    /// currency symbol as produced by receipt extraction ("$12.99"). The
    /// units and fraction fields must be plain digit runs; at most one sign,
    /// before the symbol.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s).trim();

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let digits = |field: &str| {
            !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
        };

        let cents = match s.split_once('.') {
            Some((units, frac)) => {
                if !digits(frac) || !(units.is_empty() || digits(units)) {
                    return Err(invalid());
                }
                let units: i64 = if units.is_empty() {
                    0
                } else {
                    units.parse().map_err(|_| invalid())?
                };
                let frac_cents: i64 = match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                };
                units * 100 + frac_cents
            }
            None => {
                if !digits(s) {
                    return Err(invalid());
                }
                s.parse::<i64>().map_err(|_| invalid())? * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol for terminal display
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, Self(-self.0))
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1299);
        assert_eq!(m.cents(), 1299);
        assert!(!m.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1299).to_string(), "12.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1299).format_with_symbol("$"), "$12.99");
        assert_eq!(Money::from_cents(-1299).format_with_symbol("€"), "-€12.99");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("12.99").unwrap().cents(), 1299);
        assert_eq!(Money::parse("$12.99").unwrap().cents(), 1299);
        assert_eq!(Money::parse("12").unwrap().cents(), 1200);
        assert_eq!(Money::parse("12.5").unwrap().cents(), 1250);
        assert_eq!(Money::parse("-3.50").unwrap().cents(), -350);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
        assert_eq!(Money::parse("-.50").unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.999").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("12.").is_err());
    }

    #[test]
    fn test_parse_rejects_embedded_signs() {
        // Only a single leading sign is a sign; anything further in is noise
        assert!(Money::parse("--3").is_err());
        assert!(Money::parse("5.-5").is_err());
        assert!(Money::parse("-5.-5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("5.+5").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);

        let total: Money = [a, b, Money::from_cents(50)].into_iter().sum();
        assert_eq!(total.cents(), 1300);
    }

    #[test]
    fn test_to_unit_f64() {
        assert_eq!(Money::from_cents(1299).to_unit_f64(), 12.99);
        assert_eq!(Money::zero().to_unit_f64(), 0.0);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1299);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1299");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
