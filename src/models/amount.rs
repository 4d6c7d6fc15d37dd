//! Amount type for expense values
//!
//! Backed by a `Decimal` so that totals are exact no matter the order in
//! which amounts are added. The persisted file still holds plain JSON
//! numbers (`"amount": 50.0`). Parsing rejects anything that is not a
//! finite, non-negative number.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A non-negative, currency-agnostic expense amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// use rust_decimal::Decimal;
    /// let amount = Amount::new(Decimal::new(1050, 2));
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the exact value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Nearest binary float, for chart geometry and JSON output
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts formats: "50", "50.0", " 12.75 ", "1e3"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value = match Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
            Ok(value) => value,
            Err(_) => {
                return Err(match s.parse::<f64>() {
                    Ok(v) if !v.is_finite() => AmountParseError::NotFinite(s.to_string()),
                    Ok(_) => AmountParseError::OutOfRange(s.to_string()),
                    Err(_) => AmountParseError::InvalidFormat(s.to_string()),
                });
            }
        };

        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountParseError::Negative(s.to_string()));
        }

        Ok(Self(value.normalize()))
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
        // Shortest round-trip text, so 60.74 stays 60.74 rather than its binary expansion
        Decimal::from_str(&value.to_string())
            .map(|d| Amount(d.normalize()))
            .map_err(|_| E::custom(format!("amount {} is out of range", value)))
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
    OutOfRange(String),
    Negative(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is required"),
            Self::InvalidFormat(s) => write!(f, "Amount must be a number, got '{}'", s),
            Self::NotFinite(s) => write!(f, "Amount must be a finite number, got '{}'", s),
            Self::OutOfRange(s) => write!(f, "Amount is out of range, got '{}'", s),
            Self::Negative(s) => write!(f, "Amount cannot be negative, got '{}'", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
