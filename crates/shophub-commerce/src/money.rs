//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that cart totals are exact:
//! `2 x 79.99 + 199.99` is `35997` cents, never `359.96999999`.

use crate::error::MoneyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of minor-unit digits for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest minor unit.
    ///
    /// NaN and infinities are invalid amounts; values whose minor units do not
    /// fit in an `i64` overflow.
    ///
    /// ```
    /// use shophub_commerce::money::{Money, Currency};
    /// let price = Money::try_from_decimal(79.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 7999);
    /// assert!(Money::try_from_decimal(f64::NAN, Currency::USD).is_err());
    /// ```
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::InvalidAmount(amount.to_string()));
        }
        let multiplier = 10_i64.pow(currency.decimal_places());
        let scaled = (amount * multiplier as f64).round();
        // `i64::MAX as f64` is 2^63, one past the largest i64.
        if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(MoneyError::Overflow);
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Parse a decimal string such as `"79.99"` or `"$79.99"` without going through floats.
    ///
    /// Extra fractional digits beyond the currency's precision are rejected.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        let unsigned = trimmed.strip_prefix(currency.symbol()).unwrap_or(trimmed);
        let (negative, digits) = match unsigned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, unsigned),
        };

        let invalid = || MoneyError::InvalidAmount(input.to_string());
        let places = currency.decimal_places() as usize;
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() || frac.len() > places {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            // "9" with two places means 90 cents.
            let padded = format!("{:0<places$}", frac);
            padded.parse().map_err(|_| invalid())?
        };

        let amount = whole
            .checked_mul(10_i64.pow(places as u32))
            .and_then(|w| w.checked_add(frac))
            .ok_or(MoneyError::Overflow)?;

        Ok(Self::new(if negative { -amount } else { amount }, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return self.amount_cents.to_string();
        }
        let divisor = 10_i64.pow(places);
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}{}.{:0width$}",
            sign,
            abs / divisor as u64,
            abs % divisor as u64,
            width = places as usize
        )
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Add another amount, saturating at the numeric bounds.
    ///
    /// Both operands must share a currency; the result keeps `self`'s.
    pub fn saturating_add(&self, other: &Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
