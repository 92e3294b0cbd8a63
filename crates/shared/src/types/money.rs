//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision. Rounding
//! happens only when an amount is rendered for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., rupiah, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

/// Locale conventions used to render a currency.
struct DisplayFormat {
    symbol: &'static str,
    group_separator: char,
    decimal_separator: char,
    minor_digits: u32,
}

impl Currency {
    const fn display_format(self) -> DisplayFormat {
        match self {
            Self::Idr => DisplayFormat {
                symbol: "Rp ",
                group_separator: '.',
                decimal_separator: ',',
                minor_digits: 2,
            },
            Self::Usd => DisplayFormat {
                symbol: "$",
                group_separator: ',',
                decimal_separator: '.',
                minor_digits: 2,
            },
            Self::Eur => DisplayFormat {
                symbol: "€",
                group_separator: '.',
                decimal_separator: ',',
                minor_digits: 2,
            },
            Self::Sgd => DisplayFormat {
                symbol: "S$",
                group_separator: ',',
                decimal_separator: '.',
                minor_digits: 2,
            },
            Self::Jpy => DisplayFormat {
                symbol: "¥",
                group_separator: ',',
                decimal_separator: '.',
                minor_digits: 0,
            },
        }
    }

    /// Number of digits after the decimal separator when displayed.
    #[must_use]
    pub const fn minor_digits(self) -> u32 {
        self.display_format().minor_digits
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Returns the amount rounded half away from zero to the currency's
    /// display precision.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount.round_dp_with_strategy(
            self.currency.minor_digits(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }
}

/// Inserts `separator` between every group of three digits, counted from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format = self.currency.display_format();
        let rounded = self.rounded();
        let digits = format!("{:.*}", format.minor_digits as usize, rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        if rounded < Decimal::ZERO {
            f.write_str("-")?;
        }
        f.write_str(format.symbol)?;
        f.write_str(&group_thousands(integer, format.group_separator))?;
        if !fraction.is_empty() {
            write!(f, "{}{fraction}", format.decimal_separator)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
