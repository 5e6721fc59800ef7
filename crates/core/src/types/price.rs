//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are shown the Brazilian way: `.` groups thousands and `,`
//! separates cents, so `1234.5` renders as `R$ 1.234,50`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency (BRL).
    #[must_use]
    pub fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }

    /// Format for display with a space after the symbol (e.g., `R$ 19,90`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            self.currency_code.symbol(),
            format_decimal_br(self.amount)
        )
    }

    /// Format for display with the symbol glued to the amount (e.g., `R$19,90`).
    ///
    /// Used on installment lines, where the storefront prints the compact form.
    #[must_use]
    pub fn display_compact(&self) -> String {
        format!(
            "{}{}",
            self.currency_code.symbol(),
            format_decimal_br(self.amount)
        )
    }
}

/// ISO 4217 currency codes the storefront sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
        }
    }
}

/// Format a decimal with two fraction digits, `.` thousands and `,` cents.
///
/// Always exactly two fraction digits: the amount is first rounded to cents
/// with [`round_to_cents`], so `9.333` renders as `9,33`, never `9,333`.
///
/// ```
/// use rust_decimal::Decimal;
/// use vitrine_core::format_decimal_br;
///
/// assert_eq!(format_decimal_br(Decimal::new(123_456, 2)), "1.234,56");
/// assert_eq!(format_decimal_br(Decimal::new(5, 0)), "5,00");
/// ```
#[must_use]
pub fn format_decimal_br(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{cents}")
}

/// Round to two fraction digits, halves away from zero.
///
/// This is the amount a shopper sees; price filters compare against it too.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
