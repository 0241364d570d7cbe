// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-unit conversion between wei, gwei, ether, and USD
//!
//! All scale factors are fixed powers of ten (1 ether = 10^9 gwei =
//! 10^18 wei), so every conversion is an exact [`BigDecimal`]
//! multiplication; native floating point never enters a wei/gwei/ether/USD
//! computation. Display truncates fractional denominations toward zero at
//! the denomination's natural decimal-place count; back-conversions to wei
//! and USD amounts round half-up.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

/// A source or target denomination of the base currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Smallest indivisible unit; 1 ether = 10^18 wei
    Wei,
    /// 10^9 wei; common unit for transaction fee pricing
    Gwei,
    /// Base currency unit
    Ether,
}

impl Denomination {
    /// All denominations in fixed report order
    pub const ALL: [Denomination; 3] = [Denomination::Wei, Denomination::Gwei, Denomination::Ether];

    /// Power-of-ten scale relative to wei; doubles as the denomination's
    /// natural decimal-place count for display
    pub const fn decimals(&self) -> i64 {
        match self {
            Denomination::Wei => 0,
            Denomination::Gwei => 9,
            Denomination::Ether => 18,
        }
    }

    /// Stable identifier used in host configuration
    pub const fn identifier(&self) -> &'static str {
        match self {
            Denomination::Wei => "wei",
            Denomination::Gwei => "gwei",
            Denomination::Ether => "ether",
        }
    }

    /// Capitalized label used in report sections and entries
    pub const fn label(&self) -> &'static str {
        match self {
            Denomination::Wei => "Wei",
            Denomination::Gwei => "Gwei",
            Denomination::Ether => "Ether",
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when a denomination identifier is not recognized
#[derive(Debug, thiserror::Error)]
#[error("Unknown denomination identifier: {0}")]
pub struct UnknownDenomination(String);

impl FromStr for Denomination {
    type Err = UnknownDenomination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wei" => Ok(Denomination::Wei),
            "gwei" => Ok(Denomination::Gwei),
            "ether" => Ok(Denomination::Ether),
            other => Err(UnknownDenomination(other.to_string())),
        }
    }
}

/// Capitalized label of the USD entry in report sections
pub const USD_LABEL: &str = "Usd";

/// A single rendered conversion: target unit label plus formatted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedForm {
    /// Capitalized target unit label (`"Wei"`, `"Gwei"`, `"Ether"`, `"Usd"`)
    pub unit: &'static str,
    /// Formatted value, `$`-prefixed for USD
    pub value: String,
}

/// Exact power-of-ten scale factor
fn pow10(exponent: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -exponent)
}

/// Re-express a value from one denomination in another, exactly
pub fn convert(value: &BigDecimal, from: Denomination, to: Denomination) -> BigDecimal {
    value * pow10(from.decimals() - to.decimals())
}

/// Compute the conversions a report section lists for one source
/// denomination: each other denomination in fixed wei/gwei/ether order,
/// then USD
///
/// The rate is a plain USD-per-ether value read from the shared cell; each
/// form here is a pure function of `(value, rate)`. A rate that is not a
/// finite number drops the USD entry instead of failing.
pub fn forms_for(source: Denomination, value: &BigDecimal, rate: f64) -> Vec<ConvertedForm> {
    let mut forms = Vec::with_capacity(3);

    for target in Denomination::ALL {
        if target == source {
            continue;
        }
        let converted = convert(value, source, target);
        let mode = if target == Denomination::Wei {
            RoundingMode::HalfUp
        } else {
            RoundingMode::Down
        };
        forms.push(ConvertedForm {
            unit: target.label(),
            value: format_decimal(&converted, target.decimals(), false, mode),
        });
    }

    if let Some(usd) = usd_value(source, value, rate) {
        forms.push(ConvertedForm {
            unit: USD_LABEL,
            value: usd,
        });
    }

    forms
}

/// Best-effort USD rendering; `None` when the rate is unusable
fn usd_value(source: Denomination, value: &BigDecimal, rate: f64) -> Option<String> {
    let rate = BigDecimal::try_from(rate).ok()?;
    let ether = convert(value, source, Denomination::Ether);
    Some(format_usd(&(ether * rate)))
}

/// Render a decimal at a fixed number of places
///
/// Truncation or rounding follows `mode`; trailing fractional zeros are
/// stripped unless `keep_trailing_zeros` is set, and the decimal point is
/// dropped when the fraction empties out. A value that is exactly zero
/// after scaling renders as `"0"` (or `"0.00"`-style when trailing zeros
/// are kept), never `"-0"`.
pub fn format_decimal(
    value: &BigDecimal,
    decimals: i64,
    keep_trailing_zeros: bool,
    mode: RoundingMode,
) -> String {
    let scaled = value.with_scale_round(decimals, mode);

    if scaled.is_zero() {
        return if keep_trailing_zeros && decimals > 0 {
            format!("0.{:0>width$}", "", width = decimals as usize)
        } else {
            "0".to_string()
        };
    }

    let (digits, exponent) = scaled.as_bigint_and_exponent();
    let negative = digits.sign() == Sign::Minus;
    let mut magnitude = digits.magnitude().to_string();

    let scale = exponent.max(0) as usize;
    if magnitude.len() <= scale {
        magnitude = format!("{:0>width$}", magnitude, width = scale + 1);
    }

    let split = magnitude.len() - scale;
    let (whole, fraction) = magnitude.split_at(split);
    let fraction = if keep_trailing_zeros {
        fraction
    } else {
        fraction.trim_end_matches('0')
    };

    let mut rendered = String::with_capacity(magnitude.len() + 2);
    if negative {
        rendered.push('-');
    }
    rendered.push_str(whole);
    if !fraction.is_empty() {
        rendered.push('.');
        rendered.push_str(fraction);
    }
    rendered
}

/// Fixed two-decimal money format with a `$` prefix, trailing zeros kept
pub fn format_usd(value: &BigDecimal) -> String {
    format!(
        "${}",
        format_decimal(value, 2, true, RoundingMode::HalfUp)
    )
}
