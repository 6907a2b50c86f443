use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

pub fn parse_decimal(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    if value.contains(['e', 'E']) {
        return Decimal::from_scientific(&value.to_ascii_lowercase()).map_err(|error| {
            AmountError::InvalidFormat(format!("Value has an invalid exponent form: {error}"))
        });
    }

    Decimal::from_str(value).map_err(|error| match error {
        rust_decimal::Error::ExceedsMaximumPossibleValue | rust_decimal::Error::LessThanMinimumPossibleValue => AmountError::Overflow,
        other => AmountError::InvalidFormat(format!("Value is not a decimal number: {other}"))
    })
}

/// Parses an amount, falling back to zero when it cannot be read.
///
/// This is the only place where malformed numeric input is turned into a
/// number; every record field decoded from the backend goes through here.
pub fn coerce_decimal(value: &str) -> Decimal {
    parse_decimal(value).unwrap_or_else(|error| {
        debug!("Coercing [{value}] to zero: {error}");
        Decimal::ZERO
    })
}

pub fn coerce_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        debug!("Coercing non-finite value [{value}] to zero");
        return Decimal::ZERO;
    }

    // The shortest round-trip text keeps 0.1 as 0.1 instead of its binary expansion
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal,
        Err(_) => Decimal::from_f64(value).unwrap_or_else(|| {
            debug!("Coercing out of range value [{value}] to zero");
            Decimal::ZERO
        })
    }
}

pub fn accumulate<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).unwrap_or_else(|| {
            error!("Amount accumulation error: Overflow adding [{amount}] to [{total}]");
            total
        })
    })
}

/// Serde hook decoding a decimal that may arrive as a string, number, boolean or null.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientDecimalVisitor)
}

pub fn lenient_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(lenient_decimal(deserializer)?))
}

struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number, a numeric string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        Ok(coerce_decimal(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        Ok(coerce_f64(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Decimal, E> {
        debug!("Coercing boolean [{value}] to zero");
        Ok(Decimal::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decimal, D::Error> {
        lenient_decimal(deserializer)
    }
}
