//! Support for serde implementations

use crate::*;
use serde::{de, ser};


impl ser::Serialize for BigDecimal {
    /// Serialize as the canonical most-significant-first digit string
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigDecimal
struct BigDecimalVisitor;

impl<'de> de::Visitor<'de> for BigDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative decimal integer or digit string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        BigDecimal::from_digit_str(value, false).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        match BigDecimal::from_i64(value) {
            Some(n) => Ok(n),
            None => Err(E::custom(format_args!("negative value {} is out of range", value))),
        }
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        match BigDecimal::from_i128(value) {
            Some(n) => Ok(n),
            None => Err(E::custom(format_args!("negative value {} is out of range", value))),
        }
    }
}

impl<'de> de::Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(BigDecimalVisitor)
    }
}
