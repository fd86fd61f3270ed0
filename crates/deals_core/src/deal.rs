use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Opaque identifier as sent by the backend.
///
/// Integers that fit `i64` (including integral floats such as `1.0`) become
/// `Number`; any other JSON scalar is kept as its text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdentifierVisitor)
    }
}

struct IdentifierVisitor;

impl Visitor<'_> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, string or boolean identifier")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Identifier, E> {
        Ok(Identifier::Text(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Identifier, E> {
        Ok(Identifier::Number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Identifier, E> {
        Ok(match i64::try_from(value) {
            Ok(value) => Identifier::Number(value),
            Err(_) => Identifier::Text(value.to_string()),
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Identifier, E> {
        // Range check keeps the cast exact; 2^63 itself is excluded.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(Identifier::Number(value as i64))
        } else {
            Ok(Identifier::Text(value.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Identifier, E> {
        Ok(Identifier::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Identifier, E> {
        Ok(Identifier::Text(value))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(value) => write!(f, "{value}"),
            Identifier::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

/// A deal exactly as received from the backend.
///
/// The price relationships (`original_price >= price`, `discount_pct` matching
/// both prices) are trusted, not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    pub id: Identifier,
    pub game_slug: String,
    pub store: Identifier,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub discount_pct: Option<Decimal>,
    pub url: String,
}
