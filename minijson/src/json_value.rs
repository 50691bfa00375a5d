// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// The kind of a [`JsonValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JsonType {
    Null,
    True,
    False,
    Number,
}

impl core::fmt::Display for JsonType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::True => "true",
            JsonType::False => "false",
            JsonType::Number => "number",
        };
        f.write_str(name)
    }
}

/// A parsed JSON scalar.
///
/// The parser writes into a caller-owned value. Before parsing and after any
/// failed parse the value is [`JsonValue::Null`].
///
/// # Example
/// ```
/// use minijson::{JsonType, JsonValue};
/// let mut value = JsonValue::default();
/// minijson::parse(&mut value, " -1.5e2 ").unwrap();
/// assert_eq!(value.get_type(), JsonType::Number);
/// assert_eq!(value.get_number(), -150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JsonValue {
    /// `null`, also the state of a value that has not been parsed successfully.
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A finite number.
    Number(f64),
}

impl JsonValue {
    /// Returns the type tag of the active variant.
    pub const fn get_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::True => JsonType::True,
            JsonValue::False => JsonType::False,
            JsonValue::Number(_) => JsonType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    /// If the value is not a [`JsonValue::Number`]. Asking a non-number for its
    /// number is a bug in the caller; use [`as_f64`](Self::as_f64) when the
    /// type is not known up front.
    pub fn get_number(&self) -> f64 {
        match self {
            JsonValue::Number(n) => *n,
            other => panic!("get_number called on a {} value", other.get_type()),
        }
    }

    /// Get the number as an f64 if this is a number.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean if this is `true` or `false`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::True => Some(true),
            JsonValue::False => Some(false),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        if b {
            JsonValue::True
        } else {
            JsonValue::False
        }
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl FromStr for JsonValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = JsonValue::Null;
        crate::parse(&mut value, s)?;
        Ok(value)
    }
}

impl core::fmt::Display for JsonValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::True => f.write_str("true"),
            JsonValue::False => f.write_str("false"),
            JsonValue::Number(n) => write!(f, "{n}"),
        }
    }
}
