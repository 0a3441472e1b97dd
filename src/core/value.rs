//! Heterogeneous property values.

use serde::Serialize;
use std::fmt;

/// The value of one configuration property, captured at validation time.
///
/// Configuration objects carry properties of a handful of primitive types.
/// `Value` is the tagged variant over those types that lets a
/// [`ValidationItem`](crate::core::ValidationItem) hold whatever value the
/// failed property had, including "no value at all", without losing type
/// information.
///
/// Integers of 16, 32, and 64 bits are all widened into `Integer(i64)`.
///
/// # Examples
///
/// ```rust
/// use config_vet::core::Value;
///
/// assert_eq!(Value::from("localhost").as_text(), Some("localhost"));
/// assert_eq!(Value::from(8080i32).as_integer(), Some(8080));
/// assert!(Value::from(None::<String>).is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value: an unset optional property.
    Absent,
    /// A string property.
    Text(String),
    /// A boolean property.
    Flag(bool),
    /// A signed integer property (16/32/64-bit, widened to 64).
    Integer(i64),
}

impl Value {
    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// The boolean content, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Whether this value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("(none)"),
            Value::Text(text) => f.write_str(text),
            Value::Flag(flag) => write!(f, "{}", flag),
            Value::Integer(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<Option<String>> for Value {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(text) => Value::Text(text),
            None => Value::Absent,
        }
    }
}

impl From<Option<&str>> for Value {
    fn from(text: Option<&str>) -> Self {
        match text {
            Some(text) => Value::Text(text.to_string()),
            None => Value::Absent,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

impl From<i16> for Value {
    fn from(number: i16) -> Self {
        Value::Integer(i64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Integer(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Integer(number)
    }
}
