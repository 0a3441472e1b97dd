//! A single recorded validation failure.

use crate::core::Value;
use serde::Serialize;
use std::fmt;

/// One validation failure: which section, which property, what value it
/// held, and why it was rejected.
///
/// Items are created only inside a failed rule and are owned by the
/// [`ValidationCollection`](crate::core::ValidationCollection) that holds
/// them. They are not mutated after insertion; the explicit setters exist
/// for callers assembling items by hand before handing them over.
///
/// # Examples
///
/// ```rust
/// use config_vet::core::{ValidationItem, Value};
///
/// let item = ValidationItem::new("ServerConfig", "port", Value::from(0i32), "Port not set");
/// assert_eq!(item.section(), "ServerConfig");
/// assert_eq!(item.item(), "port");
/// assert_eq!(item.to_string(), "ServerConfig.port: Port not set (value: 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationItem {
    section: String,
    item: String,
    value: Value,
    message: String,
}

impl ValidationItem {
    /// Create a new validation failure record.
    pub fn new(
        section: impl Into<String>,
        item: impl Into<String>,
        value: impl Into<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            item: item.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Display name of the configuration section the property belongs to.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Name of the failed property.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// The offending value, as observed during the pass.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Human-readable explanation of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the captured value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Replace the failure message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl fmt::Display for ValidationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}: {} (value: {})",
            self.section, self.item, self.message, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_getters() {
        let item = ValidationItem::new("App", "name", Value::from(""), "Name not set");
        assert_eq!(item.section(), "App");
        assert_eq!(item.item(), "name");
        assert_eq!(item.value(), &Value::Text(String::new()));
        assert_eq!(item.message(), "Name not set");
    }

    #[test]
    fn test_setters() {
        let mut item = ValidationItem::new("App", "name", Value::Absent, "old");
        item.set_message("new");
        item.set_value("observed");
        assert_eq!(item.message(), "new");
        assert_eq!(item.value(), &Value::Text("observed".to_string()));
    }

    #[test]
    fn test_display() {
        let item = ValidationItem::new("App", "port", Value::from(0i32), "Port not set");
        assert_eq!(item.to_string(), "App.port: Port not set (value: 0)");
    }

    #[test]
    fn test_serializes_with_field_names() {
        let item = ValidationItem::new("App", "port", Value::from(0i32), "Port not set");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["section"], "App");
        assert_eq!(json["item"], "port");
        assert_eq!(json["value"], 0);
        assert_eq!(json["message"], "Port not set");
    }
}
