//! Error types for config-vet.
//!
//! Two disjoint classes of problem flow out of a validation pass:
//!
//! - **Data failures** are expected and recoverable. They are never raised as
//!   errors; they accumulate as [`ValidationItem`](crate::core::ValidationItem)s
//!   and may be bundled into a [`ValidationError`] by callers who prefer
//!   fail-fast propagation.
//! - **Programmer errors** — a malformed property selector, or a panic inside
//!   a `must` predicate — indicate a bug in the validation rules themselves.
//!   They are fatal: [`SelectorError`] aborts before any item is recorded,
//!   and predicate panics propagate uncaught.

use crate::core::ValidationCollection;
use std::fmt;

/// Result type alias for config-vet operations that can hit a fatal
/// programmer error.
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Fatal errors from the runtime property-selector path.
///
/// A selector must name a direct member access on the configuration object
/// (`"port"` or `"cfg.port"`). Anything else is a bug in the validation
/// rules, not bad configuration data, so it is surfaced here instead of
/// being collected as a validation item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector string was empty.
    #[error("Property selector is empty")]
    Empty,

    /// The selector is not a direct member access on the root object.
    #[error("Property selector '{selector}' is not a direct member access")]
    NotDirectAccess {
        /// The offending selector expression.
        selector: String,
    },
}

/// Aggregate error bundling the full list of validation failures.
///
/// For callers who prefer exception-style propagation over inspecting the
/// collection directly: a non-empty pass converts into one error value whose
/// message summarizes the failure count while the individual items stay
/// available through [`validations`](ValidationError::validations).
///
/// # Examples
///
/// ```rust
/// use config_vet::core::{ValidationCollection, ValidationItem, Value};
/// use config_vet::error::ValidationError;
///
/// let mut items = ValidationCollection::new();
/// items.push(ValidationItem::new("App", "port", Value::from(0i32), "Port not set"));
/// items.push(ValidationItem::new("App", "name", Value::from(""), "Name not set"));
///
/// let err = ValidationError::with_message_and_validations("Test", items);
/// assert_eq!(err.to_string(), "Test. 2 validations failed.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    message: Option<String>,
    validations: ValidationCollection,
}

impl ValidationError {
    /// Message rendered when no custom message and no items are present.
    const DEFAULT_MESSAGE: &'static str = "Configuration validation failed.";

    /// Summary phrase rendered in place of the default message once the
    /// collection is non-empty.
    const SUMMARY_MESSAGE: &'static str = "Configuration contains invalid values.";

    /// Create an empty error with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error with a custom message and no items.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            validations: ValidationCollection::new(),
        }
    }

    /// Create an error from accumulated validations, using the default
    /// message.
    pub fn from_validations(validations: impl Into<ValidationCollection>) -> Self {
        Self {
            message: None,
            validations: validations.into(),
        }
    }

    /// Create an error with a custom message and accumulated validations.
    pub fn with_message_and_validations(
        message: impl Into<String>,
        validations: impl Into<ValidationCollection>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            validations: validations.into(),
        }
    }

    /// The individual validation failures carried by this error.
    pub fn validations(&self) -> &ValidationCollection {
        &self.validations
    }

    /// Consume the error, returning the carried failures.
    pub fn into_validations(self) -> ValidationCollection {
        self.validations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.validations.len();
        match &self.message {
            None if count == 0 => f.write_str(Self::DEFAULT_MESSAGE),
            None => write!(f, "{} {} validations failed.", Self::SUMMARY_MESSAGE, count),
            Some(message) => {
                let message = message.trim_end();
                if message.ends_with('.') {
                    write!(f, "{} {} validations failed.", message, count)
                } else {
                    write!(f, "{}. {} validations failed.", message, count)
                }
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationCollection> for ValidationError {
    fn from(validations: ValidationCollection) -> Self {
        Self::from_validations(validations)
    }
}

impl From<Vec<crate::core::ValidationItem>> for ValidationError {
    fn from(items: Vec<crate::core::ValidationItem>) -> Self {
        Self::from_validations(ValidationCollection::from(items))
    }
}
