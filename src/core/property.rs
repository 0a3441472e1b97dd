//! Property extraction: turning a member access into a `(name, value)` pair.

use crate::core::Value;
use crate::error::SelectorError;

/// A named configuration property captured for validation.
///
/// Every rule on a [`ValidationCollector`](crate::core::ValidationCollector)
/// consumes a `Property`: the declared name of the property and its current
/// value. The [`prop!`](crate::prop) macro builds one straight from a direct
/// member access so call sites never re-type the property name as a string:
///
/// ```rust
/// use config_vet::core::{Property, Value};
/// use config_vet::prop;
///
/// struct AppConfig {
///     host: String,
/// }
///
/// let cfg = AppConfig { host: "localhost".to_string() };
/// let property = prop!(cfg.host);
/// assert_eq!(property.name(), "host");
/// assert_eq!(property.value(), &Value::Text("localhost".to_string()));
/// ```
///
/// Callers assembling selectors at runtime (rule tables read from metadata,
/// dynamic dashboards) use [`Property::resolve`] instead, which enforces the
/// same direct-member-access contract at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    /// Create a property from an already-known name and value.
    ///
    /// This is the trusted constructor the [`prop!`](crate::prop) macro
    /// expands to; the name is taken as-is.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a property from a runtime selector expression.
    ///
    /// The selector must be a direct member access on the root configuration
    /// object: either a bare property name (`"port"`) or a single
    /// `root.property` path (`"cfg.port"`). Composed or computed expressions
    /// (`"cfg.server.port"`, `"cfg.port()"`, `"items[0]"`) are programmer
    /// errors, not data errors, and fail with a [`SelectorError`] rather
    /// than being collected as a validation item.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Empty`] for an empty selector and
    /// [`SelectorError::NotDirectAccess`] for anything that is not a direct
    /// member access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_vet::core::Property;
    ///
    /// let property = Property::resolve("cfg.port", 8080i32)?;
    /// assert_eq!(property.name(), "port");
    ///
    /// assert!(Property::resolve("cfg.server.port", 8080i32).is_err());
    /// # Ok::<(), config_vet::error::SelectorError>(())
    /// ```
    pub fn resolve(selector: &str, value: impl Into<Value>) -> Result<Self, SelectorError> {
        let name = member_name(selector)?;
        Ok(Self {
            name: name.to_string(),
            value: value.into(),
        })
    }

    /// Create a property by evaluating a getter against the configuration
    /// instance, under the same selector contract as [`Property::resolve`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Property::resolve`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_vet::core::Property;
    ///
    /// struct AppConfig {
    ///     port: i32,
    /// }
    ///
    /// let cfg = AppConfig { port: 8080 };
    /// let property = Property::resolve_from(&cfg, "cfg.port", |c| c.port)?;
    /// assert_eq!(property.name(), "port");
    /// # Ok::<(), config_vet::error::SelectorError>(())
    /// ```
    pub fn resolve_from<T, V>(
        target: &T,
        selector: &str,
        getter: impl FnOnce(&T) -> V,
    ) -> Result<Self, SelectorError>
    where
        V: Into<Value>,
    {
        let name = member_name(selector)?;
        Ok(Self {
            name: name.to_string(),
            value: getter(target).into(),
        })
    }

    /// The property's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property's value at capture time.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the property, returning its name and value.
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

/// Extract the member name from a selector, rejecting anything that is not
/// a direct member access on the root.
fn member_name(selector: &str) -> Result<&str, SelectorError> {
    if selector.is_empty() {
        return Err(SelectorError::Empty);
    }

    let not_direct = || SelectorError::NotDirectAccess {
        selector: selector.to_string(),
    };

    let mut segments = selector.split('.');
    let first = segments.next().unwrap_or(selector);
    let name = match (segments.next(), segments.next()) {
        // Bare property name: "port"
        (None, _) => first,
        // Single member access on the root: "cfg.port"
        (Some(second), None) => {
            if !is_identifier(first) {
                return Err(not_direct());
            }
            second
        }
        // Nested access: "cfg.server.port"
        (Some(_), Some(_)) => return Err(not_direct()),
    };

    if !is_identifier(name) {
        return Err(not_direct());
    }
    Ok(name)
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Capture a configuration property as a [`Property`] from a direct member
/// access.
///
/// The macro derives the property name from the field identifier at compile
/// time and converts the field's value via [`Value::from`](crate::core::Value).
/// Only direct member accesses on an in-scope binding match; composed
/// expressions such as `prop!(cfg.server.port)` or `prop!(cfg.port())` do
/// not compile, which surfaces malformed selectors at the earliest possible
/// moment.
///
/// # Examples
///
/// ```rust
/// use config_vet::prop;
///
/// struct AppConfig {
///     retries: i32,
/// }
///
/// let cfg = AppConfig { retries: 3 };
/// let property = prop!(cfg.retries);
/// assert_eq!(property.name(), "retries");
/// ```
#[macro_export]
macro_rules! prop {
    ($root:ident . $field:ident) => {
        $crate::core::Property::new(
            stringify!($field),
            $crate::core::Value::from($root.$field.clone()),
        )
    };
}
