//! The validation collector: one pass, every violation recorded.

use crate::core::{Property, ValidationCollection, ValidationItem, Value};
use crate::error::ValidationError;
use crate::net::Ipv4Address;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Message recorded by the public/private IP rules when the address itself
/// is missing or unparseable, overriding the caller-supplied message.
const INVALID_IP_MESSAGE: &str = "IP address is missing or it is invalid.";

/// Mailbox-shaped pattern: one `@`, no whitespace, dotted domain.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Collects every validation failure for one configuration object in a
/// single pass.
///
/// A collector is scoped to one instance of one configuration type. Each
/// `validate_*` call reads a captured [`Property`], evaluates its rule, and
/// on failure appends one [`ValidationItem`] carrying the section name, the
/// property name, the observed value, and the caller's message. Successful
/// rules append nothing, and ordinary data failures never abort the pass,
/// so the final collection lists everything wrong with the object at once.
///
/// The section name defaults to the short display name of the configuration
/// type; use [`with_section`](Self::with_section) to override it.
///
/// # Examples
///
/// ```rust
/// use config_vet::prelude::*;
/// use config_vet::prop;
///
/// #[derive(Debug)]
/// struct SmtpConfig {
///     host: String,
///     port: i32,
///     sender: String,
/// }
///
/// let cfg = SmtpConfig {
///     host: String::new(),
///     port: 0,
///     sender: "not-an-email".to_string(),
/// };
///
/// let mut collector = ValidationCollector::new(&cfg);
/// collector
///     .validate_not_empty(prop!(cfg.host), "SMTP host must be set")
///     .validate_not_zero(prop!(cfg.port), "SMTP port must be set")
///     .validate_email(prop!(cfg.sender), "Sender must be an e-mail address");
///
/// let failures = collector.into_validations();
/// assert_eq!(failures.len(), 3);
/// assert_eq!(failures[0].section(), "SmtpConfig");
/// assert_eq!(failures[1].item(), "port");
/// ```
///
/// # Thread safety
///
/// A collector is a single-threaded, synchronous accumulator. It holds a
/// shared borrow of the instance for the duration of the pass and its result
/// list is not internally synchronized.
#[derive(Debug)]
pub struct ValidationCollector<'a, T> {
    section: String,
    target: &'a T,
    validations: ValidationCollection,
}

impl<'a, T> ValidationCollector<'a, T> {
    /// Create a collector for one configuration instance.
    ///
    /// The section name attached to every recorded failure is the short
    /// display name of `T`.
    pub fn new(target: &'a T) -> Self {
        Self {
            section: short_type_name::<T>().to_string(),
            target,
            validations: ValidationCollection::new(),
        }
    }

    /// Create a collector with an explicit section name.
    pub fn with_section(target: &'a T, section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            target,
            validations: ValidationCollection::new(),
        }
    }

    /// The section name attached to recorded failures.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// The failures recorded so far, in rule declaration order.
    pub fn validations(&self) -> &ValidationCollection {
        &self.validations
    }

    /// Whether the pass has recorded no failures.
    pub fn is_valid(&self) -> bool {
        self.validations.is_empty()
    }

    /// Finish the pass, returning the accumulated failures.
    pub fn into_validations(self) -> ValidationCollection {
        self.validations
    }

    /// Finish the pass, converting a non-empty collection into a
    /// [`ValidationError`] for fail-fast propagation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with the default summary message when
    /// at least one rule failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.validations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_validations(self.validations))
        }
    }

    /// Fail when a text property is absent or zero-length.
    pub fn validate_not_empty(
        &mut self,
        property: Property,
        message: impl Into<String>,
    ) -> &mut Self {
        let failed = property.value().as_text().is_none_or(str::is_empty);
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is absent/empty, or when the
    /// case-insensitive index of `part` in the value equals zero.
    ///
    /// Note the actual behavior carefully: a value that merely *lacks*
    /// `part` passes this rule, and a value that *starts with* `part`
    /// fails it. This reproduces the long-standing behavior of the system
    /// this crate models; callers wanting an intentional prefix check
    /// should use [`validate_starts_with`](Self::validate_starts_with).
    pub fn validate_contains(
        &mut self,
        property: Property,
        part: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) if text.is_empty() => true,
            Some(text) => index_of_ignore_case(text, part) == Some(0),
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is absent or does not start with `part`
    /// (case-insensitive).
    pub fn validate_starts_with(
        &mut self,
        property: Property,
        part: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) => !fold(text).starts_with(&fold(part)),
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is absent or does not end with `part`
    /// (case-insensitive).
    pub fn validate_ends_with(
        &mut self,
        property: Property,
        part: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) => !fold(text).ends_with(&fold(part)),
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when an integer property equals zero.
    pub fn validate_not_zero(
        &mut self,
        property: Property,
        message: impl Into<String>,
    ) -> &mut Self {
        if property.value().as_integer() == Some(0) {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is absent/empty, contains a space, or is
    /// not shaped like an e-mail mailbox.
    pub fn validate_email(&mut self, property: Property, message: impl Into<String>) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) => {
                text.is_empty() || text.contains(' ') || !EMAIL_SHAPE.is_match(text)
            }
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is not a well-formed absolute URI with a
    /// scheme.
    pub fn validate_absolute_uri(
        &mut self,
        property: Property,
        message: impl Into<String>,
    ) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) => Url::parse(text).is_err(),
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property does not parse as an IPv4 address, or
    /// holds the `0.0.0.0` unset sentinel.
    pub fn validate_ipv4(&mut self, property: Property, message: impl Into<String>) -> &mut Self {
        let failed = match property.value().as_text() {
            None => true,
            Some(text) => !Ipv4Address::is_valid(text),
        };
        if failed {
            self.record(property, message.into());
        }
        self
    }

    /// Fail when a text property is not a publicly routable IPv4 address.
    ///
    /// A missing, unparseable, or `0.0.0.0` value is recorded with the fixed
    /// message `IP address is missing or it is invalid.` regardless of the
    /// caller's message; a private address is recorded with `message`.
    pub fn validate_public_ipv4(
        &mut self,
        property: Property,
        message: impl Into<String>,
    ) -> &mut Self {
        match self.parsed_address(&property) {
            None => self.record(property, INVALID_IP_MESSAGE.to_string()),
            Some(address) if address.is_private() => self.record(property, message.into()),
            Some(_) => {}
        }
        self
    }

    /// Fail when a text property is not a private (RFC 1918) IPv4 address.
    ///
    /// A missing, unparseable, or `0.0.0.0` value is recorded with the fixed
    /// message `IP address is missing or it is invalid.` regardless of the
    /// caller's message; a public address is recorded with `message`.
    pub fn validate_private_ipv4(
        &mut self,
        property: Property,
        message: impl Into<String>,
    ) -> &mut Self {
        match self.parsed_address(&property) {
            None => self.record(property, INVALID_IP_MESSAGE.to_string()),
            Some(address) if address.is_public() => self.record(property, message.into()),
            Some(_) => {}
        }
        self
    }

    /// Fail when `predicate`, evaluated over the whole configuration
    /// instance, returns false.
    ///
    /// No single property is implicated, so the caller supplies the
    /// property-names label recorded as the item name; the item value is
    /// [`Value::Absent`].
    ///
    /// # Panics
    ///
    /// A panic raised inside `predicate` propagates uncaught. Such a panic
    /// is a bug in the validation rules, not bad configuration data, and is
    /// deliberately not converted into a validation item.
    pub fn must<F>(
        &mut self,
        predicate: F,
        property_names: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self
    where
        F: FnOnce(&T) -> bool,
    {
        if !predicate(self.target) {
            self.record_raw(property_names.into(), Value::Absent, message.into());
        }
        self
    }

    /// Unconditionally record a failure for a property.
    ///
    /// For callers that decided the failure externally and only need it
    /// attributed to the section and property.
    pub fn add_custom(&mut self, property: Property, message: impl Into<String>) -> &mut Self {
        self.record(property, message.into());
        self
    }

    fn parsed_address(&self, property: &Property) -> Option<Ipv4Address> {
        let address = property.value().as_text().and_then(Ipv4Address::parse)?;
        if address.is_unset() { None } else { Some(address) }
    }

    fn record(&mut self, property: Property, message: String) {
        let (name, value) = property.into_parts();
        self.record_raw(name, value, message);
    }

    fn record_raw(&mut self, name: String, value: Value, message: String) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            section = %self.section,
            item = %name,
            value = %value,
            message = %message,
            "validation failed"
        );

        self.validations
            .push(ValidationItem::new(self.section.as_str(), name, value, message));
    }
}

/// Short display name of a type: the last path segment, generics stripped.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Case-insensitive index-of using invariant Unicode lowercase folding.
///
/// The process locale is deliberately not consulted; comparisons behave the
/// same on every machine.
fn index_of_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    fold(haystack).find(&fold(needle))
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}
