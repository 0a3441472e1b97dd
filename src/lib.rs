//! # config-vet
//!
//! Exhaustive configuration value validation: collect every violation in one
//! pass instead of failing fast.
//!
//! ## Overview
//!
//! `config-vet` checks the values of a loaded, strongly typed configuration
//! object against a declared sequence of rules. Unlike `Result`-per-field
//! validation, a [`ValidationCollector`](core::ValidationCollector) never
//! stops at the first bad value: every failed rule appends one
//! [`ValidationItem`](core::ValidationItem) to an ordered
//! [`ValidationCollection`](core::ValidationCollection), so operators see the
//! complete list of configuration problems after a single startup pass.
//!
//! The crate does not load configuration. Pair it with whatever loader you
//! already use (a file/env loader, hardcoded test fixtures, ...) and hand the
//! populated object to a collector.
//!
//! ## Quick Start
//!
//! ```rust
//! use config_vet::prelude::*;
//! use config_vet::prop;
//!
//! #[derive(Debug)]
//! struct ServerConfig {
//!     name: String,
//!     port: i32,
//!     endpoint: String,
//!     bind_address: String,
//! }
//!
//! let cfg = ServerConfig {
//!     name: "billing".to_string(),
//!     port: 8080,
//!     endpoint: "https://api.services.lv".to_string(),
//!     bind_address: "192.168.10.4".to_string(),
//! };
//!
//! let mut collector = ValidationCollector::new(&cfg);
//! collector
//!     .validate_not_empty(prop!(cfg.name), "Server name must be set")
//!     .validate_not_zero(prop!(cfg.port), "Port must be configured")
//!     .validate_absolute_uri(prop!(cfg.endpoint), "Endpoint must be an absolute URI")
//!     .validate_private_ipv4(prop!(cfg.bind_address), "Bind address must be private");
//!
//! assert!(collector.is_valid());
//! ```
//!
//! When a pass finds problems, the collection can be inspected item by item
//! or converted into a single aggregate [`ValidationError`](error::ValidationError):
//!
//! ```rust
//! # use config_vet::prelude::*;
//! # use config_vet::prop;
//! # #[derive(Debug)]
//! # struct ServerConfig { port: i32 }
//! # let cfg = ServerConfig { port: 0 };
//! let mut collector = ValidationCollector::new(&cfg);
//! collector.validate_not_zero(prop!(cfg.port), "Port must be configured");
//!
//! let err = collector.into_result().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Configuration contains invalid values. 1 validations failed."
//! );
//! ```
//!
//! ## Rule kinds
//!
//! - **Presence**: [`validate_not_empty`](core::ValidationCollector::validate_not_empty),
//!   [`validate_not_zero`](core::ValidationCollector::validate_not_zero)
//! - **Substrings** (case-insensitive): [`validate_contains`](core::ValidationCollector::validate_contains),
//!   [`validate_starts_with`](core::ValidationCollector::validate_starts_with),
//!   [`validate_ends_with`](core::ValidationCollector::validate_ends_with)
//! - **Formats**: [`validate_email`](core::ValidationCollector::validate_email),
//!   [`validate_absolute_uri`](core::ValidationCollector::validate_absolute_uri)
//! - **IPv4**: [`validate_ipv4`](core::ValidationCollector::validate_ipv4),
//!   [`validate_public_ipv4`](core::ValidationCollector::validate_public_ipv4),
//!   [`validate_private_ipv4`](core::ValidationCollector::validate_private_ipv4)
//! - **Escape hatches**: [`must`](core::ValidationCollector::must) for
//!   predicates over the whole object, [`add_custom`](core::ValidationCollector::add_custom)
//!   for failures decided elsewhere
//!
//! ## Feature Flags
//!
//! - `tracing`: emit a `tracing::debug!` event for every recorded failure.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod net;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        Property, ValidationCollection, ValidationCollector, ValidationItem, Value,
    };
    pub use crate::error::{Result, SelectorError, ValidationError};
    pub use crate::net::Ipv4Address;
}
