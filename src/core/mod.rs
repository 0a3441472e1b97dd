//! Core validation types: values, properties, items, and the collector.

mod collection;
mod collector;
mod item;
mod property;
mod value;

pub use collection::ValidationCollection;
pub use collector::ValidationCollector;
pub use item::ValidationItem;
pub use property::Property;
pub use value::Value;
