//! Core module - fundamental types and utilities

pub mod config;
pub mod entity;
pub mod identity;
pub mod loader;
pub mod locale;

pub use config::Config;
pub use entity::{Entity, PaymentMethod, Reference, TransactionStatus};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use locale::{Labeled, Locale};
