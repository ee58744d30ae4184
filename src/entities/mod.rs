//! Entity type definitions
//!
//! - [`Product`] - Stock items with prices and reorder thresholds
//! - [`Sale`] - Point-of-sale invoices
//! - [`Purchase`] - Supplier invoices
//! - [`Expense`] - Operating costs

pub mod expense;
pub mod product;
pub mod purchase;
pub mod sale;

pub use expense::Expense;
pub use product::Product;
pub use purchase::Purchase;
pub use sale::Sale;
