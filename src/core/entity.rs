//! Entity trait - common interface for all entity types

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::identity::EntityId;
use crate::core::locale::{Labeled, Locale};

/// Common trait for all inventory entities
pub trait Entity: Serialize + DeserializeOwned {
    /// The entity type prefix (e.g., "PRD", "SALE")
    const PREFIX: &'static str;

    /// Get the entity's unique ID
    fn id(&self) -> &EntityId;

    /// Short human-readable name (product name, invoice number, ...)
    fn display_name(&self) -> &str;
}

/// How a sale, purchase or expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

impl Labeled for PaymentMethod {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (PaymentMethod::Cash, Locale::En) => "Cash",
            (PaymentMethod::Card, Locale::En) => "Card",
            (PaymentMethod::Transfer, Locale::En) => "Transfer",
            (PaymentMethod::Cash, Locale::Ar) => "نقدي",
            (PaymentMethod::Card, Locale::Ar) => "بطاقة",
            (PaymentMethod::Transfer, Locale::Ar) => "تحويل",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Transfer => write!(f, "transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "transfer" => Ok(PaymentMethod::Transfer),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

/// Lifecycle of a sale or purchase invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

impl Labeled for TransactionStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TransactionStatus::Completed, Locale::En) => "Completed",
            (TransactionStatus::Pending, Locale::En) => "Pending",
            (TransactionStatus::Cancelled, Locale::En) => "Cancelled",
            (TransactionStatus::Completed, Locale::Ar) => "مكتمل",
            (TransactionStatus::Pending, Locale::Ar) => "معلق",
            (TransactionStatus::Cancelled, Locale::Ar) => "ملغي",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            "cancelled" | "canceled" => Ok(TransactionStatus::Cancelled),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// Link to another entity that may not have been matched yet
///
/// Imports only know the name a spreadsheet used for a category or
/// supplier; matching that name to a stored entity happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum Reference {
    Resolved(EntityId),
    Unresolved(String),
}

impl Reference {
    pub fn unresolved(hint: impl Into<String>) -> Self {
        Reference::Unresolved(hint.into())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::Unresolved(String::new())
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::Resolved(id) => write!(f, "{}", id),
            Reference::Unresolved(hint) => write!(f, "{}", hint),
        }
    }
}
