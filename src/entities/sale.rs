//! Sale entity type - Point-of-sale invoices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, PaymentMethod, TransactionStatus};
use crate::core::identity::EntityId;

/// One line of an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Product sold or bought, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<EntityId>,

    /// Name printed on the invoice line
    pub name: String,

    pub quantity: f64,

    pub unit_price: f64,
}

impl LineItem {
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// A point-of-sale invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: EntityId,

    /// Human-facing invoice number (e.g. "INV-0042")
    pub invoice_number: String,

    /// When the sale happened
    pub date: DateTime<Utc>,

    /// Customer name, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Absolute discount applied to the subtotal
    #[serde(default)]
    pub discount: f64,

    /// Absolute tax added after the discount
    #[serde(default)]
    pub tax: f64,

    #[serde(default)]
    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub status: TransactionStatus,
}

impl Sale {
    /// Sum of all line totals
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Amount charged: subtotal minus discount plus tax
    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount + self.tax
    }
}

impl Entity for Sale {
    const PREFIX: &'static str = "SALE";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.invoice_number
    }
}
