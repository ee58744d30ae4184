//! Purchase entity type - Supplier invoices for restocking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, PaymentMethod, TransactionStatus};
use crate::core::identity::EntityId;
use crate::entities::sale::LineItem;

/// A purchase invoice from a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: EntityId,

    pub invoice_number: String,

    pub date: DateTime<Utc>,

    /// Supplier name as printed on the invoice
    pub supplier_name: String,

    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Amount already paid to the supplier
    #[serde(default)]
    pub paid: f64,

    #[serde(default)]
    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub status: TransactionStatus,
}

impl Purchase {
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Outstanding balance, never negative
    pub fn remaining(&self) -> f64 {
        (self.total() - self.paid).max(0.0)
    }
}

impl Entity for Purchase {
    const PREFIX: &'static str = "PUR";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.invoice_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;

    #[test]
    fn test_purchase_remaining() {
        let mut purchase = Purchase {
            id: EntityId::new(EntityPrefix::Pur),
            invoice_number: "PO-7".to_string(),
            date: Utc::now(),
            supplier_name: "Acme".to_string(),
            items: vec![LineItem {
                product: None,
                name: "Pen".to_string(),
                quantity: 100.0,
                unit_price: 1.5,
            }],
            paid: 100.0,
            payment_method: PaymentMethod::Transfer,
            status: TransactionStatus::Pending,
        };
        assert_eq!(purchase.total(), 150.0);
        assert_eq!(purchase.remaining(), 50.0);

        purchase.paid = 200.0;
        assert_eq!(purchase.remaining(), 0.0);
    }
}
