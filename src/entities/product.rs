//! Product entity type - Stock items sold at the point of sale

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Reference};
use crate::core::identity::EntityId;

/// A stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Stock keeping unit, unique per product
    pub sku: String,

    /// Barcode printed on the packaging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Category the product is filed under
    #[serde(default)]
    pub category: Reference,

    /// Usual supplier
    #[serde(default)]
    pub supplier: Reference,

    /// Cost per unit when buying from the supplier
    #[serde(default)]
    pub buy_price: f64,

    /// Price per unit at the point of sale
    #[serde(default)]
    pub sell_price: f64,

    /// Units on hand
    #[serde(default)]
    pub quantity: i64,

    /// Reorder threshold
    #[serde(default)]
    pub min_quantity: i64,

    /// Unit of measure (piece, box, kg, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last modification timestamp
    pub updated: DateTime<Utc>,
}

impl Product {
    /// Create a product with zeroed stock figures and unresolved links
    pub fn new(id: EntityId, name: impl Into<String>, sku: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            barcode: None,
            category: Reference::default(),
            supplier: Reference::default(),
            buy_price: 0.0,
            sell_price: 0.0,
            quantity: 0,
            min_quantity: 0,
            unit: None,
            description: None,
            created: now,
            updated: now,
        }
    }

    /// True when stock is at or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

impl Entity for Product {
    const PREFIX: &'static str = "PRD";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;

    fn pen() -> Product {
        let mut p = Product::new(EntityId::new(EntityPrefix::Prd), "Pen", "P1");
        p.buy_price = 1.5;
        p.sell_price = 2.5;
        p.quantity = 4;
        p.min_quantity = 5;
        p
    }

    #[test]
    fn test_low_stock() {
        let mut p = pen();
        assert!(p.is_low_stock());
        p.quantity = 6;
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_product_yaml_defaults() {
        let yaml = r#"
id: PRD-01HQ3K4N5M6P7R8S9T0VWXYZAB
name: Pen
sku: P1
created: 2024-01-15T10:30:00Z
updated: 2024-01-15T10:30:00Z
"#;
        let p: Product = serde_yml::from_str(yaml).unwrap();
        assert_eq!(p.name, "Pen");
        assert_eq!(p.min_quantity, 0);
        assert_eq!(p.category, Reference::Unresolved(String::new()));
        assert!(p.barcode.is_none());
    }
}
