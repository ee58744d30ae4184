//! Expense entity type - Operating costs outside of stock purchases

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, PaymentMethod};
use crate::core::identity::EntityId;
use crate::core::locale::{Labeled, Locale};

/// Expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ExpenseCategory {
    Rent,
    Salaries,
    Utilities,
    Maintenance,
    Supplies,
    #[default]
    Other,
}

impl Labeled for ExpenseCategory {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ExpenseCategory::Rent, Locale::En) => "Rent",
            (ExpenseCategory::Salaries, Locale::En) => "Salaries",
            (ExpenseCategory::Utilities, Locale::En) => "Utilities",
            (ExpenseCategory::Maintenance, Locale::En) => "Maintenance",
            (ExpenseCategory::Supplies, Locale::En) => "Supplies",
            (ExpenseCategory::Other, Locale::En) => "Other",
            (ExpenseCategory::Rent, Locale::Ar) => "إيجار",
            (ExpenseCategory::Salaries, Locale::Ar) => "رواتب",
            (ExpenseCategory::Utilities, Locale::Ar) => "خدمات",
            (ExpenseCategory::Maintenance, Locale::Ar) => "صيانة",
            (ExpenseCategory::Supplies, Locale::Ar) => "مستلزمات",
            (ExpenseCategory::Other, Locale::Ar) => "أخرى",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Rent => write!(f, "rent"),
            ExpenseCategory::Salaries => write!(f, "salaries"),
            ExpenseCategory::Utilities => write!(f, "utilities"),
            ExpenseCategory::Maintenance => write!(f, "maintenance"),
            ExpenseCategory::Supplies => write!(f, "supplies"),
            ExpenseCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rent" => Ok(ExpenseCategory::Rent),
            "salaries" => Ok(ExpenseCategory::Salaries),
            "utilities" => Ok(ExpenseCategory::Utilities),
            "maintenance" => Ok(ExpenseCategory::Maintenance),
            "supplies" => Ok(ExpenseCategory::Supplies),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(format!(
                "Invalid category: {}. Use rent, salaries, utilities, maintenance, supplies, or other",
                s
            )),
        }
    }
}

/// An operating expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,

    pub title: String,

    #[serde(default)]
    pub category: ExpenseCategory,

    pub amount: f64,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub payment_method: PaymentMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entity for Expense {
    const PREFIX: &'static str = "EXP";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in [
            ExpenseCategory::Rent,
            ExpenseCategory::Salaries,
            ExpenseCategory::Utilities,
            ExpenseCategory::Maintenance,
            ExpenseCategory::Supplies,
            ExpenseCategory::Other,
        ] {
            let parsed: ExpenseCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ExpenseCategory::Rent.label(Locale::En), "Rent");
        assert_eq!(ExpenseCategory::Rent.label(Locale::Ar), "إيجار");
    }
}
