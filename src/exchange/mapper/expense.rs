//! Expense rows (export only)

use crate::core::locale::{Labeled, Locale};
use crate::entities::Expense;
use crate::exchange::mapper::{Column, MapContext, ToRecord};
use crate::exchange::record::{Record, Value};

/// Spreadsheet columns of an expense, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseColumn {
    Title,
    Category,
    Amount,
    Date,
    PaymentMethod,
    Notes,
}

impl Column for ExpenseColumn {
    fn all() -> &'static [Self] {
        &[
            ExpenseColumn::Title,
            ExpenseColumn::Category,
            ExpenseColumn::Amount,
            ExpenseColumn::Date,
            ExpenseColumn::PaymentMethod,
            ExpenseColumn::Notes,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            ExpenseColumn::Title => "title",
            ExpenseColumn::Category => "category",
            ExpenseColumn::Amount => "amount",
            ExpenseColumn::Date => "date",
            ExpenseColumn::PaymentMethod => "payment_method",
            ExpenseColumn::Notes => "notes",
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ExpenseColumn::Title, Locale::En) => "Title",
            (ExpenseColumn::Category, Locale::En) => "Category",
            (ExpenseColumn::Amount, Locale::En) => "Amount",
            (ExpenseColumn::Date, Locale::En) => "Date",
            (ExpenseColumn::PaymentMethod, Locale::En) => "Payment Method",
            (ExpenseColumn::Notes, Locale::En) => "Notes",
            (ExpenseColumn::Title, Locale::Ar) => "البند",
            (ExpenseColumn::Category, Locale::Ar) => "الفئة",
            (ExpenseColumn::Amount, Locale::Ar) => "المبلغ",
            (ExpenseColumn::Date, Locale::Ar) => "التاريخ",
            (ExpenseColumn::PaymentMethod, Locale::Ar) => "طريقة الدفع",
            (ExpenseColumn::Notes, Locale::Ar) => "ملاحظات",
        }
    }
}

impl ToRecord for Expense {
    fn to_record(&self, ctx: &MapContext) -> Record {
        let mut record = Record::with_capacity(ExpenseColumn::all().len());
        for column in ExpenseColumn::all() {
            let value: Value = match column {
                ExpenseColumn::Title => self.title.as_str().into(),
                ExpenseColumn::Category => self.category.label(ctx.locale).into(),
                ExpenseColumn::Amount => self.amount.into(),
                ExpenseColumn::Date => ctx.format_date(&self.date).into(),
                ExpenseColumn::PaymentMethod => self.payment_method.label(ctx.locale).into(),
                ExpenseColumn::Notes => self.notes.clone().into(),
            };
            record.insert(column.label(ctx.locale), value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::PaymentMethod;
    use crate::core::identity::{EntityId, EntityPrefix};
    use crate::entities::expense::ExpenseCategory;
    use crate::exchange::encode::encode;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_expense_csv() {
        let expense = Expense {
            id: EntityId::new(EntityPrefix::Exp),
            title: "Shop rent".to_string(),
            category: ExpenseCategory::Rent,
            amount: 1200.0,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            payment_method: PaymentMethod::Transfer,
            notes: Some("June, paid \"early\"".to_string()),
        };
        let ctx = MapContext::new(Locale::En).with_date_format("%d/%m/%Y");
        let text = encode(&[expense.to_record(&ctx)]);
        assert_eq!(
            text,
            "Title,Category,Amount,Date,Payment Method,Notes\n\
             Shop rent,Rent,1200,01/06/2024,Transfer,\"June, paid \"\"early\"\"\""
        );
    }
}
