//! Sale rows (export only)

use crate::core::locale::{Labeled, Locale};
use crate::entities::Sale;
use crate::exchange::mapper::{round_money, Column, MapContext, ToRecord};
use crate::exchange::record::{Record, Value};

/// Spreadsheet columns of a sale, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleColumn {
    InvoiceNumber,
    Date,
    Customer,
    Items,
    Subtotal,
    Discount,
    Tax,
    Total,
    PaymentMethod,
    Status,
}

impl Column for SaleColumn {
    fn all() -> &'static [Self] {
        &[
            SaleColumn::InvoiceNumber,
            SaleColumn::Date,
            SaleColumn::Customer,
            SaleColumn::Items,
            SaleColumn::Subtotal,
            SaleColumn::Discount,
            SaleColumn::Tax,
            SaleColumn::Total,
            SaleColumn::PaymentMethod,
            SaleColumn::Status,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            SaleColumn::InvoiceNumber => "invoice_number",
            SaleColumn::Date => "date",
            SaleColumn::Customer => "customer",
            SaleColumn::Items => "items",
            SaleColumn::Subtotal => "subtotal",
            SaleColumn::Discount => "discount",
            SaleColumn::Tax => "tax",
            SaleColumn::Total => "total",
            SaleColumn::PaymentMethod => "payment_method",
            SaleColumn::Status => "status",
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SaleColumn::InvoiceNumber, Locale::En) => "Invoice No.",
            (SaleColumn::Date, Locale::En) => "Date",
            (SaleColumn::Customer, Locale::En) => "Customer",
            (SaleColumn::Items, Locale::En) => "Items",
            (SaleColumn::Subtotal, Locale::En) => "Subtotal",
            (SaleColumn::Discount, Locale::En) => "Discount",
            (SaleColumn::Tax, Locale::En) => "Tax",
            (SaleColumn::Total, Locale::En) => "Total",
            (SaleColumn::PaymentMethod, Locale::En) => "Payment Method",
            (SaleColumn::Status, Locale::En) => "Status",
            (SaleColumn::InvoiceNumber, Locale::Ar) => "رقم الفاتورة",
            (SaleColumn::Date, Locale::Ar) => "التاريخ",
            (SaleColumn::Customer, Locale::Ar) => "العميل",
            (SaleColumn::Items, Locale::Ar) => "عدد الأصناف",
            (SaleColumn::Subtotal, Locale::Ar) => "المجموع الفرعي",
            (SaleColumn::Discount, Locale::Ar) => "الخصم",
            (SaleColumn::Tax, Locale::Ar) => "الضريبة",
            (SaleColumn::Total, Locale::Ar) => "الإجمالي",
            (SaleColumn::PaymentMethod, Locale::Ar) => "طريقة الدفع",
            (SaleColumn::Status, Locale::Ar) => "الحالة",
        }
    }
}

/// Shown when a sale has no customer on record
fn walk_in_customer(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Walk-in customer",
        Locale::Ar => "عميل نقدي",
    }
}

impl ToRecord for Sale {
    fn to_record(&self, ctx: &MapContext) -> Record {
        let mut record = Record::with_capacity(SaleColumn::all().len());
        for column in SaleColumn::all() {
            let value: Value = match column {
                SaleColumn::InvoiceNumber => self.invoice_number.as_str().into(),
                SaleColumn::Date => ctx.format_date(&self.date).into(),
                SaleColumn::Customer => self
                    .customer
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or(walk_in_customer(ctx.locale))
                    .into(),
                SaleColumn::Items => self.items.len().into(),
                SaleColumn::Subtotal => round_money(self.subtotal()).into(),
                SaleColumn::Discount => self.discount.into(),
                SaleColumn::Tax => self.tax.into(),
                SaleColumn::Total => round_money(self.total()).into(),
                SaleColumn::PaymentMethod => self.payment_method.label(ctx.locale).into(),
                SaleColumn::Status => self.status.label(ctx.locale).into(),
            };
            record.insert(column.label(ctx.locale), value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{PaymentMethod, TransactionStatus};
    use crate::core::identity::{EntityId, EntityPrefix};
    use crate::entities::sale::LineItem;
    use crate::exchange::encode::encode;
    use crate::exchange::mapper::headers;
    use chrono::{TimeZone, Utc};

    fn sale() -> Sale {
        Sale {
            id: EntityId::new(EntityPrefix::Sale),
            invoice_number: "INV-0042".to_string(),
            date: Utc.with_ymd_and_hms(2024, 2, 29, 17, 45, 0).unwrap(),
            customer: None,
            items: vec![
                LineItem {
                    product: None,
                    name: "Pen".to_string(),
                    quantity: 3.0,
                    unit_price: 0.1,
                },
                LineItem {
                    product: None,
                    name: "Notebook".to_string(),
                    quantity: 1.0,
                    unit_price: 0.2,
                },
            ],
            discount: 0.0,
            tax: 0.05,
            payment_method: PaymentMethod::Transfer,
            status: TransactionStatus::Pending,
        }
    }

    #[test]
    fn test_sale_record() {
        let record = sale().to_record(&MapContext::new(Locale::En));
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            headers::<SaleColumn>(Locale::En)
        );
        assert_eq!(record.get_text("Date").as_deref(), Some("2024-02-29"));
        assert_eq!(
            record.get_text("Customer").as_deref(),
            Some("Walk-in customer")
        );
        assert_eq!(record.get("Items"), Some(&Value::Number(2.0)));
        assert_eq!(record.get("Subtotal"), Some(&Value::Number(0.5)));
        assert_eq!(record.get("Total"), Some(&Value::Number(0.55)));
        assert_eq!(
            record.get_text("Payment Method").as_deref(),
            Some("Transfer")
        );
        assert_eq!(record.get_text("Status").as_deref(), Some("Pending"));
    }

    #[test]
    fn test_sale_record_arabic() {
        let mut s = sale();
        s.customer = Some("Huda".to_string());
        s.payment_method = PaymentMethod::Cash;
        s.status = TransactionStatus::Completed;

        let record = s.to_record(&MapContext::new(Locale::Ar));
        assert_eq!(record.get_text("العميل").as_deref(), Some("Huda"));
        assert_eq!(record.get_text("طريقة الدفع").as_deref(), Some("نقدي"));
        assert_eq!(record.get_text("الحالة").as_deref(), Some("مكتمل"));
    }

    #[test]
    fn test_sale_csv_line() {
        let text = encode(&[sale().to_record(&MapContext::new(Locale::En))]);
        assert_eq!(
            text.lines().nth(1),
            Some("INV-0042,2024-02-29,Walk-in customer,2,0.5,0,0.05,0.55,Transfer,Pending")
        );
    }
}
