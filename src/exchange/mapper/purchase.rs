//! Purchase rows (export only)

use crate::core::locale::{Labeled, Locale};
use crate::entities::Purchase;
use crate::exchange::mapper::{round_money, Column, MapContext, ToRecord};
use crate::exchange::record::{Record, Value};

/// Spreadsheet columns of a purchase, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseColumn {
    InvoiceNumber,
    Date,
    Supplier,
    Items,
    Total,
    Paid,
    Remaining,
    PaymentMethod,
    Status,
}

impl Column for PurchaseColumn {
    fn all() -> &'static [Self] {
        &[
            PurchaseColumn::InvoiceNumber,
            PurchaseColumn::Date,
            PurchaseColumn::Supplier,
            PurchaseColumn::Items,
            PurchaseColumn::Total,
            PurchaseColumn::Paid,
            PurchaseColumn::Remaining,
            PurchaseColumn::PaymentMethod,
            PurchaseColumn::Status,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            PurchaseColumn::InvoiceNumber => "invoice_number",
            PurchaseColumn::Date => "date",
            PurchaseColumn::Supplier => "supplier",
            PurchaseColumn::Items => "items",
            PurchaseColumn::Total => "total",
            PurchaseColumn::Paid => "paid",
            PurchaseColumn::Remaining => "remaining",
            PurchaseColumn::PaymentMethod => "payment_method",
            PurchaseColumn::Status => "status",
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (PurchaseColumn::InvoiceNumber, Locale::En) => "Invoice No.",
            (PurchaseColumn::Date, Locale::En) => "Date",
            (PurchaseColumn::Supplier, Locale::En) => "Supplier",
            (PurchaseColumn::Items, Locale::En) => "Items",
            (PurchaseColumn::Total, Locale::En) => "Total",
            (PurchaseColumn::Paid, Locale::En) => "Paid",
            (PurchaseColumn::Remaining, Locale::En) => "Remaining",
            (PurchaseColumn::PaymentMethod, Locale::En) => "Payment Method",
            (PurchaseColumn::Status, Locale::En) => "Status",
            (PurchaseColumn::InvoiceNumber, Locale::Ar) => "رقم الفاتورة",
            (PurchaseColumn::Date, Locale::Ar) => "التاريخ",
            (PurchaseColumn::Supplier, Locale::Ar) => "المورد",
            (PurchaseColumn::Items, Locale::Ar) => "عدد الأصناف",
            (PurchaseColumn::Total, Locale::Ar) => "الإجمالي",
            (PurchaseColumn::Paid, Locale::Ar) => "المدفوع",
            (PurchaseColumn::Remaining, Locale::Ar) => "المتبقي",
            (PurchaseColumn::PaymentMethod, Locale::Ar) => "طريقة الدفع",
            (PurchaseColumn::Status, Locale::Ar) => "الحالة",
        }
    }
}

impl ToRecord for Purchase {
    fn to_record(&self, ctx: &MapContext) -> Record {
        let mut record = Record::with_capacity(PurchaseColumn::all().len());
        for column in PurchaseColumn::all() {
            let value: Value = match column {
                PurchaseColumn::InvoiceNumber => self.invoice_number.as_str().into(),
                PurchaseColumn::Date => ctx.format_date(&self.date).into(),
                PurchaseColumn::Supplier => self.supplier_name.as_str().into(),
                PurchaseColumn::Items => self.items.len().into(),
                PurchaseColumn::Total => round_money(self.total()).into(),
                PurchaseColumn::Paid => self.paid.into(),
                PurchaseColumn::Remaining => round_money(self.remaining()).into(),
                PurchaseColumn::PaymentMethod => self.payment_method.label(ctx.locale).into(),
                PurchaseColumn::Status => self.status.label(ctx.locale).into(),
            };
            record.insert(column.label(ctx.locale), value);
        }
        record
    }
}
