//! Product rows: export and import

use crate::core::entity::Reference;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::locale::Locale;
use crate::entities::Product;
use crate::exchange::mapper::{
    lookup, parse_count, parse_number, Column, FromRecord, ImportBatch, MapContext, ToRecord,
};
use crate::exchange::record::{Record, Value};

/// Spreadsheet columns of a product, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductColumn {
    Name,
    Sku,
    Barcode,
    Category,
    Supplier,
    BuyPrice,
    SellPrice,
    Quantity,
    MinQuantity,
    Unit,
    Description,
}

impl Column for ProductColumn {
    fn all() -> &'static [Self] {
        &[
            ProductColumn::Name,
            ProductColumn::Sku,
            ProductColumn::Barcode,
            ProductColumn::Category,
            ProductColumn::Supplier,
            ProductColumn::BuyPrice,
            ProductColumn::SellPrice,
            ProductColumn::Quantity,
            ProductColumn::MinQuantity,
            ProductColumn::Unit,
            ProductColumn::Description,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            ProductColumn::Name => "name",
            ProductColumn::Sku => "sku",
            ProductColumn::Barcode => "barcode",
            ProductColumn::Category => "category",
            ProductColumn::Supplier => "supplier",
            ProductColumn::BuyPrice => "buy_price",
            ProductColumn::SellPrice => "sell_price",
            ProductColumn::Quantity => "quantity",
            ProductColumn::MinQuantity => "min_quantity",
            ProductColumn::Unit => "unit",
            ProductColumn::Description => "description",
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProductColumn::Name, Locale::En) => "Name",
            (ProductColumn::Sku, Locale::En) => "SKU",
            (ProductColumn::Barcode, Locale::En) => "Barcode",
            (ProductColumn::Category, Locale::En) => "Category",
            (ProductColumn::Supplier, Locale::En) => "Supplier",
            (ProductColumn::BuyPrice, Locale::En) => "Buy Price",
            (ProductColumn::SellPrice, Locale::En) => "Sell Price",
            (ProductColumn::Quantity, Locale::En) => "Quantity",
            (ProductColumn::MinQuantity, Locale::En) => "Min Quantity",
            (ProductColumn::Unit, Locale::En) => "Unit",
            (ProductColumn::Description, Locale::En) => "Description",
            (ProductColumn::Name, Locale::Ar) => "اسم المنتج",
            (ProductColumn::Sku, Locale::Ar) => "رمز المنتج",
            (ProductColumn::Barcode, Locale::Ar) => "الباركود",
            (ProductColumn::Category, Locale::Ar) => "الفئة",
            (ProductColumn::Supplier, Locale::Ar) => "المورد",
            (ProductColumn::BuyPrice, Locale::Ar) => "سعر الشراء",
            (ProductColumn::SellPrice, Locale::Ar) => "سعر البيع",
            (ProductColumn::Quantity, Locale::Ar) => "الكمية",
            (ProductColumn::MinQuantity, Locale::Ar) => "الحد الأدنى",
            (ProductColumn::Unit, Locale::Ar) => "الوحدة",
            (ProductColumn::Description, Locale::Ar) => "الوصف",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ProductColumn::BuyPrice => &["buyPrice", "cost"],
            ProductColumn::SellPrice => &["sellPrice", "price"],
            ProductColumn::MinQuantity => &["minQuantity"],
            ProductColumn::Quantity => &["qty", "stock"],
            _ => &[],
        }
    }

    fn example(&self) -> &'static str {
        match self {
            ProductColumn::Name => "Ballpoint Pen, blue",
            ProductColumn::Sku => "PEN-001",
            ProductColumn::Barcode => "6281000000017",
            ProductColumn::Category => "Stationery",
            ProductColumn::Supplier => "Acme Office Supplies",
            ProductColumn::BuyPrice => "1.5",
            ProductColumn::SellPrice => "2.5",
            ProductColumn::Quantity => "120",
            ProductColumn::MinQuantity => "20",
            ProductColumn::Unit => "piece",
            ProductColumn::Description => "Smooth writing, 0.7mm",
        }
    }
}

impl ToRecord for Product {
    fn to_record(&self, ctx: &MapContext) -> Record {
        let mut record = Record::with_capacity(ProductColumn::all().len());
        for column in ProductColumn::all() {
            let value: Value = match column {
                ProductColumn::Name => self.name.as_str().into(),
                ProductColumn::Sku => self.sku.as_str().into(),
                ProductColumn::Barcode => self.barcode.clone().into(),
                ProductColumn::Category => self.category.to_string().into(),
                ProductColumn::Supplier => self.supplier.to_string().into(),
                ProductColumn::BuyPrice => self.buy_price.into(),
                ProductColumn::SellPrice => self.sell_price.into(),
                ProductColumn::Quantity => self.quantity.into(),
                ProductColumn::MinQuantity => self.min_quantity.into(),
                ProductColumn::Unit => self.unit.clone().into(),
                ProductColumn::Description => self.description.clone().into(),
            };
            record.insert(column.label(ctx.locale), value);
        }
        record
    }
}

impl FromRecord for Product {
    fn from_record(record: &Record, position: usize, batch: &ImportBatch) -> Self {
        let text = |column| lookup(record, column);

        let id = record
            .get_text("id")
            .and_then(|s| EntityId::parse(s.trim()).ok())
            .filter(|id| id.prefix() == EntityPrefix::Prd)
            .unwrap_or_else(|| {
                EntityId::for_batch_row(EntityPrefix::Prd, batch.timestamp_ms(), position)
            });

        let sku = text(ProductColumn::Sku)
            .unwrap_or_else(|| format!("SKU-{}-{}", batch.timestamp_ms(), position + 1));

        Product {
            id,
            name: text(ProductColumn::Name).unwrap_or_default(),
            sku,
            barcode: text(ProductColumn::Barcode),
            category: Reference::unresolved(text(ProductColumn::Category).unwrap_or_default()),
            supplier: Reference::unresolved(text(ProductColumn::Supplier).unwrap_or_default()),
            buy_price: parse_number(text(ProductColumn::BuyPrice)),
            sell_price: parse_number(text(ProductColumn::SellPrice)),
            quantity: parse_count(text(ProductColumn::Quantity)),
            min_quantity: parse_count(text(ProductColumn::MinQuantity)),
            unit: text(ProductColumn::Unit),
            description: text(ProductColumn::Description),
            created: batch.started(),
            updated: batch.started(),
        }
    }
}
