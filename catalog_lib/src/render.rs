//! Turns product records into display rows and rows into tables.

use catalog_api::types::Product;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::currency::CurrencyFormat;

/// Shown in place of a missing category.
pub const EMPTY_CELL: &str = "-";

/// One rendered product: what a row of the product table shows.
#[derive(Tabled, Serialize, Clone, Debug, PartialEq)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    pub price: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableStyle {
    #[default]
    Plain,
    Markdown,
}

pub fn build_product_rows(products: &[Product], currency: &CurrencyFormat) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            category: match p.category.as_deref().map(str::trim) {
                Some(category) if !category.is_empty() => category.to_string(),
                _ => EMPTY_CELL.to_string(),
            },
            price: currency.format(p.price.unwrap_or(0.0)),
        })
        .collect()
}

pub fn render_table(rows: &[ProductRow], style: TableStyle) -> String {
    let mut table = Table::new(rows);
    if style == TableStyle::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{EN_US, PT_BR};

    fn product(id: i64, name: &str, category: Option<&str>, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.map(str::to_string),
            price: Some(price),
        }
    }

    #[test]
    fn builds_one_row_per_product() {
        let rows = build_product_rows(&[product(1, "Widget", Some("Tools"), 9.5)], &PT_BR);
        assert_eq!(
            rows,
            vec![ProductRow {
                id: "1".to_string(),
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                price: "R$ 9,50".to_string(),
            }]
        );
    }

    #[test]
    fn missing_or_blank_category_is_a_dash() {
        let rows = build_product_rows(
            &[product(1, "A", None, 1.0), product(2, "B", Some(" "), 2.0)],
            &EN_US,
        );
        assert_eq!(rows[0].category, "-");
        assert_eq!(rows[1].category, "-");
        assert_eq!(rows[1].price, "$2.00");
    }

    #[test]
    fn missing_price_renders_as_zero() {
        let mut p = product(4, "Gift Card", None, 0.0);
        p.price = None;
        let rows = build_product_rows(&[p], &PT_BR);
        assert_eq!(rows[0].price, "R$ 0,00");
    }

    #[test]
    fn empty_products_give_empty_rows() {
        assert!(build_product_rows(&[], &PT_BR).is_empty());
    }

    #[test]
    fn markdown_table_has_headers_and_values() {
        let rows = build_product_rows(&[product(3, "Lamp", Some("Home"), 1234.9)], &PT_BR);
        let md = render_table(&rows, TableStyle::Markdown);
        let header = md.lines().next().unwrap();
        assert!(header.contains("ID"));
        assert!(header.contains("Name"));
        assert!(header.contains("Category"));
        assert!(header.contains("Price"));
        assert!(md.contains("---"));
        assert!(md.contains("R$ 1.234,90"));
    }

    #[test]
    fn plain_table_contains_row_values() {
        let rows = build_product_rows(&[product(1, "Widget", Some("Tools"), 9.5)], &PT_BR);
        let table = render_table(&rows, TableStyle::Plain);
        assert!(table.contains("Widget"));
        assert!(table.contains("Tools"));
        assert!(table.contains("R$ 9,50"));
    }
}
