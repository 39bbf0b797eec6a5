use serde::Serialize;
use serde_json::Value;

use crate::domain::{CustomerRow, OrderRow, ProductLine};

use super::dates::format_order_date;

/// One table column: a label, the row field it shows, and an optional render
/// rule that replaces the plain field value.
pub struct Column<R> {
    pub label: &'static str,
    pub field: &'static str,
    pub render: Option<fn(&R) -> String>,
}

impl<R> Column<R> {
    pub fn plain(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            field,
            render: None,
        }
    }

    pub fn rendered(label: &'static str, field: &'static str, render: fn(&R) -> String) -> Self {
        Self {
            label,
            field,
            render: Some(render),
        }
    }
}

impl<R: Serialize> Column<R> {
    /// Text of this column's cell for `row`.
    pub fn cell(&self, row: &R) -> String {
        if let Some(render) = self.render {
            return render(row);
        }
        match serde_json::to_value(row) {
            Ok(Value::Object(fields)) => fields.get(self.field).map(value_text).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Amounts print without a trailing `.0` when whole.
fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

fn product_line_text(line: &ProductLine) -> String {
    let mut text = String::new();
    if line.image().is_some() {
        text.push_str("[image] ");
    }
    if let Some(name) = line.name() {
        text.push_str(name);
        text.push(' ');
    }
    text.push_str(&format!("x{}", line.quantity));
    text
}

fn render_products(row: &OrderRow) -> String {
    row.products
        .iter()
        .map(product_line_text)
        .collect::<Vec<_>>()
        .join("; ")
}

fn render_total_amount(row: &OrderRow) -> String {
    format_amount(row.total_amount)
}

fn render_order_date(row: &OrderRow) -> String {
    format_order_date(&row.order_date)
}

pub fn customer_columns() -> Vec<Column<CustomerRow>> {
    vec![
        Column::plain("SNo", "display_number"),
        Column::plain("Username", "username"),
        Column::plain("Email", "email"),
        Column::plain("First Name", "first_name"),
        Column::plain("Last Name", "last_name"),
        Column::plain("Address", "address"),
        Column::plain("Phone Number", "phone_number"),
        Column::plain("Registration Date", "registration_date"),
    ]
}

pub fn order_columns() -> Vec<Column<OrderRow>> {
    vec![
        Column::plain("SNo", "display_number"),
        Column::plain("Email", "email"),
        Column::rendered("Products", "products", render_products),
        Column::rendered("Total Amount", "total_amount", render_total_amount),
        Column::plain("Total Quantity", "total_quantity"),
        Column::rendered("Order Date", "order_date", render_order_date),
        Column::plain("Shipping Address", "shipping_address"),
        Column::plain("Shipping City", "shipping_city"),
        Column::plain("Status", "status"),
    ]
}
