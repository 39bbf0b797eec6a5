use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::{OrderRecord, OrderRow, ProductLine};

use super::dates::parse_order_date;
use super::pagination::Pagination;
use super::status_map::StatusMap;

/// Most recent first. Orders with equal dates keep their fetch order; orders
/// whose date doesn't parse go last, also in fetch order.
fn newest_first(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Fetch positions of `records`, sorted newest first.
fn sorted_positions(records: &[OrderRecord]) -> Vec<usize> {
    let mut keyed: Vec<(usize, Option<DateTime<Utc>>)> = records
        .iter()
        .enumerate()
        .map(|(index, order)| (index, parse_order_date(&order.order_date)))
        .collect();
    // `sort_by` is stable, which is what makes ties deterministic.
    keyed.sort_by(|(_, a), (_, b)| newest_first(a, b));
    keyed.into_iter().map(|(index, _)| index).collect()
}

/// The records in display order.
pub fn sort_by_order_date(records: &[OrderRecord]) -> Vec<OrderRecord> {
    sorted_positions(records)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}

/// Builds order rows sorted by order date, newest first.
///
/// Display numbers follow the sorted position. The status column reads from
/// `statuses`.
pub fn build_order_rows(records: &[OrderRecord], statuses: &StatusMap, pagination: &Pagination) -> Vec<OrderRow> {
    sorted_positions(records)
        .into_iter()
        .enumerate()
        .map(|(position, key)| {
            let order = &records[key];
            OrderRow {
                key,
                display_number: pagination.display_number(position),
                order_new_id: order.order_new_id.clone(),
                email: order.email().to_string(),
                products: vec![ProductLine {
                    product: order.product.clone(),
                    quantity: order.quantity,
                }],
                total_amount: order.total_amount,
                total_quantity: order.quantity,
                order_date: order.order_date.clone(),
                shipping_address: order.shipping_address.clone(),
                shipping_city: order.shipping_city.clone(),
                status: statuses.displayed(&order.order_new_id).to_string(),
            }
        })
        .collect()
}
