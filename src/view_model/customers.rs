use tracing::trace;

use crate::domain::{CustomerRecord, CustomerRow};

use super::dates::format_registration_date;
use super::pagination::Pagination;

/// Builds customer rows in fetch order.
///
/// `key` is the position in `records`; the display number is offset by the
/// current page.
pub fn build_customer_rows(records: &[CustomerRecord], pagination: &Pagination) -> Vec<CustomerRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, customer)| {
            let registration_date = format_registration_date(customer.registration_date.as_ref());
            trace!(
                user_id = %customer.user_id,
                raw = ?customer.registration_date,
                formatted = %registration_date,
                "Formatted registration date"
            );
            CustomerRow {
                key: index,
                display_number: pagination.display_number(index),
                user_id: customer.user_id.clone(),
                username: customer.username.clone(),
                email: customer.email.clone(),
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
                address: customer.address.clone(),
                phone_number: customer.phone_number.clone(),
                registration_date,
            }
        })
        .collect()
}
