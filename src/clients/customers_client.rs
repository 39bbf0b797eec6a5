use crate::actor_framework::ViewClient;
use crate::customers_view::{CustomersAction, CustomersActionResult, CustomersView};
use crate::domain::CustomerRecord;

/// Client for the customers view actor.
#[derive(Clone)]
pub struct CustomersClient {
    inner: ViewClient<CustomersView>,
}

crate::impl_view_client_methods!(
    CustomersClient,
    CustomersView,
    CustomersAction,
    CustomersActionResult,
    CustomerRecord
);
