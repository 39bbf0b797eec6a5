use crate::actor_framework::ViewState;
use crate::app_system::ViewError;
use crate::domain::CustomerRecord;
use crate::view_model::{Fetch, FetchStatus, Pagination};

use super::actions::{CustomersAction, CustomersActionResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomersSnapshot {
    pub pagination: Pagination,
    pub status: FetchStatus<CustomerRecord>,
}

#[derive(Debug, Default)]
pub struct CustomersView {
    pagination: Pagination,
    fetch: Fetch<CustomerRecord>,
}

impl CustomersView {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            fetch: Fetch::default(),
        }
    }
}

impl ViewState for CustomersView {
    const NAME: &'static str = "customers";

    type Action = CustomersAction;
    type ActionResult = CustomersActionResult;
    type Snapshot = CustomersSnapshot;

    fn snapshot(&self) -> CustomersSnapshot {
        CustomersSnapshot {
            pagination: self.pagination,
            status: self.fetch.status().clone(),
        }
    }

    /// Handles customers page events.
    ///
    /// # Errors
    /// `SetPage(0)` fails with [`ViewError::InvalidPage`].
    fn handle_action(&mut self, action: CustomersAction) -> Result<CustomersActionResult, ViewError> {
        match action {
            CustomersAction::BeginFetch => Ok(CustomersActionResult::FetchStarted(self.fetch.begin())),
            CustomersAction::CompleteFetch { generation, outcome } => {
                Ok(CustomersActionResult::FetchCompleted(self.fetch.complete(generation, outcome)))
            }
            CustomersAction::SetPage(page) => {
                self.pagination.set_page(page)?;
                Ok(CustomersActionResult::PageChanged(page))
            }
        }
    }
}
