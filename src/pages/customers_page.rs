use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::app_system::ViewError;
use crate::clients::{CustomersClient, DataSource};
use crate::domain::CustomerRow;
use crate::view_model::build_customer_rows;

use super::{render_with, RenderedPage};

/// The customers table.
#[derive(Clone)]
pub struct CustomersPage {
    source: Arc<dyn DataSource>,
    view: CustomersClient,
}

impl CustomersPage {
    pub fn new(source: Arc<dyn DataSource>, view: CustomersClient) -> Self {
        Self { source, view }
    }

    /// Fetches every customer. A failed fetch is recorded as page state, not
    /// returned; the `Err` side is only for a view that has gone away.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ViewError> {
        let generation = self.view.begin_fetch().await?;
        let outcome = match self.source.fetch_customers().await {
            Ok(customers) => {
                info!(count = customers.len(), "Customers loaded");
                Ok(customers)
            }
            Err(e) => {
                error!(error = %e, "Customer fetch failed");
                Err(e.to_string())
            }
        };
        self.view.complete_fetch(generation, outcome).await?;
        Ok(())
    }

    /// Page-change notification from the table.
    pub async fn set_page(&self, page: u32) -> Result<(), ViewError> {
        self.view.set_page(page).await.map(|_| ())
    }

    /// Rows on the current page.
    pub async fn render(&self) -> Result<RenderedPage<CustomerRow>, ViewError> {
        let snapshot = self.view.snapshot().await?;
        let pagination = snapshot.pagination;
        Ok(render_with(&snapshot.status, pagination, |records| {
            build_customer_rows(pagination.window(records), &pagination)
        }))
    }

    pub async fn close(&self) -> Result<(), ViewError> {
        self.view.shutdown().await
    }
}
