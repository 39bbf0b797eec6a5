use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn, Instrument};

use crate::app_system::ViewError;
use crate::clients::{DataSource, OrdersClient, StatusMutator};
use crate::domain::{OrderRow, OrderStatus};
use crate::view_model::{build_order_rows, sort_by_order_date};

use super::{render_with, RenderedPage};

/// The orders table with its editable status column.
#[derive(Clone)]
pub struct OrdersPage {
    source: Arc<dyn DataSource>,
    mutator: Arc<dyn StatusMutator>,
    view: OrdersClient,
    revert_on_failure: bool,
    mutations: Arc<Mutex<JoinSet<()>>>,
}

impl OrdersPage {
    pub fn new(
        source: Arc<dyn DataSource>,
        mutator: Arc<dyn StatusMutator>,
        view: OrdersClient,
        revert_on_failure: bool,
    ) -> Self {
        Self {
            source,
            mutator,
            view,
            revert_on_failure,
            mutations: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Fetches every order and, once the data is in, seeds the status
    /// selections from it. A failed fetch is recorded as page state.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ViewError> {
        let generation = self.view.begin_fetch().await?;
        let outcome = match self.source.fetch_orders().await {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                Ok(orders)
            }
            Err(e) => {
                error!(error = %e, "Order fetch failed");
                Err(e.to_string())
            }
        };
        if !self.view.complete_fetch(generation, outcome).await? {
            debug!(generation, "A newer fetch superseded this one");
        }
        Ok(())
    }

    /// Value-change notification from a status cell.
    ///
    /// The selection is applied right away; the mutation runs in the background
    /// and its failure is only logged (and rolled back when configured to).
    ///
    /// # Errors
    /// [`ViewError::UnknownOrder`] if `order_id` is not a loaded order. No
    /// mutation is sent in that case.
    #[instrument(skip(self))]
    pub async fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<(), ViewError> {
        let previous = self.view.set_status(order_id.to_string(), status).await?;
        debug!(?previous, "Selection applied");

        let mutator = Arc::clone(&self.mutator);
        let view = self.view.clone();
        let revert_on_failure = self.revert_on_failure;
        let order_id = order_id.to_string();
        let span = tracing::info_span!("status_mutation", order_id = %order_id, %status);

        let mut mutations = self.mutations.lock().await;
        reap_finished(&mut mutations);
        mutations.spawn(
            async move {
                match mutator.update_order_status(&order_id, status).await {
                    Ok(updated) => {
                        debug!(confirmed = ?updated.status, "Mutation confirmed");
                        let accepted = updated.status.or_else(|| Some(status.to_string()));
                        if let Err(e) = view.confirm_status(order_id, accepted).await {
                            debug!(error = %e, "View closed before confirmation");
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Mutation failed");
                        if revert_on_failure {
                            match view.revert_status(order_id, status).await {
                                Ok(true) => info!("Selection reverted"),
                                Ok(false) => debug!("Selection changed since; leaving it"),
                                Err(e) => debug!(error = %e, "View closed before revert"),
                            }
                        }
                    }
                }
            }
            .instrument(span),
        );
        Ok(())
    }

    /// Page-change notification from the table.
    pub async fn set_page(&self, page: u32) -> Result<(), ViewError> {
        self.view.set_page(page).await.map(|_| ())
    }

    /// The selector value currently shown for `order_id`.
    pub async fn displayed_status(&self, order_id: &str) -> Result<String, ViewError> {
        let snapshot = self.view.snapshot().await?;
        Ok(snapshot.statuses.displayed(order_id).to_string())
    }

    /// Rows on the current page, newest order first.
    pub async fn render(&self) -> Result<RenderedPage<OrderRow>, ViewError> {
        let snapshot = self.view.snapshot().await?;
        let pagination = snapshot.pagination;
        let statuses = snapshot.statuses;
        Ok(render_with(&snapshot.status, pagination, |records| {
            let sorted = sort_by_order_date(records);
            build_order_rows(pagination.window(&sorted), &statuses, &pagination)
        }))
    }

    /// Waits for every in-flight mutation to finish.
    pub async fn settle(&self) {
        let mut mutations = self.mutations.lock().await;
        while let Some(result) = mutations.join_next().await {
            if let Err(e) = result {
                error!(error = %e, "Mutation task failed");
            }
        }
    }

    pub async fn close(&self) -> Result<(), ViewError> {
        self.view.shutdown().await
    }
}

/// Drops mutation tasks that have already finished so the set stays small.
fn reap_finished(mutations: &mut JoinSet<()>) {
    while let Some(result) = mutations.try_join_next() {
        if let Err(e) = result {
            error!(error = %e, "Mutation task failed");
        }
    }
}
