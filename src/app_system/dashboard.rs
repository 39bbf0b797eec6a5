use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ViewActor;
use crate::clients::{CustomersClient, DataSource, OrdersClient, StatusMutator};
use crate::config::Settings;
use crate::customers_view::CustomersView;
use crate::orders_view::OrdersView;
use crate::pages::{CustomersPage, OrdersPage};

/// The dashboard: one view actor per page, wired to the collaborators.
///
/// Responsible for starting the views and tearing them down. Any fetch or
/// mutation that completes after shutdown finds its view gone and is dropped.
pub struct Dashboard {
    pub customers: CustomersPage,
    pub orders: OrdersPage,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Dashboard {
    pub fn new(settings: &Settings, source: Arc<dyn DataSource>, mutator: Arc<dyn StatusMutator>) -> Self {
        info!(page_size = settings.page_size, "Starting dashboard");

        // 1. Customers view
        let (customers_actor, customers_client) =
            ViewActor::new(settings.actor_buffer, CustomersView::new(settings.page_size));
        let customers_handle = tokio::spawn(customers_actor.run());
        let customers = CustomersPage::new(Arc::clone(&source), CustomersClient::new(customers_client));

        // 2. Orders view
        let (orders_actor, orders_client) =
            ViewActor::new(settings.actor_buffer, OrdersView::new(settings.page_size));
        let orders_handle = tokio::spawn(orders_actor.run());
        let orders = OrdersPage::new(
            source,
            mutator,
            OrdersClient::new(orders_client),
            settings.revert_on_mutation_failure,
        );

        Self {
            customers,
            orders,
            handles: vec![customers_handle, orders_handle],
        }
    }

    /// Lets in-flight mutations finish, then stops both views.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard...");
        self.orders.settle().await;

        if let Err(e) = self.customers.close().await {
            error!(error = %e, "Customers view already closed");
        }
        if let Err(e) = self.orders.close().await {
            error!(error = %e, "Orders view already closed");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("View task failed: {:?}", e);
                return Err(format!("View task failed: {:?}", e));
            }
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
