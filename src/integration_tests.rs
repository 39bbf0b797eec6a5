#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app_system::{ClientError, Dashboard, ViewError};
    use crate::config::Settings;
    use crate::domain::{CustomerRecord, OrderProduct, OrderRecord, OrderStatus, RawTimestamp};
    use crate::mock_framework::{RecordingMutator, StaticDataSource};
    use crate::pages::PageState;
    use crate::view_model::dates::INVALID_DATE;
    use crate::view_model::STATUS_PLACEHOLDER;

    fn two_orders() -> Vec<OrderRecord> {
        vec![
            OrderRecord::new("A", "2024-01-01")
                .with_status("Processing")
                .with_email("a@example.com")
                .with_product(OrderProduct::new("p1", "Lamp"), 1),
            OrderRecord::new("B", "2024-02-01").with_email("b@example.com"),
        ]
    }

    fn start(settings: &Settings, source: StaticDataSource, mutator: Arc<RecordingMutator>) -> Dashboard {
        Dashboard::new(settings, Arc::new(source), mutator)
    }

    #[tokio::test]
    async fn test_orders_end_to_end() {
        let mutator = Arc::new(RecordingMutator::default());
        let dashboard = start(&Settings::default(), StaticDataSource::orders(two_orders()), mutator.clone());

        // Nothing fetched yet.
        let page = dashboard.orders.render().await.unwrap();
        assert_eq!(page.state, PageState::Loading);

        dashboard.orders.load().await.unwrap();
        let page = dashboard.orders.render().await.unwrap();
        let ids: Vec<_> = page.rows().iter().map(|row| row.order_new_id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(page.rows()[0].status, STATUS_PLACEHOLDER);
        assert_eq!(page.rows()[1].status, "Processing");

        dashboard.orders.set_status("A", OrderStatus::Delivered).await.unwrap();
        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Delivered");
        assert_eq!(dashboard.orders.displayed_status("B").await.unwrap(), STATUS_PLACEHOLDER);

        let page = dashboard.orders.render().await.unwrap();
        assert_eq!(page.rows()[1].status, "Delivered");
        assert_eq!(page.rows()[0].status, STATUS_PLACEHOLDER);

        dashboard.orders.settle().await;
        assert_eq!(mutator.calls(), vec![("A".to_string(), OrderStatus::Delivered)]);

        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_selection_shows_before_mutation_resolves() {
        let mutator = Arc::new(RecordingMutator::default().gated());
        let dashboard = start(&Settings::default(), StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("B", OrderStatus::Shipped).await.unwrap();
        // The mutation is still held at the gate.
        assert_eq!(dashboard.orders.displayed_status("B").await.unwrap(), "Shipped");

        mutator.release();
        dashboard.shutdown().await.unwrap();
        assert_eq!(mutator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_selection_by_default() {
        let mutator = Arc::new(RecordingMutator::failing(ClientError::Status(500)));
        let dashboard = start(&Settings::default(), StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("A", OrderStatus::Shipped).await.unwrap();
        dashboard.orders.settle().await;

        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Shipped");
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_mutation_reverts_when_configured() {
        let settings = Settings {
            revert_on_mutation_failure: true,
            ..Settings::default()
        };
        let mutator = Arc::new(RecordingMutator::failing(ClientError::Status(500)));
        let dashboard = start(&settings, StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("A", OrderStatus::Shipped).await.unwrap();
        dashboard.orders.set_status("B", OrderStatus::Delivered).await.unwrap();
        dashboard.orders.settle().await;

        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Processing");
        assert_eq!(dashboard.orders.displayed_status("B").await.unwrap(), STATUS_PLACEHOLDER);
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_revert_skips_newer_selection() {
        let settings = Settings {
            revert_on_mutation_failure: true,
            ..Settings::default()
        };
        let mutator = Arc::new(
            RecordingMutator::failing(ClientError::Status(500))
                .only_for(OrderStatus::Shipped)
                .gated(),
        );
        let dashboard = start(&settings, StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("A", OrderStatus::Shipped).await.unwrap();
        dashboard.orders.set_status("A", OrderStatus::Delivered).await.unwrap();
        mutator.release();
        mutator.release();
        dashboard.orders.settle().await;

        // The failed "Shipped" mutation must not roll back the newer selection.
        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Delivered");
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_two_rejected_edits_roll_back_to_fetched_status() {
        let settings = Settings {
            revert_on_mutation_failure: true,
            ..Settings::default()
        };
        let mutator = Arc::new(RecordingMutator::failing(ClientError::Status(500)).gated());
        let dashboard = start(&settings, StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("A", OrderStatus::Shipped).await.unwrap();
        dashboard.orders.set_status("A", OrderStatus::Delivered).await.unwrap();
        mutator.release();
        mutator.release();
        dashboard.orders.settle().await;

        // Neither rejected value may stay on screen, whichever failure lands first.
        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Processing");
        assert_eq!(mutator.calls().len(), 2);
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rollback_keeps_last_accepted_status() {
        let settings = Settings {
            revert_on_mutation_failure: true,
            ..Settings::default()
        };
        let mutator = Arc::new(RecordingMutator::failing(ClientError::Status(500)).only_for(OrderStatus::Delivered));
        let dashboard = start(&settings, StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        dashboard.orders.set_status("A", OrderStatus::Shipped).await.unwrap();
        dashboard.orders.settle().await;
        dashboard.orders.set_status("A", OrderStatus::Delivered).await.unwrap();
        dashboard.orders.settle().await;

        assert_eq!(dashboard.orders.displayed_status("A").await.unwrap(), "Shipped");
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_order_sends_no_mutation() {
        let mutator = Arc::new(RecordingMutator::default());
        let dashboard = start(&Settings::default(), StaticDataSource::orders(two_orders()), mutator.clone());
        dashboard.orders.load().await.unwrap();

        let result = dashboard.orders.set_status("Z", OrderStatus::Shipped).await;
        assert_eq!(result, Err(ViewError::UnknownOrder("Z".into())));

        dashboard.shutdown().await.unwrap();
        assert!(mutator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_raw_message() {
        let source = StaticDataSource::failing(ClientError::GraphQl("Not authorised".into()));
        let dashboard = start(&Settings::default(), source, Arc::new(RecordingMutator::default()));

        dashboard.orders.load().await.unwrap();
        dashboard.customers.load().await.unwrap();

        let orders = dashboard.orders.render().await.unwrap();
        assert_eq!(orders.state, PageState::Failed("Not authorised".into()));
        assert!(orders.rows().is_empty());
        let customers = dashboard.customers.render().await.unwrap();
        assert_eq!(customers.state, PageState::Failed("Not authorised".into()));

        assert_eq!(
            dashboard.orders.set_status("A", OrderStatus::Shipped).await,
            Err(ViewError::NotLoaded)
        );
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_customers_paging() {
        let customers: Vec<_> = (0..12)
            .map(|i| {
                CustomerRecord::new(format!("u{i}"), format!("user{i}"), format!("user{i}@example.com"))
                    .registered_at(RawTimestamp::Number(0.0))
            })
            .chain(std::iter::once(
                CustomerRecord::new("bad", "bad", "bad@example.com").registered_at(RawTimestamp::Text("abc".into())),
            ))
            .collect();
        let dashboard = start(
            &Settings::default(),
            StaticDataSource::customers(customers),
            Arc::new(RecordingMutator::default()),
        );
        dashboard.customers.load().await.unwrap();

        let first = dashboard.customers.render().await.unwrap();
        assert_eq!(first.rows().len(), 10);
        assert_eq!(first.rows()[0].display_number, 1);
        assert_eq!(first.page_count(), 2);

        dashboard.customers.set_page(2).await.unwrap();
        let second = dashboard.customers.render().await.unwrap();
        let numbers: Vec<_> = second.rows().iter().map(|row| row.display_number).collect();
        assert_eq!(numbers, [11, 12, 13]);
        assert_eq!(second.rows()[0].username, "user10");
        assert_eq!(second.rows()[0].registration_date, "1970-01-01");
        assert_eq!(second.rows()[2].registration_date, INVALID_DATE);

        assert_eq!(dashboard.customers.set_page(0).await, Err(ViewError::InvalidPage(0)));
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_orders_page_window_follows_page_size() {
        let settings = Settings {
            page_size: 1,
            ..Settings::default()
        };
        let dashboard = start(
            &settings,
            StaticDataSource::orders(two_orders()),
            Arc::new(RecordingMutator::default()),
        );
        dashboard.orders.load().await.unwrap();
        dashboard.orders.set_page(2).await.unwrap();

        let page = dashboard.orders.render().await.unwrap();
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.rows()[0].order_new_id, "A");
        assert_eq!(page.rows()[0].display_number, 2);
        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_views_are_gone_after_shutdown() {
        let dashboard = start(
            &Settings::default(),
            StaticDataSource::orders(two_orders()),
            Arc::new(RecordingMutator::default()),
        );
        let orders = dashboard.orders.clone();
        dashboard.shutdown().await.unwrap();

        assert!(matches!(orders.load().await, Err(ViewError::ActorCommunicationError(_))));
    }
}
