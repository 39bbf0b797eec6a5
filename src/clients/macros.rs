/// Fetch and paging methods shared by the view clients.
///
/// The view's action enum must have `BeginFetch`, `CompleteFetch` and `SetPage`
/// variants, answered by `FetchStarted`, `FetchCompleted` and `PageChanged`.
#[macro_export]
macro_rules! impl_view_client_methods {
    ($client_name:ident, $view:ty, $action:ident, $result:ident, $record:ty) => {
        #[allow(dead_code)]
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ViewClient<$view>) -> Self {
                Self { inner }
            }

            #[tracing::instrument(skip(self))]
            pub async fn snapshot(
                &self,
            ) -> Result<<$view as $crate::actor_framework::ViewState>::Snapshot, $crate::app_system::ViewError> {
                tracing::trace!("Sending request");
                self.inner.snapshot().await
            }

            #[tracing::instrument(skip(self))]
            pub async fn begin_fetch(&self) -> Result<u64, $crate::app_system::ViewError> {
                tracing::debug!("Sending request");
                match self.inner.perform_action($action::BeginFetch).await? {
                    $result::FetchStarted(generation) => Ok(generation),
                    other => Err($crate::app_system::ViewError::ActorCommunicationError(format!(
                        "Unexpected result: {:?}",
                        other
                    ))),
                }
            }

            #[tracing::instrument(skip(self, outcome))]
            pub async fn complete_fetch(
                &self,
                generation: u64,
                outcome: Result<Vec<$record>, String>,
            ) -> Result<bool, $crate::app_system::ViewError> {
                tracing::debug!("Sending request");
                match self
                    .inner
                    .perform_action($action::CompleteFetch { generation, outcome })
                    .await?
                {
                    $result::FetchCompleted(applied) => Ok(applied),
                    other => Err($crate::app_system::ViewError::ActorCommunicationError(format!(
                        "Unexpected result: {:?}",
                        other
                    ))),
                }
            }

            #[tracing::instrument(skip(self))]
            pub async fn set_page(&self, page: u32) -> Result<u32, $crate::app_system::ViewError> {
                tracing::debug!("Sending request");
                match self.inner.perform_action($action::SetPage(page)).await? {
                    $result::PageChanged(page) => Ok(page),
                    other => Err($crate::app_system::ViewError::ActorCommunicationError(format!(
                        "Unexpected result: {:?}",
                        other
                    ))),
                }
            }

            #[tracing::instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), $crate::app_system::ViewError> {
                tracing::debug!("Sending request");
                self.inner.shutdown().await
            }
        }
    };
}
