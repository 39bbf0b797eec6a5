use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::app_system::ViewError;

// =============================================================================
// 1. THE ABSTRACTION (View state with Actions and Snapshots)
// =============================================================================

/// Trait for page-local state owned by a single [`ViewActor`].
///
/// All writes go through `handle_action` on the actor task, so the state never
/// has more than one writer even when the runtime is multi-threaded.
pub trait ViewState: Send + 'static {
    /// Name used in log spans.
    const NAME: &'static str;

    type Action: Send + Debug;
    type ActionResult: Send + Debug;
    type Snapshot: Clone + Send + Debug;

    /// Copy of the state for rendering.
    fn snapshot(&self) -> Self::Snapshot;

    /// Apply one event to the state.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, ViewError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, ViewError>>;

#[derive(Debug)]
pub enum ViewRequest<S: ViewState> {
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ViewActor<S: ViewState> {
    receiver: mpsc::Receiver<ViewRequest<S>>,
    state: S,
}

impl<S: ViewState> ViewActor<S> {
    pub fn new(buffer_size: usize, state: S) -> (Self, ViewClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, ViewClient::new(sender))
    }

    #[tracing::instrument(name = "view", fields(view = S::NAME), skip(self))]
    pub async fn run(mut self) {
        info!("View starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ViewRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                ViewRequest::Action { action, respond_to } => {
                    debug!(?action, "Handling action");
                    let result = self.state.handle_action(action);
                    // The caller may have gone away; nothing to do then.
                    let _ = respond_to.send(result);
                }
                ViewRequest::Shutdown => {
                    info!("View shutting down");
                    break;
                }
            }
        }
        info!("View stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ViewClient<S: ViewState> {
    sender: mpsc::Sender<ViewRequest<S>>,
}

impl<S: ViewState> Clone for ViewClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ViewState> ViewClient<S> {
    pub fn new(sender: mpsc::Sender<ViewRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<S::Snapshot, ViewError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ViewError::ActorCommunicationError("View closed".to_string()))?;
        response
            .await
            .map_err(|_| ViewError::ActorCommunicationError("View dropped".to_string()))?
    }

    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, ViewError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Action { action, respond_to })
            .await
            .map_err(|_| ViewError::ActorCommunicationError("View closed".to_string()))?;
        response
            .await
            .map_err(|_| ViewError::ActorCommunicationError("View dropped".to_string()))?
    }

    pub async fn shutdown(&self) -> Result<(), ViewError> {
        self.sender
            .send(ViewRequest::Shutdown)
            .await
            .map_err(|_| ViewError::ActorCommunicationError("View closed".to_string()))
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
