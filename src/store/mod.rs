//! # State Container
//!
//! A single task owns the [`BlogState`] and applies Action Results one at a
//! time through [`reduce`]. Everything else talks to it through a
//! [`StoreHandle`]:
//!
//! - push: [`StoreHandle::dispatcher`] feeds actions in, and
//!   [`StoreHandle::subscribe`] streams every new state out.
//! - pull: [`StoreHandle::snapshot`] returns the state after every action
//!   dispatched so far has been applied.
//!
//! The store is closed when every handle and dispatcher is dropped. Actions
//! dispatched after that (say, by a fetch that outlived its view) are dropped.

mod error;
mod state;

pub use error::*;
pub use state::*;

use crate::actions::{Action, Dispatch};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

enum StoreRequest {
    Dispatch(Action),
    Snapshot { respond_to: oneshot::Sender<BlogState> },
}

/// The task side of the store. Create with [`StoreActor::new`], then drive
/// it with [`StoreActor::run`].
pub struct StoreActor {
    /// Incoming dispatches and snapshot requests
    receiver: mpsc::UnboundedReceiver<StoreRequest>,
    /// Current state, replaced on every reduce
    state: BlogState,
    /// Broadcasts each new state to subscribers
    publisher: watch::Sender<BlogState>,
}

impl StoreActor {
    pub fn new() -> (Self, StoreHandle) {
        Self::with_state(BlogState::default())
    }

    /// Starts from `state` instead of an empty store (e.g. server-rendered data).
    pub fn with_state(state: BlogState) -> (Self, StoreHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (publisher, updates) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        (actor, StoreHandle { sender, updates })
    }

    /// Processes requests until every sender is gone.
    pub async fn run(mut self) {
        info!("Store started");
        let mut applied = 0u64;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch(action) => {
                    debug!(kind = action.kind(), "Reduce");
                    let state = std::mem::take(&mut self.state);
                    self.state = reduce(state, action);
                    self.publisher.send_replace(self.state.clone());
                    applied += 1;
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(applied, "Store shutdown");
    }
}

/// Feeds actions into the store. Cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<StoreRequest>,
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, action: Action) {
        let kind = action.kind();
        if self.sender.send(StoreRequest::Dispatch(action)).is_err() {
            debug!(kind, "Store closed, action dropped");
        }
    }
}

/// Client side of the store. Cheap to clone; the store keeps running while
/// any handle or dispatcher is alive.
#[derive(Clone)]
pub struct StoreHandle {
    /// Request channel into the store task
    sender: mpsc::UnboundedSender<StoreRequest>,
    /// Latest published state
    updates: watch::Receiver<BlogState>,
}

impl StoreHandle {
    /// A dispatcher to hand to [`Thunk::spawn`](crate::actions::Thunk::spawn)
    /// or [`Thunk::run`](crate::actions::Thunk::run).
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Dispatches one action, typically a synchronous one such as
    /// [`clear_posts`](crate::actions::clear_posts).
    pub fn dispatch(&self, action: Action) {
        self.dispatcher().dispatch(action);
    }

    /// The state once everything dispatched before this call is applied.
    pub async fn snapshot(&self) -> Result<BlogState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// A receiver that observes every state the store publishes.
    pub fn subscribe(&self) -> watch::Receiver<BlogState> {
        self.updates.clone()
    }
}
