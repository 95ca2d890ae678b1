//! Boundary adapters over a fetch task.
//!
//! A fetch is written once, as a [`Task`] resolving to a success [`Action`]
//! or an [`ActionError`]. The caller picks how to consume it:
//!
//! - **push**: wrap it in a [`Thunk`] and hand it a [`Dispatch`] sink. The
//!   waiting message goes out first, then exactly one terminal message.
//! - **pull**: [`settle`] it and await a `Result<Action, Action>`, where the
//!   error side is always an [`Action::Error`].

use super::{Action, ActionError, WaitingFor};
use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A boxed fetch, ready to be polled.
pub type Task = Pin<Box<dyn Future<Output = Result<Action, ActionError>> + Send + 'static>>;

/// Anything that accepts Action Results.
pub trait Dispatch: Send + Sync + 'static {
    fn dispatch(&self, action: Action);
}

impl Dispatch for mpsc::UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        if self.send(action).is_err() {
            debug!("Dispatch sink closed, message dropped");
        }
    }
}

/// A dispatch-mode fetch.
#[must_use = "a thunk does nothing until it is run or spawned"]
pub struct Thunk {
    waiting: WaitingFor,
    task: Task,
}

impl Thunk {
    pub fn new(waiting: WaitingFor, task: Task) -> Self {
        Self { waiting, task }
    }

    /// The waiting message this thunk emits first.
    pub fn waiting(&self) -> WaitingFor {
        self.waiting
    }

    /// Emits the waiting message before returning, then runs the fetch on
    /// its own task, which emits the terminal message.
    ///
    /// Aborting the returned handle drops the fetch and its terminal message.
    pub fn spawn<D: Dispatch>(self, dispatcher: D) -> JoinHandle<()> {
        dispatcher.dispatch(Action::Waiting(self.waiting));
        let task = self.task;
        tokio::spawn(async move {
            dispatcher.dispatch(into_action(task.await));
        })
    }

    /// Same contract as [`Thunk::spawn`], on the caller's task.
    pub async fn run<D: Dispatch + ?Sized>(self, dispatcher: &D) {
        dispatcher.dispatch(Action::Waiting(self.waiting));
        dispatcher.dispatch(into_action(self.task.await));
    }
}

/// Awaits a promise-mode fetch. Rejections carry an [`Action::Error`].
pub async fn settle(task: Task) -> Result<Action, Action> {
    match into_action(task.await) {
        Action::Error(e) => Err(Action::Error(e)),
        action => Ok(action),
    }
}

fn into_action(result: Result<Action, ActionError>) -> Action {
    match result {
        Ok(action) => {
            debug!(kind = action.kind(), "Fetch ok");
            action
        }
        Err(e) => {
            warn!(error = %e, "Fetch failed");
            Action::Error(e)
        }
    }
}
