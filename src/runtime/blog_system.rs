use crate::actions::BlogActions;
use crate::config::BlogConfig;
use crate::http::{HttpClient, HttpError, ReqwestClient};
use crate::store::{StoreActor, StoreHandle};
use std::sync::Arc;
use tracing::{error, info};

/// The running blog client: an action layer wired to a live store.
///
/// `BlogSystem` is responsible for:
/// - **Wiring**: building the HTTP client and endpoints from one [`BlogConfig`]
/// - **Lifecycle**: spawning the store task and waiting for it on shutdown
///
/// # Example
///
/// ```ignore
/// let system = BlogSystem::new(&config)?;
///
/// system.actions.get_posts(Query::new()).spawn(system.store.dispatcher());
/// let state = system.store.snapshot().await?;
///
/// system.shutdown().await?;
/// ```
pub struct BlogSystem {
    /// Data needs, in dispatch and promise mode
    pub actions: BlogActions,
    /// Handle to the state container (dispatch, snapshot, subscribe)
    pub store: StoreHandle,
    /// Store task, awaited on shutdown
    handle: tokio::task::JoinHandle<()>,
}

impl BlogSystem {
    /// Builds a reqwest-backed system. Must be called inside a tokio runtime.
    pub fn new(config: &BlogConfig) -> Result<Self, HttpError> {
        let http = ReqwestClient::from_config(&config.http)?;
        Ok(Self::with_http(Arc::new(http), config))
    }

    /// Builds a system over any [`HttpClient`].
    pub fn with_http(http: Arc<dyn HttpClient>, config: &BlogConfig) -> Self {
        // Action layer over the shared client
        let actions = BlogActions::new(http, config);

        // Store task
        let (store_actor, store) = StoreActor::new();
        let handle = tokio::spawn(store_actor.run());
        info!(host = %config.blog.host, "Blog system started");

        Self {
            actions,
            store,
            handle,
        }
    }

    /// Closes the store and waits for it to finish.
    ///
    /// Fetches still in flight hold their own dispatchers; the store drains
    /// their terminal messages before it stops.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down blog system...");

        // Step 1: Release the action layer and its HTTP client
        drop(self.actions);

        // Step 2: Drop our store handle; the task ends once the last dispatcher goes
        drop(self.store);

        // Step 3: Wait for the store to drain and stop
        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Blog system shutdown complete.");
        Ok(())
    }
}
