//! Demo entry point: loads the home page data the way the home view does and
//! logs what arrived.

use portland_pour::actions::{Action, Dispatch};
use portland_pour::config::BlogConfig;
use portland_pour::endpoint::Query;
use portland_pour::runtime::{setup_tracing, BlogSystem};
use portland_pour::site::{HomeLayout, Pager};
use tracing::{error, info, Instrument};

const CONFIG_ENV: &str = "PORTLAND_POUR_CONFIG";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => BlogConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => BlogConfig::default(),
    };

    let system = BlogSystem::new(&config).map_err(|e| e.to_string())?;
    let dispatcher = system.store.dispatcher();

    let span = tracing::info_span!("home_view");
    async {
        info!("Loading home page");
        let handles = vec![
            system.actions.get_users(Query::new()).spawn(dispatcher.clone()),
            system.actions.get_featured_posts(Query::new()).spawn(dispatcher.clone()),
            system.actions.get_posts(Query::new()).spawn(dispatcher.clone()),
        ];
        for handle in handles {
            if let Err(e) = handle.await {
                error!("Fetch task failed: {:?}", e);
            }
        }
    }
    .instrument(span)
    .await;

    let state = system.store.snapshot().await.map_err(|e| e.to_string())?;
    if let Some(e) = &state.error {
        error!(error = %e, "Home page incomplete");
    }

    let layout = HomeLayout::compose(&state.posts.posts);
    info!(
        users = state.users.len(),
        featured = state.featured_posts.posts.len(),
        hero = layout.hero.len(),
        first_block = layout.first_block.len(),
        second_block = layout.second_block.len(),
        "Home page loaded"
    );
    if let Some(pagination) = state.posts.pagination() {
        let pager = Pager::from(pagination);
        info!(caption = %pager.caption, next = ?pager.next_url, "Pager");
    }

    // Pull mode: the features listing awaits its result directly.
    match system.actions.fetch_features(Query::new().with("page", 1)).await {
        Ok(action) => {
            info!(kind = action.kind(), "Features loaded");
            dispatcher.dispatch(action);
        }
        Err(Action::Error(e)) => error!(error = %e, "Features failed"),
        Err(other) => error!(kind = other.kind(), "Unexpected rejection"),
    }

    drop(dispatcher);
    system.shutdown().await?;
    info!("Done");
    Ok(())
}
