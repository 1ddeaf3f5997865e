//! Background supervision of the board store connection.
//!
//! The supervisor owns the degraded-mode lifecycle: it builds the initial
//! connection, polls it with pings, asks the store to reconnect in place when
//! a ping fails, and only tears the handle down to rebuild from scratch once
//! those attempts are exhausted.

use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::{board_store::BoardStore, storage::StorageError},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_millis(1_000);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// Keep the shared state supplied with a working board store.
///
/// `connect` builds a fresh store; it is called at startup and again whenever
/// in-place reconnection gives up on the current handle.
pub async fn run<F, Fut>(state: SharedState, mut connect: F)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn BoardStore>, StorageError>> + Send,
{
    let mut delay = INITIAL_DELAY;

    loop {
        match connect().await {
            Ok(store) => {
                state.install_board_store(store.clone()).await;
                info!("board store connected; leaving degraded mode");
                delay = INITIAL_DELAY;

                watch_store(&state, store).await;
            }
            Err(err) => {
                warn!(error = %err, "board store connection attempt failed");
            }
        }

        sleep(delay).await;
        delay = (delay * 2).min(MAX_DELAY);
    }
}

/// Poll the installed store until its pings fail and in-place reconnection is
/// exhausted; the caller then rebuilds the connection from scratch.
async fn watch_store(state: &SharedState, store: Arc<dyn BoardStore>) {
    loop {
        match store.health_check().await {
            Ok(()) => {
                if state.is_degraded().await {
                    info!("board store healthy again; leaving degraded mode");
                    state.install_board_store(store.clone()).await;
                }
                sleep(HEALTH_POLL_INTERVAL).await;
            }
            Err(err) => {
                warn!(error = %err, "board store ping failed");
                if reconnect_with_backoff(state, store.as_ref()).await {
                    state.install_board_store(store.clone()).await;
                    sleep(HEALTH_POLL_INTERVAL).await;
                } else {
                    warn!("exhausted board store reconnect attempts; rebuilding the connection");
                    return;
                }
            }
        }
    }
}

/// Ask the store to reconnect in place, backing off between attempts. The
/// first failed attempt flips the application into degraded mode.
async fn reconnect_with_backoff(state: &SharedState, store: &dyn BoardStore) -> bool {
    let mut delay = INITIAL_DELAY;

    for attempt in 0..MAX_RECONNECT_ATTEMPTS {
        match store.try_reconnect().await {
            Ok(()) => {
                info!("board store reconnected after failed ping");
                return true;
            }
            Err(err) => {
                if attempt == 0 {
                    warn!(attempt, error = %err, "board store reconnect failed; entering degraded mode");
                    state.clear_board_store().await;
                } else {
                    warn!(attempt, error = %err, "board store reconnect attempt failed");
                }
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }

    false
}
