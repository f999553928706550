//! Periodic sweep of expired refresh token records
//!
//! Expired rows are already invisible to active lookups; the sweep only
//! reclaims storage, so it runs decoupled from the request path and a failed
//! pass is logged and retried on the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::repositories::{TokenRepository, UserRepository};

use super::service::TokenService;

/// Spawns a background task that purges expired refresh tokens on a timer
///
/// The first pass runs immediately, then once per `period`.
pub fn spawn_purge_task<T, U>(
    service: Arc<TokenService<T, U>>,
    period: Duration,
) -> JoinHandle<()>
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match service.purge_expired_tokens().await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "purged expired refresh tokens"),
                Err(e) => tracing::warn!(error = %e, "expired token sweep failed"),
            }
        }
    })
}
