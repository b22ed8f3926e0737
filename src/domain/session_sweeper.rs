use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::SessionRepository;

/// Periodically removes expired admin sessions.
///
/// Runs until the task is aborted. A failed sweep is logged and retried on the
/// next tick.
pub async fn run_session_sweeper<S: SessionRepository>(sessions: Arc<S>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        sweep_once(sessions.as_ref()).await;
    }
}

/// Runs one sweep and returns the number of removed sessions.
pub async fn sweep_once<S: SessionRepository + ?Sized>(sessions: &S) -> u64 {
    match sessions.delete_expired().await {
        Ok(0) => 0,
        Ok(removed) => {
            metrics::counter!("admin_sessions_swept_total").increment(removed);
            tracing::info!(removed, "Expired admin sessions removed");
            removed
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session sweep failed");
            0
        }
    }
}
