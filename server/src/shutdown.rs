//! Bounded connection draining on shutdown.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How long open connections may keep the server alive once shutdown starts.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Drives `server` to completion, but gives up `grace` after `shutdown` fires.
///
/// Returns `None` when the deadline wins; the caller then exits without
/// waiting for the remaining connections.
pub async fn with_drain_deadline<F>(
    server: F,
    shutdown: CancellationToken,
    grace: Duration,
) -> Option<F::Output>
where
    F: Future,
{
    let deadline = async {
        shutdown.cancelled().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        output = server => Some(output),
        _ = deadline => None,
    }
}
