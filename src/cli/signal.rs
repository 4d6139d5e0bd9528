use crate::ProxmoxError;
use log::{error, warn};
use std::future::Future;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Returns a token that is cancelled when the process receives Ctrl-C.
///
/// Must be called from within a tokio runtime.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                warn!("interrupted, stopping");
                trigger.cancel();
            }
            Err(e) => error!("unable to listen for Ctrl-C: {}", e),
        }
    });
    token
}

/// Drives `task` to completion unless `cancel` fires first, in which case the
/// task is dropped and `ProxmoxError::Cancelled` is returned.
pub async fn run_until_cancelled<F, T, E>(cancel: &CancellationToken, task: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<ProxmoxError>,
{
    tokio::select! {
        result = task => result,
        _ = cancel.cancelled() => Err(ProxmoxError::Cancelled.into()),
    }
}
