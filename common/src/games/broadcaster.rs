use std::future::Future;

use super::snake::SnakeSnapshot;

/// Receives what a running session publishes. Implemented by each host.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    /// Called once, after the session has stopped its timer.
    fn broadcast_exit(&self, final_snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;
}
