use common::games::GameBroadcaster;
use common::games::snake::SnakeSnapshot;

use crate::state::{Screen, SharedState};

/// Publishes session snapshots straight into the UI's shared state.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_exit(&self, _final_snapshot: SnakeSnapshot) {
        self.shared_state.set_screen(Screen::Home);
    }
}
