use common::games::snake::{SnakeCommand, SnakeSession, SnakeSessionSettings, SnakeSnapshot};
use common::log;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, Screen, SharedState};

use super::LocalBroadcaster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerExit {
    /// The player left the game; the home screen is shown again.
    BackToHome,
    Shutdown,
}

/// Mounts a snake session and forwards player commands to it until the player exits.
pub async fn run_snake_game(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    settings: &SnakeSessionSettings,
    seed: Option<u64>,
) -> RunnerExit {
    let seed = seed.unwrap_or_else(rand::random);
    shared_state.set_screen(Screen::Snake { snapshot: None });

    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let handle = match SnakeSession::spawn(settings.clone(), seed, broadcaster) {
        Ok(handle) => handle,
        Err(e) => {
            log!("Failed to start snake session: {}", e);
            shared_state.set_error(e);
            shared_state.set_screen(Screen::Home);
            return RunnerExit::BackToHome;
        }
    };

    let exit = loop {
        match command_rx.recv().await {
            Some(ClientCommand::Snake(SnakeCommand::Exit)) => break RunnerExit::BackToHome,
            Some(ClientCommand::Snake(command)) => handle.send(command),
            Some(ClientCommand::LaunchSnake) => {}
            Some(ClientCommand::Shutdown) | None => break RunnerExit::Shutdown,
        }
    };

    finish_session(shared_state, handle.exit().await);
    exit
}

/// A session that ended without a final snapshot never broadcast its exit,
/// so the home screen is restored here.
fn finish_session(shared_state: &SharedState, final_snapshot: Option<SnakeSnapshot>) {
    match final_snapshot {
        Some(final_snapshot) => log!(
            "Left snake game with score {} after {} ticks",
            final_snapshot.score,
            final_snapshot.tick
        ),
        None => {
            log!("Snake session ended without a final snapshot");
            shared_state.set_screen(Screen::Home);
        }
    }
}
