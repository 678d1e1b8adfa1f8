use common::games::snake::SnakeSessionSettings;
use common::log;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, SharedState};

use super::snake_runner::{RunnerExit, run_snake_game};

/// Drives the home screen: waits for an app launch and runs it until the player leaves.
pub async fn local_game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    settings: SnakeSessionSettings,
    seed: Option<u64>,
) {
    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::LaunchSnake => {
                let exit = run_snake_game(&shared_state, &mut command_rx, &settings, seed).await;
                if exit == RunnerExit::Shutdown {
                    break;
                }
            }
            ClientCommand::Snake(_) => {}
            ClientCommand::Shutdown => break,
        }
    }

    log!("Local game task stopped");
}
