use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::game_state::{SnakeGameState, SnakeSnapshot};
use super::settings::SnakeSessionSettings;
use super::types::{Direction, GameStatus, TickOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    Reset,
    Exit,
}

pub struct SnakeSessionHandle {
    command_tx: mpsc::UnboundedSender<SnakeCommand>,
    task: JoinHandle<SnakeSnapshot>,
}

impl SnakeSessionHandle {
    /// Queues a command. Commands sent after the session ended are dropped.
    pub fn send(&self, command: SnakeCommand) {
        let _ = self.command_tx.send(command);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the session and waits for it. Returns the final snapshot.
    pub async fn exit(self) -> Option<SnakeSnapshot> {
        let _ = self.command_tx.send(SnakeCommand::Exit);
        match self.task.await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log!("Snake session task failed: {}", e);
                None
            }
        }
    }
}

/// Owns one game and its tick timer on a single task. Timer ticks and commands
/// are applied one at a time in arrival order, so the game state needs no lock.
pub struct SnakeSession;

impl SnakeSession {
    pub fn spawn(
        settings: SnakeSessionSettings,
        seed: u64,
        broadcaster: impl GameBroadcaster,
    ) -> Result<SnakeSessionHandle, String> {
        settings.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(Self::run(settings, SessionRng::new(seed), command_rx, broadcaster));
        Ok(SnakeSessionHandle { command_tx, task })
    }

    pub async fn run(
        settings: SnakeSessionSettings,
        mut rng: SessionRng,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> SnakeSnapshot {
        let mut game_state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "Snake session started: seed {}, grid {}x{}, tick every {}ms",
            rng.seed(),
            settings.grid_size,
            settings.grid_size,
            settings.tick_interval.as_millis()
        );
        broadcaster.broadcast_state(game_state.snapshot()).await;

        let mut tick_timer = interval_at(Instant::now() + settings.tick_interval, settings.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = tick_timer.tick() => {
                    if game_state.status() != GameStatus::Running {
                        continue;
                    }
                    if game_state.tick(&mut rng) != TickOutcome::Idle {
                        broadcaster.broadcast_state(game_state.snapshot()).await;
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command.filter(|c| *c != SnakeCommand::Exit) else {
                        break;
                    };
                    if Self::apply_command(&mut game_state, &mut rng, command) {
                        broadcaster.broadcast_state(game_state.snapshot()).await;
                    }
                }
            }
        }

        drop(tick_timer);
        let final_snapshot = game_state.snapshot();
        log!(
            "Snake session exited: status {:?}, score {}",
            final_snapshot.status,
            final_snapshot.score
        );
        broadcaster.broadcast_exit(final_snapshot.clone()).await;
        final_snapshot
    }

    fn apply_command(game_state: &mut SnakeGameState, rng: &mut SessionRng, command: SnakeCommand) -> bool {
        match command {
            SnakeCommand::Turn(direction) => game_state.set_direction(direction),
            SnakeCommand::TogglePause => {
                let before = game_state.status();
                game_state.toggle_pause();
                game_state.status() != before
            }
            SnakeCommand::Reset => {
                game_state.reset(rng);
                log!("Snake game reset");
                true
            }
            SnakeCommand::Exit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::games::snake::{Point, GameEndReason};

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        states: Arc<Mutex<Vec<SnakeSnapshot>>>,
        exits: Arc<Mutex<Vec<SnakeSnapshot>>>,
    }

    impl RecordingBroadcaster {
        fn states(&self) -> Vec<SnakeSnapshot> {
            self.states.lock().unwrap().clone()
        }

        fn last_state(&self) -> SnakeSnapshot {
            self.states().last().cloned().expect("no snapshot broadcast")
        }

        fn exits(&self) -> Vec<SnakeSnapshot> {
            self.exits.lock().unwrap().clone()
        }
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
            self.states.lock().unwrap().push(snapshot);
        }

        async fn broadcast_exit(&self, final_snapshot: SnakeSnapshot) {
            self.exits.lock().unwrap().push(final_snapshot);
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_is_published() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        settle().await;

        let first = broadcaster.last_state();
        assert_eq!(first.snake, vec![Point::new(5, 5)]);
        assert_eq!(first.status, GameStatus::Running);
        assert_eq!(first.tick, 0);
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_advances_the_snake() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();

        tokio::time::sleep(Duration::from_millis(460)).await;

        let last = broadcaster.last_state();
        assert_eq!(last.tick, 3);
        assert_eq!(last.snake[0], Point::new(8, 5));
        assert_eq!(broadcaster.states().len(), 4);
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_is_applied_on_next_tick() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        settle().await;

        handle.send(SnakeCommand::Turn(Direction::Up));
        settle().await;
        assert_eq!(broadcaster.last_state().direction, Direction::Up);
        assert_eq!(broadcaster.last_state().snake, vec![Point::new(5, 5)]);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(broadcaster.last_state().snake[0], Point::new(5, 4));
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reversal_is_not_published() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        settle().await;

        handle.send(SnakeCommand::Turn(Direction::Left));
        settle().await;
        assert_eq!(broadcaster.states().len(), 1);
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_progress() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        settle().await;

        handle.send(SnakeCommand::TogglePause);
        tokio::time::sleep(Duration::from_secs(2)).await;

        let last = broadcaster.last_state();
        assert_eq!(last.status, GameStatus::Paused);
        assert_eq!(last.tick, 0);
        assert_eq!(broadcaster.states().len(), 2);

        handle.send(SnakeCommand::TogglePause);
        tokio::time::sleep(Duration::from_millis(160)).await;
        assert_eq!(broadcaster.last_state().status, GameStatus::Running);
        assert_eq!(broadcaster.last_state().tick, 1);
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_stops_updates_until_reset() {
        let broadcaster = RecordingBroadcaster::default();
        let settings = SnakeSessionSettings {
            start: Point::new(18, 5),
            ..SnakeSessionSettings::default()
        };
        let handle = SnakeSession::spawn(settings, 9, broadcaster.clone()).unwrap();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let over = broadcaster.last_state();
        assert_eq!(over.status, GameStatus::Over);
        assert_eq!(over.end_reason, Some(GameEndReason::WallCollision));
        assert_eq!(over.tick, 2);
        let published = broadcaster.states().len();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(broadcaster.states().len(), published);
        assert!(!handle.is_finished());

        handle.send(SnakeCommand::Reset);
        settle().await;
        let reset = broadcaster.last_state();
        assert_eq!(reset.status, GameStatus::Running);
        assert_eq!(reset.snake, vec![Point::new(18, 5)]);
        assert_eq!(reset.score, 0);
        handle.exit().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_stops_timer_and_reports_final_snapshot() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        tokio::time::sleep(Duration::from_millis(310)).await;

        let final_snapshot = handle.exit().await.expect("session should finish cleanly");
        assert_eq!(final_snapshot.tick, 2);
        assert_eq!(broadcaster.exits(), vec![final_snapshot]);

        let published = broadcaster.states().len();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(broadcaster.states().len(), published);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_ends_session() {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::spawn(SnakeSessionSettings::default(), 1, broadcaster.clone()).unwrap();
        settle().await;

        drop(handle);
        settle().await;
        assert_eq!(broadcaster.exits().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_settings_are_rejected() {
        let settings = SnakeSessionSettings {
            grid_size: 2,
            ..SnakeSessionSettings::default()
        };
        assert!(SnakeSession::spawn(settings, 1, RecordingBroadcaster::default()).is_err());
    }
}
