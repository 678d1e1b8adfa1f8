mod game_state;
pub mod input;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::{MAX_FOOD_ATTEMPTS, SnakeGameState, SnakeSnapshot};
pub use input::{SwipeClassifier, parse_key_token};
pub use session::{SnakeCommand, SnakeSession, SnakeSessionHandle};
pub use settings::{
    DEFAULT_GRID_SIZE, DEFAULT_SCORE_PER_FOOD, DEFAULT_START, DEFAULT_TICK_INTERVAL, SnakeSessionSettings,
};
pub use snake::Snake;
pub use types::{Direction, GameEndReason, GameStatus, Point, TickOutcome};
