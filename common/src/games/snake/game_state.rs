use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, GameEndReason, GameStatus, Point, TickOutcome};

/// Random samples tried before food placement falls back to scanning the free cells.
pub const MAX_FOOD_ATTEMPTS: usize = 100;

/// Read-only copy of the game handed to the host after every change.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<GameEndReason>,
    pub direction: Direction,
    pub grid_size: usize,
    pub tick: u64,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    score: u32,
    ticks: u64,
    grid_size: usize,
    start: Point,
    score_per_food: u32,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            snake: Snake::new(settings.start),
            food: None,
            direction: Direction::Right,
            pending_direction: None,
            status: GameStatus::Running,
            end_reason: None,
            score: 0,
            ticks: 0,
            grid_size: settings.grid_size,
            start: settings.start,
            score_per_food: settings.score_per_food,
        };
        state.respawn_food(rng);
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction the next tick will move in.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    /// Accepts a turn unless the game isn't running or the turn is the exact
    /// opposite of the current direction. The last accepted turn before a tick wins.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status != GameStatus::Running || requested.is_opposite(&self.direction()) {
            return false;
        }
        self.pending_direction = Some(requested);
        true
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.ticks += 1;

        let next_head = match self.next_head() {
            Ok(point) => point,
            Err(reason) => {
                self.finish(reason);
                return TickOutcome::GameOver(reason);
            }
        };

        let ate_food = self.food == Some(next_head);
        self.snake.advance(next_head, ate_food);

        if !ate_food {
            return TickOutcome::Moved;
        }

        self.score += self.score_per_food;
        log!(
            "Ate food at ({}, {}). Score: {}",
            next_head.x,
            next_head.y,
            self.score
        );

        self.respawn_food(rng);
        match self.end_reason {
            Some(reason) => TickOutcome::GameOver(reason),
            None => TickOutcome::AteFood,
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.start);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.status = GameStatus::Running;
        self.end_reason = None;
        self.score = 0;
        self.ticks = 0;
        self.respawn_food(rng);
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            direction: self.direction(),
            grid_size: self.grid_size,
            tick: self.ticks,
        }
    }

    fn next_head(&self) -> Result<Point, GameEndReason> {
        let next_head = self
            .snake
            .head()
            .step(self.direction, self.grid_size)
            .ok_or(GameEndReason::WallCollision)?;

        // The tail still occupies its cell during this check.
        if self.snake.contains(&next_head) {
            return Err(GameEndReason::SelfCollision);
        }

        Ok(next_head)
    }

    fn finish(&mut self, reason: GameEndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        log!("Game over: {:?}. Final score: {}", reason, self.score);
    }

    fn respawn_food(&mut self, rng: &mut SessionRng) {
        self.food = self.spawn_food(rng);
        if self.food.is_none() {
            self.finish(GameEndReason::BoardFilled);
        }
    }

    fn spawn_food(&self, rng: &mut SessionRng) -> Option<Point> {
        if self.snake.len() >= self.grid_size * self.grid_size {
            return None;
        }

        for _ in 0..MAX_FOOD_ATTEMPTS {
            let pos = Point::new(
                rng.random_range(0..self.grid_size),
                rng.random_range(0..self.grid_size),
            );
            if !self.snake.contains(&pos) {
                return Some(pos);
            }
        }

        let free_cells: Vec<Point> = (0..self.grid_size)
            .flat_map(|y| (0..self.grid_size).map(move |x| Point::new(x, y)))
            .filter(|pos| !self.snake.contains(pos))
            .collect();
        if free_cells.is_empty() {
            return None;
        }
        Some(free_cells[rng.random_range(0..free_cells.len())])
    }
}
