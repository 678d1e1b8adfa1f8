use std::time::Duration;

use super::types::Point;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const DEFAULT_SCORE_PER_FOOD: u32 = 10;
pub const DEFAULT_START: Point = Point { x: 5, y: 5 };

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub grid_size: usize,
    pub tick_interval: Duration,
    pub score_per_food: u32,
    pub start: Point,
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_size) {
            return Err("Grid size must be between 5 and 100".to_string());
        }
        if self.start.x >= self.grid_size || self.start.y >= self.grid_size {
            return Err(format!(
                "Start position ({}, {}) is outside the {}x{} grid",
                self.start.x, self.start.y, self.grid_size, self.grid_size
            ));
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(50..=5000).contains(&tick_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.score_per_food == 0 {
            return Err("Score per food must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval: DEFAULT_TICK_INTERVAL,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            start: DEFAULT_START,
        }
    }
}
