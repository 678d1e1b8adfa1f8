use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    DEFAULT_GRID_SIZE, DEFAULT_SCORE_PER_FOOD, DEFAULT_START, DEFAULT_TICK_INTERVAL, Point,
    SnakeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub grid_size: u32,
    pub tick_interval_ms: u32,
    pub score_per_food: u32,
    pub start_x: u32,
    pub start_y: u32,
}

impl SnakeConfig {
    pub fn to_session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            grid_size: self.grid_size as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
            score_per_food: self.score_per_food,
            start: Point::new(self.start_x as usize, self.start_y as usize),
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 5 {
            return Err("grid_size must be at least 5".to_string());
        }
        if self.grid_size > 100 {
            return Err("grid_size must not exceed 100".to_string());
        }
        if self.start_x >= self.grid_size || self.start_y >= self.grid_size {
            return Err("start position must be inside the grid".to_string());
        }
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            start_x: DEFAULT_START.x as u32,
            start_y: DEFAULT_START.y as u32,
        }
    }
}
