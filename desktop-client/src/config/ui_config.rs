use common::config::Validate;
use common::games::snake::input::DEFAULT_SWIPE_MIN_DISTANCE;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// Pixels per grid cell.
    pub cell_size: f32,
    pub swipe_min_distance: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), String> {
        if !(4.0..=64.0).contains(&self.cell_size) {
            return Err("cell_size must be between 4 and 64".to_string());
        }
        if !self.swipe_min_distance.is_finite() || self.swipe_min_distance < 0.0 {
            return Err("swipe_min_distance must be a non-negative number".to_string());
        }
        if self.window_width < 200.0 || self.window_height < 200.0 {
            return Err("window must be at least 200x200".to_string());
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
            window_width: 460.0,
            window_height: 620.0,
        }
    }
}
