mod main_config;
mod snake_config;
mod ui_config;

pub use main_config::{ClientConfigManager, Config, get_config_manager};
pub use snake_config::SnakeConfig;
pub use ui_config::UiConfig;
