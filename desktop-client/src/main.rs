mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

pub use command_sender::CommandSender;
use config::{ClientConfigManager, Config, get_config_manager};
use offline::local_game_task;
use state::SharedState;
use ui::PhoneApp;

#[derive(Parser)]
#[command(name = "pocket_snake")]
struct Args {
    /// YAML config file. Defaults to pocket_snake_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(config_manager: &ClientConfigManager) -> Config {
    match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = load_config(&config_manager);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Runtime::new()?;
    let game_task = runtime.spawn(local_game_task(
        shared_state.clone(),
        command_rx,
        config.snake.to_session_settings(),
        args.seed,
    ));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_title("Pocket Snake"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    let app_sender = command_sender.clone();
    let ui_config = config.ui.clone();
    let run_result = eframe::run_native(
        "Pocket Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(PhoneApp::new(shared_state, app_sender, &ui_config)))),
    );

    command_sender.send(state::ClientCommand::Shutdown);
    if let Err(e) = runtime.block_on(game_task) {
        log!("Game task ended abnormally: {}", e);
    }

    run_result?;
    Ok(())
}
