mod game;
mod home;

use std::time::Duration;

use eframe::egui;

use crate::CommandSender;
use crate::config::UiConfig;
use crate::state::{ClientCommand, Screen, SharedState};
use game::SnakeGameUi;

pub struct PhoneApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    snake_ui: SnakeGameUi,
    shutdown_sent: bool,
}

impl PhoneApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, ui_config: &UiConfig) -> Self {
        Self {
            shared_state,
            command_sender,
            snake_ui: SnakeGameUi::new(ui_config),
            shutdown_sent: false,
        }
    }

    fn render_error(&self, ctx: &egui::Context) {
        let Some(error) = self.shared_state.get_error() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&error);
                if ui.button("OK").clicked() {
                    self.shared_state.clear_error();
                }
            });
    }
}

impl eframe::App for PhoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_sent {
            self.command_sender.send(ClientCommand::Shutdown);
            self.shutdown_sent = true;
        }

        self.render_error(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            home::render_status_bar(ui);
            match self.shared_state.get_screen() {
                Screen::Home => home::render_home(ui, &self.command_sender),
                Screen::Snake { snapshot } => {
                    self.snake_ui.render_game(ui, ctx, &snapshot, &self.command_sender);
                }
            }
        });

        // Keeps the status bar clock current.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
