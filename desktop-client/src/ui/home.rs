use chrono::{DateTime, Local};
use eframe::egui;

use crate::CommandSender;
use crate::state::ClientCommand;

const ICON_SIZE: f32 = 72.0;

struct AppIcon {
    glyph: &'static str,
    label: &'static str,
    command: ClientCommand,
}

const APPS: &[AppIcon] = &[AppIcon {
    glyph: "🐍",
    label: "Snake",
    command: ClientCommand::LaunchSnake,
}];

pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

pub fn render_status_bar(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format_clock(Local::now())).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label("🔋 100%");
        });
    });
    ui.separator();
}

pub fn render_home(ui: &mut egui::Ui, command_sender: &CommandSender) {
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for app in APPS {
            ui.vertical(|ui| {
                let button = egui::Button::new(egui::RichText::new(app.glyph).size(36.0));
                if ui.add_sized([ICON_SIZE, ICON_SIZE], button).clicked() {
                    command_sender.send(app.command);
                }
                ui.label(app.label);
            });
            ui.add_space(12.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_is_zero_padded() {
        let now = Local.with_ymd_and_hms(2024, 1, 2, 7, 5, 59).unwrap();
        assert_eq!(format_clock(now), "07:05");
    }
}
