use common::games::snake::{
    GameEndReason, GameStatus, Point, SnakeCommand, SnakeSnapshot, SwipeClassifier, parse_key_token,
};
use eframe::egui;

use crate::CommandSender;
use crate::config::UiConfig;
use crate::state::ClientCommand;

const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1b, 0x26, 0x1b);
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x24, 0x33, 0x24);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x9c, 0xff, 0x6a);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xc0, 0x3a);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x4d, 0x4d);

/// Screen rectangle of a grid cell on a board whose top-left corner is `origin`.
pub fn cell_rect(origin: egui::Pos2, cell_size: f32, point: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + point.x as f32 * cell_size,
            origin.y + point.y as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn end_reason_text(reason: Option<GameEndReason>) -> &'static str {
    match reason {
        Some(GameEndReason::WallCollision) => "You hit the wall",
        Some(GameEndReason::SelfCollision) => "You bit yourself",
        Some(GameEndReason::BoardFilled) => "The board is full",
        None => "",
    }
}

pub struct SnakeGameUi {
    cell_size: f32,
    swipe_classifier: SwipeClassifier,
    drag_start: Option<egui::Pos2>,
}

impl SnakeGameUi {
    pub fn new(ui_config: &UiConfig) -> Self {
        Self {
            cell_size: ui_config.cell_size,
            swipe_classifier: SwipeClassifier::new(ui_config.swipe_min_distance),
            drag_start: None,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &Option<SnakeSnapshot>,
        command_sender: &CommandSender,
    ) {
        self.handle_keys(ctx, command_sender);

        let Some(snapshot) = snapshot else {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                if ui.button("⬅ Back").clicked() {
                    command_sender.send(ClientCommand::Snake(SnakeCommand::Exit));
                }
                let pause_label = if snapshot.status == GameStatus::Paused { "Resume" } else { "Pause" };
                if ui
                    .add_enabled(snapshot.status != GameStatus::Over, egui::Button::new(pause_label))
                    .clicked()
                {
                    command_sender.send(ClientCommand::Snake(SnakeCommand::TogglePause));
                }
                if ui.button("Restart").clicked() {
                    command_sender.send(ClientCommand::Snake(SnakeCommand::Reset));
                }
            });
            ui.heading(format!("Score: {}", snapshot.score));
            ui.add_space(6.0);

            self.render_board(ui, snapshot, command_sender);

            ui.add_space(6.0);
            ui.label("Arrows / WASD or swipe to turn, Space to pause, R to restart, Esc to leave");
        });
    }

    fn handle_keys(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let commands: Vec<SnakeCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => parse_key_token(key.name()),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            command_sender.send(ClientCommand::Snake(command));
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot, command_sender: &CommandSender) {
        let side = snapshot.grid_size as f32 * self.cell_size;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let rect = response.rect;

        if response.drag_started() {
            self.drag_start = response.interact_pointer_pos();
        }
        if response.drag_stopped()
            && let Some(start) = self.drag_start.take()
            && let Some(end) = response
                .interact_pointer_pos()
                .or_else(|| ui.ctx().input(|i| i.pointer.latest_pos()))
            && let Some(direction) = self.swipe_classifier.classify((start.x, start.y), (end.x, end.y))
        {
            command_sender.send(ClientCommand::Snake(SnakeCommand::Turn(direction)));
        }

        painter.rect_filled(rect, 0.0, BOARD_COLOR);
        for i in 1..snapshot.grid_size {
            let offset = i as f32 * self.cell_size;
            let stroke = egui::Stroke::new(1.0, GRID_LINE_COLOR);
            painter.line_segment(
                [egui::pos2(rect.min.x + offset, rect.min.y), egui::pos2(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.min.x, rect.min.y + offset), egui::pos2(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }

        if let Some(food) = snapshot.food {
            let food_rect = cell_rect(rect.min, self.cell_size, food);
            painter.circle_filled(food_rect.center(), self.cell_size * 0.4, FOOD_COLOR);
        }

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            let segment_rect = cell_rect(rect.min, self.cell_size, *segment).shrink(1.0);
            painter.rect_filled(segment_rect, 3.0, color);
        }

        match snapshot.status {
            GameStatus::Running => {}
            GameStatus::Paused => {
                Self::render_overlay(&painter, rect, "Paused", "Press Space to resume");
            }
            GameStatus::Over => {
                Self::render_overlay(
                    &painter,
                    rect,
                    "Game Over",
                    &format!("{}. Press R to play again", end_reason_text(snapshot.end_reason)),
                );
            }
        }
    }

    fn render_overlay(painter: &egui::Painter, rect: egui::Rect, title: &str, subtitle: &str) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
        painter.text(
            rect.center() - egui::vec2(0.0, 16.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(30.0),
            egui::Color32::WHITE,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(14.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}
