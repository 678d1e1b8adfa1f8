use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::games::snake::{SnakeCommand, SnakeSnapshot};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    LaunchSnake,
    Snake(SnakeCommand),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Snake { snapshot: Option<SnakeSnapshot> },
}

/// State shared between the UI thread and the game runtime.
#[derive(Clone)]
pub struct SharedState {
    screen: Arc<Mutex<Screen>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::Home)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_screen(&self, screen: Screen) {
        *lock(&self.screen) = screen;
        self.request_repaint();
    }

    pub fn get_screen(&self) -> Screen {
        lock(&self.screen).clone()
    }

    /// Stores a snapshot if the game screen is still mounted.
    pub fn update_snapshot(&self, new_snapshot: SnakeSnapshot) {
        {
            let mut screen = lock(&self.screen);
            let Screen::Snake { snapshot } = &mut *screen else {
                return;
            };
            *snapshot = Some(new_snapshot);
        }
        self.request_repaint();
    }

    pub fn set_error(&self, error: String) {
        *lock(&self.error) = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn clear_error(&self) {
        *lock(&self.error) = None;
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
