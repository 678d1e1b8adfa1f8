//! Turns raw key presses and swipe gestures into session commands.

use super::session::SnakeCommand;
use super::types::Direction;

pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = 30.0;

/// Maps a key name to a command. Matching is case-insensitive; unknown keys map to `None`.
pub fn parse_key_token(token: &str) -> Option<SnakeCommand> {
    if token == " " {
        return Some(SnakeCommand::TogglePause);
    }

    match token.trim().to_ascii_lowercase().as_str() {
        "up" | "w" | "arrowup" => Some(SnakeCommand::Turn(Direction::Up)),
        "down" | "s" | "arrowdown" => Some(SnakeCommand::Turn(Direction::Down)),
        "left" | "a" | "arrowleft" => Some(SnakeCommand::Turn(Direction::Left)),
        "right" | "d" | "arrowright" => Some(SnakeCommand::Turn(Direction::Right)),
        "space" | "p" => Some(SnakeCommand::TogglePause),
        "r" => Some(SnakeCommand::Reset),
        "escape" | "esc" | "q" => Some(SnakeCommand::Exit),
        _ => None,
    }
}

/// Classifies a drag from `start` to `end` (screen coordinates, y grows downward)
/// as a swipe in one of the four directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeClassifier {
    min_distance: f32,
}

impl SwipeClassifier {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
        }
    }

    pub fn classify(&self, start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;

        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        if dx.abs() < self.min_distance && dy.abs() < self.min_distance {
            return None;
        }

        // Ties go to the horizontal axis.
        if dx.abs() >= dy.abs() {
            Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_MIN_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keys() {
        assert_eq!(parse_key_token("ArrowUp"), Some(SnakeCommand::Turn(Direction::Up)));
        assert_eq!(parse_key_token("s"), Some(SnakeCommand::Turn(Direction::Down)));
        assert_eq!(parse_key_token("A"), Some(SnakeCommand::Turn(Direction::Left)));
        assert_eq!(parse_key_token("right"), Some(SnakeCommand::Turn(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(parse_key_token(" "), Some(SnakeCommand::TogglePause));
        assert_eq!(parse_key_token("Space"), Some(SnakeCommand::TogglePause));
        assert_eq!(parse_key_token("r"), Some(SnakeCommand::Reset));
        assert_eq!(parse_key_token("Escape"), Some(SnakeCommand::Exit));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(parse_key_token("x"), None);
        assert_eq!(parse_key_token(""), None);
        assert_eq!(parse_key_token("upward"), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        let classifier = SwipeClassifier::new(30.0);
        assert_eq!(classifier.classify((100.0, 100.0), (180.0, 120.0)), Some(Direction::Right));
        assert_eq!(classifier.classify((100.0, 100.0), (40.0, 90.0)), Some(Direction::Left));
        assert_eq!(classifier.classify((100.0, 100.0), (110.0, 20.0)), Some(Direction::Up));
        assert_eq!(classifier.classify((100.0, 100.0), (90.0, 200.0)), Some(Direction::Down));
    }

    #[test]
    fn test_short_drag_is_not_a_swipe() {
        let classifier = SwipeClassifier::new(30.0);
        assert_eq!(classifier.classify((10.0, 10.0), (35.0, 30.0)), None);
    }

    #[test]
    fn test_diagonal_tie_is_horizontal() {
        let classifier = SwipeClassifier::default();
        assert_eq!(classifier.classify((0.0, 0.0), (-50.0, 50.0)), Some(Direction::Left));
    }

    #[test]
    fn test_non_finite_drag_is_ignored() {
        let classifier = SwipeClassifier::default();
        assert_eq!(classifier.classify((0.0, 0.0), (f32::NAN, 50.0)), None);
    }
}
