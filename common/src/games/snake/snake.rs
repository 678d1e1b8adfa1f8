use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. `body_set` mirrors `body` for constant-time occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Point]) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    /// Moves the head to `next_head`. The tail is kept when `grow` is set.
    pub fn advance(&mut self, next_head: Point, grow: bool) {
        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if !grow && let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}
