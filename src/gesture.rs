use crate::card::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
}

impl Direction {
    /// Maps a DOM `KeyboardEvent.key` name to a direction. Anything but the
    /// three arrows is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Direction::Right),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Up),
            _ => None,
        }
    }

    /// Feedback shown while a card leaves in this direction.
    pub fn overlay(self) -> Overlay {
        match self {
            Direction::Right => Overlay::Positive,
            Direction::Left => Overlay::Negative,
            Direction::Up => Overlay::None,
        }
    }
}

/// Classifies a finished swipe. `dy` is positive for upward motion.
///
/// The dominant axis decides the candidate direction; a tie goes to the
/// vertical axis. Displacements that do not clear `threshold` on the
/// dominant axis are not a swipe.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(Direction::Right)
        } else if dx < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > threshold {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Remembers where a touch started so its end can be classified.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    start: Option<(f32, f32)>,
    threshold: f32,
}

impl TouchTracker {
    pub fn new(threshold: f32) -> Self {
        Self { start: None, threshold }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Screen coordinates grow downwards, so the vertical displacement is
    /// flipped before classification.
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        classify_swipe(x - start_x, start_y - y, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SWIPE_THRESHOLD;

    #[test]
    fn test_classify_dominant_axis() {
        assert_eq!(classify_swipe(60.0, 10.0, SWIPE_THRESHOLD), Some(Direction::Right));
        assert_eq!(classify_swipe(-60.0, 10.0, SWIPE_THRESHOLD), Some(Direction::Left));
        assert_eq!(classify_swipe(10.0, 60.0, SWIPE_THRESHOLD), Some(Direction::Up));
    }

    #[test]
    fn test_classify_below_threshold_is_ignored() {
        assert_eq!(classify_swipe(30.0, 20.0, SWIPE_THRESHOLD), None);
        assert_eq!(classify_swipe(50.0, 0.0, SWIPE_THRESHOLD), None);
        assert_eq!(classify_swipe(0.0, 0.0, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn test_classify_downward_swipe_is_ignored() {
        assert_eq!(classify_swipe(5.0, -120.0, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn test_classify_tie_uses_vertical_axis() {
        assert_eq!(classify_swipe(70.0, 70.0, SWIPE_THRESHOLD), Some(Direction::Up));
        assert_eq!(classify_swipe(-70.0, -70.0, SWIPE_THRESHOLD), None);
    }

    #[test]
    fn test_tracker_flips_vertical_axis() {
        let mut touch = TouchTracker::new(SWIPE_THRESHOLD);
        touch.begin(100.0, 400.0);
        assert_eq!(touch.end(110.0, 300.0), Some(Direction::Up));

        touch.begin(100.0, 400.0);
        assert_eq!(touch.end(180.0, 390.0), Some(Direction::Right));
    }

    #[test]
    fn test_tracker_end_without_begin() {
        let mut touch = TouchTracker::new(SWIPE_THRESHOLD);
        assert_eq!(touch.end(500.0, 0.0), None);

        touch.begin(0.0, 0.0);
        touch.cancel();
        assert_eq!(touch.end(500.0, 0.0), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
