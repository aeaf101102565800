use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Direction, Side};
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Negative, NaN and infinite frame deltas count as "no time passed"
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Seedable random source for serve angles and AI prediction noise
#[derive(Debug, Clone)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Pending human inputs for the next frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, Direction)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, dir: Direction) {
        self.inputs.push((side, dir));
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (Side, Direction)> {
        self.inputs.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Left);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Left),
            "Left player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Right);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Right),
            "Right player should win at 11"
        );
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            left: 10,
            right: 10,
        };
        assert_eq!(score.has_winner(11), None, "No winner at 10");
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
            winner: Some(Side::Left),
        };

        events.clear();

        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, Direction::Up);
        queue.push_input(Side::Left, Direction::Down);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![(Side::Left, Direction::Up), (Side::Left, Direction::Down)]
        );
        assert!(queue.inputs.is_empty());
    }
}
