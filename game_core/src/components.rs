use glam::Vec2;

use crate::ai::AiPaddle;
use crate::config::Config;
use crate::map::{Aabb, Bounds};
use crate::resources::sanitize_dt;

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of `vx` for a ball travelling toward this side
    pub fn toward_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Discrete vertical input. Screen coordinates: `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
            Direction::Idle => 0.0,
        }
    }
}

impl From<i8> for Direction {
    /// -1 = up, 0 = stop, 1 = down
    fn from(dir: i8) -> Self {
        match dir.signum() {
            -1 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::Idle,
        }
    }
}

/// Paddle component - a vertical-only rectangle that keeps itself inside the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    x: f32,      // left edge, fixed for the match
    y: f32,      // top edge, clamped to [0, arena height - height]
    width: f32,
    height: f32,
    speed: f32,  // units per second
    bounds: Bounds,
}

impl Paddle {
    /// Paddle at the vertical centre of its side
    pub fn new(side: Side, config: &Config) -> Self {
        let height = config.paddle.height;
        let bounds = config.bounds;
        Self {
            side,
            x: config.paddle_x(side),
            y: bounds.clamp_top((bounds.height() - height) / 2.0, height),
            width: config.paddle.width,
            height,
            speed: config.paddle.speed,
            bounds,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Place the top edge, clamped to the arena
    pub fn set_y(&mut self, y: f32) {
        if y.is_finite() {
            self.y = self.bounds.clamp_top(y, self.height);
        }
    }

    /// Move by `speed * dt` in `direction`, then clamp
    pub fn move_by(&mut self, direction: Direction, dt: f32) {
        let dt = sanitize_dt(dt);
        self.set_y(self.y + direction.sign() * self.speed * dt);
    }

    /// Close `fraction` of the gap between the paddle centre and `target`, then clamp
    pub fn move_center_toward(&mut self, target: f32, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        let center = self.center_y();
        self.set_y(self.y + (target - center) * fraction);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_origin_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// X coordinate of the face the ball bounces off
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }
}

/// Movement intent for a human-driven paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: Direction,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What moves a paddle each frame
#[derive(Debug, Clone)]
pub enum Driver {
    Human(PaddleIntent),
    Ai(AiPaddle),
}

impl Driver {
    pub fn is_ai(&self) -> bool {
        matches!(self, Driver::Ai(_))
    }
}
