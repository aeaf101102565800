use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// The play field. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of something `extent` tall so it stays inside the field
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

/// Reflect `y` back into `[lo, hi]` as if it bounced off both edges.
///
/// The path is unfolded analytically with period `2 * (hi - lo)`, so any number
/// of bounces costs the same as one.
pub fn fold_into_band(y: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let mut m = (y - lo).rem_euclid(2.0 * span);
    if m > span {
        m = 2.0 * span - m;
    }
    lo + m
}
