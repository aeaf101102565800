use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::components::Side;
use crate::config::{BallConfig, Config};
use crate::map::{Aabb, Bounds};
use crate::resources::sanitize_dt;

/// Serving (frozen) -> InPlay -> Scored -> Serving (after `reset`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    Serving,
    InPlay,
    Scored(Side),
}

/// What the ball touched during the last update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall,
    Paddle(Side),
}

/// The ball left the court; `scorer` gets the point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub scorer: Side,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    speed_scale: f32,
    serve_cooldown: f32,
    phase: BallPhase,
    last_contact: Option<Contact>,
    bounds: Bounds,
    tuning: BallConfig,
}

impl Ball {
    /// A ball already in play at `pos` moving with `vel` (capped to the max speed)
    pub fn new(config: &Config, pos: Vec2, vel: Vec2) -> Self {
        let mut ball = Self {
            pos,
            vel,
            radius: config.ball.radius,
            speed_scale: 1.0,
            serve_cooldown: 0.0,
            phase: BallPhase::InPlay,
            last_contact: None,
            bounds: config.bounds,
            tuning: config.ball,
        };
        ball.enforce_speed_cap();
        ball.speed_scale = ball.speed() / ball.tuning.speed_initial;
        ball
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Current speed relative to the serve speed
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    pub fn serve_cooldown(&self) -> f32 {
        self.serve_cooldown
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    pub fn last_contact(&self) -> Option<Contact> {
        self.last_contact
    }

    pub fn is_moving_toward(&self, side: Side) -> bool {
        self.vel.x * side.toward_sign() > 0.0
    }

    /// Re-centre and serve from `serving_side` toward its opponent.
    ///
    /// The serve leaves at a random angle within `±serve_angle` of horizontal and
    /// stays frozen for `serve_delay` seconds.
    pub fn reset<R: Rng + ?Sized>(&mut self, serving_side: Side, rng: &mut R) {
        let receiver = serving_side.opponent();
        let max_angle = self.tuning.serve_angle;
        let angle = if max_angle > 0.0 {
            rng.gen_range(-max_angle..=max_angle)
        } else {
            0.0
        };

        self.pos = self.bounds.center();
        self.vel = Vec2::new(receiver.toward_sign() * angle.cos(), angle.sin())
            * self.tuning.speed_initial;
        self.enforce_speed_cap();
        self.speed_scale = 1.0;
        self.serve_cooldown = self.tuning.serve_delay;
        self.phase = if self.serve_cooldown > 0.0 {
            BallPhase::Serving
        } else {
            BallPhase::InPlay
        };
        self.last_contact = None;
        debug!(server = ?serving_side, angle, "ball served");
    }

    /// Advance one frame against the paddles' current rectangles.
    ///
    /// Returns the score event the first time the ball leaves the court; later
    /// calls return `None` until the next `reset`.
    pub fn update(&mut self, dt: f32, left: &Aabb, right: &Aabb) -> Option<ScoreEvent> {
        let dt = sanitize_dt(dt);
        self.last_contact = None;

        match self.phase {
            BallPhase::Scored(_) => return None,
            BallPhase::Serving if self.serve_cooldown > 0.0 => {
                self.serve_cooldown = (self.serve_cooldown - dt).max(0.0);
                if self.serve_cooldown == 0.0 {
                    self.phase = BallPhase::InPlay;
                }
                return None;
            }
            BallPhase::Serving => self.phase = BallPhase::InPlay,
            BallPhase::InPlay => {}
        }

        let prev = self.pos;
        self.pos += self.vel * dt;

        self.collide_walls();

        if self.is_moving_toward(Side::Left) && self.hits_paddle(prev, left, Side::Left) {
            self.bounce_off(left, Side::Left);
        } else if self.is_moving_toward(Side::Right) && self.hits_paddle(prev, right, Side::Right)
        {
            self.bounce_off(right, Side::Right);
        }

        self.enforce_speed_cap();

        let scorer = if self.pos.x + self.radius < 0.0 {
            Some(Side::Right)
        } else if self.pos.x - self.radius > self.bounds.width() {
            Some(Side::Left)
        } else {
            None
        };

        scorer.map(|scorer| {
            self.phase = BallPhase::Scored(scorer);
            ScoreEvent { scorer }
        })
    }

    /// Multiply the speed by the escalation factor, keeping direction, saturating at the max
    pub fn escalate(&mut self) {
        let speed = self.speed();
        if speed <= 0.0 {
            return;
        }
        let target = (speed * self.tuning.speed_escalation).min(self.tuning.speed_max);
        if target > speed {
            self.vel *= target / speed;
        }
        self.enforce_speed_cap();
        self.speed_scale = self.speed() / self.tuning.speed_initial;
    }

    fn enforce_speed_cap(&mut self) {
        self.vel = self.vel.clamp_length_max(self.tuning.speed_max);
    }

    /// Mirror the ball back inside the top/bottom walls and point `vy` away from them
    fn collide_walls(&mut self) {
        let r = self.radius;
        let bottom = self.bounds.height() - r;

        if self.pos.y < r {
            self.pos.y = 2.0 * r - self.pos.y;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bottom {
            self.pos.y = 2.0 * bottom - self.pos.y;
            self.vel.y = -self.vel.y.abs();
        } else {
            return;
        }

        self.pos.y = self.pos.y.clamp(r, bottom.max(r));
        self.last_contact = Some(Contact::Wall);
    }

    /// Overlap test, plus a swept check against the paddle face so a fast ball
    /// cannot skip over a paddle between two frames.
    fn hits_paddle(&self, prev: Vec2, rect: &Aabb, side: Side) -> bool {
        let r = self.radius;
        if rect.intersects_circle(self.pos, r) {
            return true;
        }

        let face = match side {
            Side::Left => rect.max.x + r,
            Side::Right => rect.min.x - r,
        };
        let crossed = match side {
            Side::Left => prev.x >= face && self.pos.x < face,
            Side::Right => prev.x <= face && self.pos.x > face,
        };
        if !crossed {
            return false;
        }

        let t = (face - prev.x) / (self.pos.x - prev.x);
        let y = prev.y + (self.pos.y - prev.y) * t;
        y + r >= rect.min.y && y - r <= rect.max.y
    }

    /// Reflect off a paddle.
    ///
    /// With aiming enabled the outgoing angle is linear in the hit offset:
    /// `clamp((ball.y - paddle centre) / (paddle height / 2), -1, 1) * max_bounce_angle`,
    /// measured from horizontal, at the incoming speed. Escalation runs afterwards.
    fn bounce_off(&mut self, rect: &Aabb, side: Side) {
        let away = side.opponent().toward_sign();

        self.pos.x = match side {
            Side::Left => rect.max.x + self.radius,
            Side::Right => rect.min.x - self.radius,
        };

        let max_angle = self.tuning.max_bounce_angle;
        if max_angle > 0.0 {
            let speed = self.speed();
            let half_height = rect.height() / 2.0;
            let offset = ((self.pos.y - rect.center().y) / half_height).clamp(-1.0, 1.0);
            let angle = offset * max_angle;
            self.vel = Vec2::new(away * angle.cos(), angle.sin()) * speed;
        } else {
            self.vel.x = away * self.vel.x.abs();
        }

        self.escalate();
        self.last_contact = Some(Contact::Paddle(side));
    }
}
