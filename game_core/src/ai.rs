//! Predictive driver for the computer-controlled paddle.
//!
//! Difficulty comes from three independent knobs in [`AiConfig`]: how often the
//! AI re-reads the ball (`reaction_delay`), how wrong each reading is
//! (`error_margin`) and how quickly it closes on the reading (`track_smooth`).

use rand::Rng;
use tracing::trace;

use crate::ball::Ball;
use crate::components::Paddle;
use crate::config::AiConfig;
use crate::map::fold_into_band;
use crate::resources::sanitize_dt;

/// Prediction carried between frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiState {
    /// Centre-y the paddle is heading for; `None` while the ball moves away
    pub predicted_target: Option<f32>,
    /// Seconds until the next re-prediction is allowed
    pub delay_timer: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiPaddle {
    tuning: AiConfig,
    state: AiState,
}

impl AiPaddle {
    pub fn new(tuning: AiConfig) -> Self {
        Self {
            tuning,
            state: AiState::default(),
        }
    }

    pub fn tuning(&self) -> &AiConfig {
        &self.tuning
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }

    /// Forget the current prediction (new rally, restart)
    pub fn clear(&mut self) {
        self.state = AiState::default();
    }

    /// Re-predict if allowed, then ease `paddle` toward the target.
    ///
    /// `ball` is read-only; pass the state from the start of the frame.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        paddle: &mut Paddle,
        ball: &Ball,
        dt: f32,
        rng: &mut R,
    ) {
        let dt = sanitize_dt(dt);

        let goal = if ball.is_moving_toward(paddle.side()) {
            let target = match self.state.predicted_target {
                Some(target) if self.state.delay_timer > 0.0 => target,
                _ => {
                    let target = predict_intercept_y(ball, paddle) + self.jitter(rng);
                    trace!(side = ?paddle.side(), predicted = target, "ai re-predicted intercept");
                    self.state.predicted_target = Some(target);
                    self.state.delay_timer = self.tuning.reaction_delay;
                    target
                }
            };
            self.state.delay_timer -= dt;
            target
        } else {
            // Ball heading away: drop the stale read and drift back to the middle
            self.state = AiState::default();
            paddle.bounds().center().y
        };

        if dt > 0.0 {
            paddle.move_center_toward(goal, self.tuning.track_smooth);
        }
    }

    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let margin = self.tuning.error_margin;
        if margin > 0.0 {
            rng.gen_range(-margin..=margin)
        } else {
            0.0
        }
    }
}

/// Ball centre-y at the moment it reaches `paddle`'s face.
///
/// Straight-line travel is extended to the contact x, then folded back into the
/// band the ball centre can occupy (`[radius, height - radius]`), which accounts
/// for any number of wall bounces at once. A ball that is not approaching
/// returns its current y.
pub fn predict_intercept_y(ball: &Ball, paddle: &Paddle) -> f32 {
    let pos = ball.pos();
    let vel = ball.vel();
    let r = ball.radius();

    let contact_x = paddle.face_x() - paddle.side().toward_sign() * r;
    if vel.x == 0.0 {
        return pos.y;
    }
    let time_to_reach = (contact_x - pos.x) / vel.x;
    if time_to_reach <= 0.0 {
        return pos.y;
    }

    let raw_y = pos.y + vel.y * time_to_reach;
    fold_into_band(raw_y, r, paddle.bounds().height() - r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::config::Config;
    use crate::resources::GameRng;
    use glam::Vec2;

    fn config(reaction_delay: f32, error_margin: f32, track_smooth: f32) -> Config {
        let mut config = Config::new();
        config.ai = AiConfig {
            reaction_delay,
            error_margin,
            track_smooth,
        };
        config
    }

    /// Climbs at 45°, bounces off the top wall once, reaches x=751 after 2s
    fn one_bounce_ball(config: &Config) -> Ball {
        Ball::new(config, Vec2::new(151.0, 300.0), Vec2::new(300.0, -300.0))
    }

    #[test]
    fn test_prediction_matches_folded_reflection() {
        let config = config(0.0, 0.0, 0.5);
        let mut rng = GameRng::new(1);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);

        ai.update(&mut paddle, &one_bounce_ball(&config), 1.0 / 60.0, &mut rng.0);

        // Up 293 to the wall at y=7, then 307 back down
        assert_eq!(ai.state().predicted_target, Some(314.0));
        // Half of the 14-unit gap closed in one frame
        assert_eq!(paddle.center_y(), 307.0);
    }

    #[test]
    fn test_prediction_without_bounce_is_straight_line() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Right, &config);
        let ball = Ball::new(&config, Vec2::new(151.0, 300.0), Vec2::new(300.0, 100.0));

        assert_eq!(predict_intercept_y(&ball, &paddle), 500.0);
    }

    #[test]
    fn test_prediction_for_left_paddle() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, &config);
        // Contact x is 42 + 7 = 49; 600 units away at 300/s
        let ball = Ball::new(&config, Vec2::new(649.0, 300.0), Vec2::new(-300.0, 300.0));

        // 300 + 600 = 900 -> bounces off the bottom (593) and comes back to 286
        assert_eq!(predict_intercept_y(&ball, &paddle), 286.0);
    }

    #[test]
    fn test_ball_moving_away_clears_prediction_and_recenters() {
        let config = config(0.0, 0.0, 0.5);
        let mut rng = GameRng::new(1);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);

        ai.update(&mut paddle, &one_bounce_ball(&config), 1.0 / 60.0, &mut rng.0);
        assert!(ai.state().predicted_target.is_some());

        paddle.set_y(0.0);
        let retreating = Ball::new(&config, Vec2::new(400.0, 300.0), Vec2::new(-300.0, 0.0));
        ai.update(&mut paddle, &retreating, 1.0 / 60.0, &mut rng.0);

        assert_eq!(ai.state().predicted_target, None);
        // Centre 50 halfway to the arena centre at 300
        assert_eq!(paddle.center_y(), 175.0);
    }

    #[test]
    fn test_reaction_delay_holds_prediction() {
        let config = config(0.5, 0.0, 0.5);
        let mut rng = GameRng::new(1);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);

        ai.update(&mut paddle, &one_bounce_ball(&config), 0.25, &mut rng.0);
        assert_eq!(ai.state().predicted_target, Some(314.0));
        assert_eq!(ai.state().delay_timer, 0.25);

        // Trajectory changes, but the AI has not reacted yet
        let straight = Ball::new(&config, Vec2::new(151.0, 300.0), Vec2::new(300.0, 100.0));
        ai.update(&mut paddle, &straight, 0.25, &mut rng.0);
        assert_eq!(ai.state().predicted_target, Some(314.0));

        // Timer spent: the next frame picks up the new trajectory
        ai.update(&mut paddle, &straight, 0.25, &mut rng.0);
        assert_eq!(ai.state().predicted_target, Some(500.0));
    }

    #[test]
    fn test_error_offset_is_fixed_per_prediction() {
        let config = config(100.0, 18.0, 0.18);
        let mut rng = GameRng::new(42);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);
        let ball = one_bounce_ball(&config);

        ai.update(&mut paddle, &ball, 1.0 / 60.0, &mut rng.0);
        let first = ai.state().predicted_target.unwrap();
        assert!((first - 314.0).abs() <= 18.0);

        for _ in 0..30 {
            ai.update(&mut paddle, &ball, 1.0 / 60.0, &mut rng.0);
            assert_eq!(ai.state().predicted_target, Some(first), "noise must not re-roll");
        }
    }

    #[test]
    fn test_error_offset_stays_within_margin() {
        let config = config(0.0, 18.0, 0.18);
        let mut rng = GameRng::new(7);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);
        let ball = one_bounce_ball(&config);

        for _ in 0..200 {
            ai.update(&mut paddle, &ball, 1.0 / 60.0, &mut rng.0);
            let target = ai.state().predicted_target.unwrap();
            assert!((296.0..=332.0).contains(&target), "target {target} outside margin");
        }
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let config = config(0.0, 18.0, 0.18);
        let ball = one_bounce_ball(&config);
        let run = |seed: u64| {
            let mut rng = GameRng::new(seed);
            let mut paddle = Paddle::new(Side::Right, &config);
            let mut ai = AiPaddle::new(config.ai);
            (0..20)
                .map(|_| {
                    ai.update(&mut paddle, &ball, 1.0 / 60.0, &mut rng.0);
                    ai.state().predicted_target.unwrap()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(3), run(3));
    }

    #[test]
    fn test_zero_dt_predicts_but_does_not_move() {
        let config = config(0.0, 0.0, 0.5);
        let mut rng = GameRng::new(1);
        let mut paddle = Paddle::new(Side::Right, &config);
        let mut ai = AiPaddle::new(config.ai);

        ai.update(&mut paddle, &one_bounce_ball(&config), f32::NAN, &mut rng.0);

        assert_eq!(ai.state().predicted_target, Some(314.0));
        assert_eq!(paddle.center_y(), 300.0);
    }
}
