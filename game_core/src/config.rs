use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::ConfigError;
use crate::map::Bounds;
use crate::params::Params;

/// Paddle geometry and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: Params::PADDLE_WIDTH,
            height: Params::PADDLE_HEIGHT,
            margin: Params::PADDLE_MARGIN,
            speed: Params::PADDLE_SPEED,
        }
    }
}

/// Ball physics tuning. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub speed_initial: f32,
    pub speed_max: f32,
    pub speed_escalation: f32,
    /// Outgoing angle for a hit on the very tip of a paddle; 0 disables aiming
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub serve_delay: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: Params::BALL_RADIUS,
            speed_initial: Params::BALL_SPEED_INITIAL,
            speed_max: Params::BALL_SPEED_MAX,
            speed_escalation: Params::BALL_SPEED_ESCALATION,
            max_bounce_angle: Params::BALL_MAX_BOUNCE_ANGLE,
            serve_angle: Params::BALL_SERVE_ANGLE,
            serve_delay: Params::SERVE_DELAY,
        }
    }
}

/// AI difficulty knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Seconds between re-predictions
    pub reaction_delay: f32,
    /// Max prediction noise in position units
    pub error_margin: f32,
    /// Per-frame interpolation fraction in (0, 1]
    pub track_smooth: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            reaction_delay: Params::AI_REACTION_DELAY,
            error_margin: Params::AI_ERROR_MARGIN,
            track_smooth: Params::AI_TRACK_SMOOTH,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub win_score: u8,
    pub bounds: Bounds,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            win_score: Params::WIN_SCORE,
            bounds: Bounds::default(),
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get the left edge of a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle.margin,
            Side::Right => self.bounds.width() - self.paddle.margin - self.paddle.width,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        let height = self.bounds.height();

        check("paddle.width", self.paddle.width, "> 0", |v| v > 0.0)?;
        check("paddle.height", self.paddle.height, "in (0, arena height]", |v| {
            v > 0.0 && v <= height
        })?;
        check("paddle.margin", self.paddle.margin, ">= 0", |v| v >= 0.0)?;
        check("paddle.speed", self.paddle.speed, ">= 0", |v| v >= 0.0)?;
        if 2.0 * (self.paddle.margin + self.paddle.width) >= self.bounds.width() {
            return Err(ConfigError::OutOfRange {
                field: "paddle.margin",
                value: self.paddle.margin,
                expected: "paddles must not overlap",
            });
        }

        check("ball.radius", self.ball.radius, "in (0, arena height / 2)", |v| {
            v > 0.0 && 2.0 * v < height
        })?;
        check("ball.speed_initial", self.ball.speed_initial, "> 0", |v| v > 0.0)?;
        let initial = self.ball.speed_initial;
        check("ball.speed_max", self.ball.speed_max, ">= ball.speed_initial", |v| {
            v >= initial
        })?;
        check("ball.speed_escalation", self.ball.speed_escalation, "> 1", |v| {
            v > 1.0
        })?;
        check("ball.max_bounce_angle", self.ball.max_bounce_angle, "in [0, pi/2)", |v| {
            (0.0..std::f32::consts::FRAC_PI_2).contains(&v)
        })?;
        check("ball.serve_angle", self.ball.serve_angle, "in [0, pi/2)", |v| {
            (0.0..std::f32::consts::FRAC_PI_2).contains(&v)
        })?;
        check("ball.serve_delay", self.ball.serve_delay, ">= 0", |v| v >= 0.0)?;

        check("ai.reaction_delay", self.ai.reaction_delay, ">= 0", |v| v >= 0.0)?;
        check("ai.error_margin", self.ai.error_margin, ">= 0", |v| v >= 0.0)?;
        check("ai.track_smooth", self.ai.track_smooth, "in (0, 1]", |v| {
            v > 0.0 && v <= 1.0
        })?;

        if self.win_score == 0 {
            return Err(ConfigError::OutOfRange {
                field: "win_score",
                value: 0.0,
                expected: "> 0",
            });
        }
        Ok(())
    }
}

fn check(
    field: &'static str,
    value: f32,
    expected: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 30.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 758.0, "Right paddle X position");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            win_score = 5

            [ai]
            reaction_delay = 0.25
            track_smooth = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.win_score, 5);
        assert_eq!(config.ai.reaction_delay, 0.25);
        assert_eq!(config.ai.track_smooth, 0.5);
        assert_eq!(config.ai.error_margin, Params::AI_ERROR_MARGIN);
        assert_eq!(config.ball, BallConfig::default());
        assert_eq!(config.bounds, Bounds::default());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = Config::new().to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::new());
    }

    #[test]
    fn test_rejects_out_of_range_track_smooth() {
        let mut config = Config::new();
        config.ai.track_smooth = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "ai.track_smooth",
                ..
            })
        ));

        config.ai.track_smooth = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_bounds_from_toml() {
        let err = Config::from_toml_str("[bounds]\nwidth = 800.0\nheight = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));
    }

    #[test]
    fn test_rejects_non_escalating_ball() {
        let mut config = Config::new();
        config.ball.speed_escalation = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Config::from_toml_str("win_score = \"eleven\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
