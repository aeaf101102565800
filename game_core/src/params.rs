/// Default tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 360.0; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED_INITIAL: f32 = 300.0;
    pub const BALL_SPEED_MAX: f32 = 720.0;
    pub const BALL_SPEED_ESCALATION: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60°
    pub const BALL_SERVE_ANGLE: f32 = 0.436_332_3; // 25°
    pub const SERVE_DELAY: f32 = 1.2; // seconds the ball is frozen after a reset

    // AI
    pub const AI_REACTION_DELAY: f32 = 0.10;
    pub const AI_ERROR_MARGIN: f32 = 18.0;
    pub const AI_TRACK_SMOOTH: f32 = 0.18;

    // Score
    pub const WIN_SCORE: u8 = 11; // First to 11 wins

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
