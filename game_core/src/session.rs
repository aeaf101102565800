use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use tracing::info;

use crate::ai::{AiPaddle, AiState};
use crate::ball::Ball;
use crate::components::{Direction, Driver, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::error::ConfigError;
use crate::resources::{Events, GameRng, InputQueue, Score, Time};
use crate::{create_ball, create_paddle, step};

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    GameOver(Side),
}

/// One human paddle (left) against the AI (right), first to `win_score`.
///
/// Owns the world and every resource `step` needs; the presentation layer only
/// feeds a frame delta and the human's direction, then reads positions back.
pub struct Match {
    world: World,
    time: Time,
    config: Config,
    score: Score,
    events: Events,
    input_queue: InputQueue,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(
            &mut world,
            Side::Left,
            &config,
            Driver::Human(PaddleIntent::new()),
        );
        let right = create_paddle(
            &mut world,
            Side::Right,
            &config,
            Driver::Ai(AiPaddle::new(config.ai)),
        );
        let ball = create_ball(&mut world, opening_serve(&config, &mut rng));

        info!(seed, win_score = config.win_score, "match created");

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// Advance one frame. Returns the winner once the match is over.
    pub fn frame(&mut self, dt: f32, left_input: Direction) -> Option<Side> {
        self.input_queue.push_input(Side::Left, left_input);
        self.time.dt = dt;

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );

        self.winner()
    }

    /// Zero the score, re-centre the paddles and serve a fresh ball
    pub fn restart(&mut self) {
        self.score = Score::new();
        self.events.clear();
        self.input_queue.clear();
        self.time = Time::default();

        for (entity, side) in [(self.left, Side::Left), (self.right, Side::Right)] {
            if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
                *paddle = Paddle::new(side, &self.config);
            }
            if let Ok(mut driver) = self.world.get::<&mut Driver>(entity) {
                match &mut *driver {
                    Driver::Human(intent) => *intent = PaddleIntent::new(),
                    Driver::Ai(ai) => ai.clear(),
                }
            }
        }

        let ball = opening_serve(&self.config, &mut self.rng);
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }

        info!("match restarted");
    }

    pub fn state(&self) -> MatchState {
        match self.winner() {
            Some(side) => MatchState::GameOver(side),
            None => MatchState::Playing,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ai_state(&self) -> Option<AiState> {
        let driver = self.world.get::<&Driver>(self.right).ok()?;
        match &*driver {
            Driver::Ai(ai) => Some(*ai.state()),
            Driver::Human(_) => None,
        }
    }
}

/// Centre ball served by a random side
fn opening_serve(config: &Config, rng: &mut GameRng) -> Ball {
    let mut ball = Ball::new(config, config.bounds.center(), Vec2::ZERO);
    let server = if rng.0.gen_bool(0.5) {
        Side::Left
    } else {
        Side::Right
    };
    ball.reset(server, &mut rng.0);
    ball
}
