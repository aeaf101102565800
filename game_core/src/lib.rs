pub mod ai;
pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use ai::*;
pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Order matters: human input, then AI (reading the ball from the start of the
/// frame), then the ball (colliding with the paddles' new positions), then
/// scoring. Once a side has won, further calls only clear the events.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    if score.has_winner(config.win_score).is_some() {
        input_queue.clear();
        return;
    }

    // Clamp dt to prevent large jumps
    let dt = sanitize_dt(time.dt).min(Params::MAX_DT);
    let step_time = Time::new(dt, time.now);

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input_queue);

    // 2. Move human paddles based on intents
    move_paddles(world, &step_time);

    // 3. AI paddles predict and track
    drive_ai_paddles(world, &step_time, rng);

    // 4. Move ball, collide with walls and paddles
    let scored = update_ball(world, &step_time, events);

    // 5. Award points, serve again or finish the match
    check_scoring(world, scored, score, events, rng, config);

    time.now += dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config, driver: Driver) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), driver))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
