use hecs::World;

use crate::ball::Ball;
use crate::components::{Driver, Paddle};
use crate::resources::{GameRng, Time};

/// Let AI-driven paddles re-predict and track the ball.
///
/// Runs before the ball moves, so every AI reads the ball as it was at the
/// start of the frame.
pub fn drive_ai_paddles(world: &mut World, time: &Time, rng: &mut GameRng) {
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (paddle, driver)) in world.query_mut::<(&mut Paddle, &mut Driver)>() {
        if let Driver::Ai(ai) = driver {
            ai.update(paddle, &ball, time.dt, &mut rng.0);
        }
    }
}
