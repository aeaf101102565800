use hecs::World;
use tracing::debug;

use crate::ball::{Ball, Contact, ScoreEvent};
use crate::components::{Paddle, Side};
use crate::resources::{Events, Time};

/// Move the ball and resolve wall/paddle contacts.
///
/// Paddle rectangles are read after this frame's paddle movement.
pub fn update_ball(world: &mut World, time: &Time, events: &mut Events) -> Option<ScoreEvent> {
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side() {
            Side::Left => left = Some(paddle.rect()),
            Side::Right => right = Some(paddle.rect()),
        }
    }
    let (Some(left), Some(right)) = (left, right) else {
        return None; // Both paddles are needed for a rally
    };

    let (_entity, ball) = world.query_mut::<&mut Ball>().into_iter().next()?;
    let scored = ball.update(time.dt, &left, &right);

    match ball.last_contact() {
        Some(Contact::Wall) => {
            events.ball_hit_wall = true;
            debug!(y = ball.pos().y, "ball hit wall");
        }
        Some(Contact::Paddle(side)) => {
            events.ball_hit_paddle = true;
            debug!(?side, speed = ball.speed(), "ball hit paddle");
        }
        None => {}
    }

    scored
}
