use hecs::World;
use tracing::info;

use crate::ball::{Ball, ScoreEvent};
use crate::components::{Driver, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Award a point and serve again, or end the match at the win score
pub fn check_scoring(
    world: &mut World,
    scored: Option<ScoreEvent>,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let Some(ScoreEvent { scorer }) = scored else {
        return;
    };

    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    info!(?scorer, left = score.left, right = score.right, "point scored");

    if let Some(winner) = score.has_winner(config.win_score) {
        // Terminal: the ball stays out of play
        events.winner = Some(winner);
        info!(?winner, left = score.left, right = score.right, "match over");
        return;
    }

    // The scorer serves toward the player who conceded
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(scorer, &mut rng.0);
    }
    for (_entity, driver) in world.query_mut::<&mut Driver>() {
        if let Driver::Ai(ai) = driver {
            ai.clear();
        }
    }
}
