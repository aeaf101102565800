use hecs::World;

use crate::components::{Driver, Paddle};
use crate::resources::InputQueue;

/// Apply queued directions to the intents of human-driven paddles
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for (side, dir) in input_queue.drain() {
        for (_entity, (paddle, driver)) in world.query_mut::<(&Paddle, &mut Driver)>() {
            if paddle.side() != side {
                continue;
            }
            if let Driver::Human(intent) = driver {
                intent.dir = dir;
            }
        }
    }
}
