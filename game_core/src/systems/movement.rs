use hecs::World;

use crate::components::{Driver, Paddle};
use crate::resources::Time;

/// Move human-driven paddles according to their intents
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, (paddle, driver)) in world.query_mut::<(&mut Paddle, &Driver)>() {
        if let Driver::Human(intent) = driver {
            paddle.move_by(intent.dir, time.dt);
        }
    }
}
