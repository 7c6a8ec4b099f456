use legion::*;

use crate::{motion::RandomMove, simulation::FrameClock};

#[system(par_for_each)]
pub fn advance_motion(motion: &mut RandomMove, #[resource] clock: &FrameClock) {
    motion.advance(clock.delta_seconds());
}
