extern crate sdl2;

pub mod advance;
pub mod error;
pub mod logging;
pub mod motion;
pub mod random;
pub mod render;
pub mod shape;
pub mod simulation;
pub mod world_gen;

use error::Error;
use legion::*;
use log::{info, LevelFilter};
use render::DisplayConfig;
use sdl2::event::Event;
use simulation::SimulationConfig;
use world_gen::GenerationConfig;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const TITLE: &str = "graphics";
const FPS: u32 = 60;
const OBJECT_COUNT: usize = 50;

pub fn main() -> Result<(), Error> {
    // Setup.
    let _log_handle = logging::init_logging(LevelFilter::Info)?;
    let graphics = render::init_graphics(&DisplayConfig {
        width: WIDTH,
        height: HEIGHT,
        title: TITLE,
    })?;
    let mut event_pump = graphics.sdl_context.event_pump().map_err(Error::Sdl)?;
    let mut world = World::default();

    // Initialize world.
    world_gen::init_world(
        &mut world,
        &GenerationConfig {
            width: WIDTH,
            height: HEIGHT,
            object_count: OBJECT_COUNT,
            seed: None,
        },
    );
    let mut resources = Resources::default();
    resources.insert(graphics);
    simulation::init_simulation(&mut resources, SimulationConfig { fps: FPS });

    // One tick: measure, move, draw, then wait out the rest of the period.
    let mut schedule = Schedule::builder()
        .add_system(simulation::tick_clock_system())
        .add_system(advance::advance_motion_system())
        .add_thread_local(render::render_scene_system())
        .add_thread_local(simulation::pace_frame_system())
        .build();

    info!("Running at {} fps", FPS);
    'running: loop {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }
        schedule.execute(&mut world, &mut resources);
    }
    info!("Window closed");
    Ok(())
}
