use crate::{
    error::Error,
    motion::RandomMove,
    shape::{Outline, Shape},
    simulation::FrameClock,
};
use legion::IntoQuery;
use legion::{system, world::SubWorld};
use log::{info, warn};
use sdl2::{
    gfx::primitives::DrawRenderer,
    pixels::Color,
    render::Canvas,
    video::Window,
};

const BACKGROUND: Color = Color::RGB(238, 238, 238);
const TEXT: Color = Color::RGB(0, 0, 0);
// gfx strings are placed by their top edge; this puts the 8px glyph baseline at y=20.
const FPS_LABEL_POSITION: (i16, i16) = (10, 12);

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
}

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: Canvas<Window>,
}

pub fn init_graphics(display_config: &DisplayConfig) -> Result<Graphics, Error> {
    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .build()?;
    let mut canvas = window.into_canvas().build()?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();
    info!(
        "Opened {}x{} window \"{}\"",
        display_config.width, display_config.height, display_config.title
    );

    Ok(Graphics {
        sdl_context,
        canvas,
    })
}

fn screen(v: f64) -> i16 {
    v.round() as i16
}

pub fn fps_label(clock: &FrameClock) -> String {
    match clock.fps() {
        Some(fps) => format!("FPS:{:.2}", fps),
        None => "FPS:--".to_string(),
    }
}

fn draw_outline(canvas: &Canvas<Window>, outline: &Outline, color: Color) -> Result<(), String> {
    match outline {
        Outline::Polygon(corners) => {
            let vx = corners.iter().map(|c| screen(c.x)).collect::<Vec<_>>();
            let vy = corners.iter().map(|c| screen(c.y)).collect::<Vec<_>>();
            canvas.aa_polygon(&vx, &vy, color)
        }
        Outline::Circle { center, radius } => {
            canvas.aa_circle(screen(center.x), screen(center.y), screen(*radius), color)
        }
    }
}

#[system]
#[read_component(Shape)]
#[read_component(RandomMove)]
pub fn render_scene(
    world: &mut SubWorld,
    #[resource] graphics: &mut Graphics,
    #[resource] clock: &FrameClock,
) {
    let canvas = &mut graphics.canvas;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    for (shape, motion) in <(&Shape, &RandomMove)>::query().iter(world) {
        let outline = shape.outline(motion.position(), motion.angle());
        if let Err(e) = draw_outline(canvas, &outline, shape.color) {
            warn!("Failed to draw {:?}: {}", shape.kind, e);
        }
    }

    let (x, y) = FPS_LABEL_POSITION;
    if let Err(e) = canvas.string(x, y, &fps_label(clock), TEXT) {
        warn!("Failed to draw fps counter: {}", e);
    }
    canvas.present();
}
