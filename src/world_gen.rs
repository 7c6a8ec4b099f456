use crate::{
    motion::{Bounds, RandomMove},
    random::new_rng,
    shape::{Shape, ShapeKind},
};
use legion::{Entity, World};
use log::info;
use nalgebra::Vector2;

pub struct GenerationConfig {
    pub width: u32,
    pub height: u32,
    pub object_count: usize,
    /// `None` draws a fresh scene every run.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Vector2::new(0., 0.),
            Vector2::new(self.width as f64, self.height as f64),
        )
    }
}

pub fn init_world(world: &mut World, config: &GenerationConfig) -> Vec<Entity> {
    let mut rng = new_rng(config.seed);
    let bounds = config.bounds();
    let mut objects = std::vec::Vec::<(Shape, RandomMove)>::new();
    objects.reserve(config.object_count);

    for i in 0..config.object_count {
        let motion = RandomMove::random(bounds, &mut rng);
        let kind = if i % 2 == 0 {
            ShapeKind::Square
        } else {
            ShapeKind::Circle
        };
        objects.push((Shape::random(kind, &mut rng), motion));
    }
    info!("Spawned {} shapes", objects.len());
    world.extend(objects).to_vec()
}
