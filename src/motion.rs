use nalgebra::Vector2;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::random::{fork_rng, random_between, random_point};

pub const EPSILON: f64 = 1e-5;

const SPEED_RANGE: (f64, f64) = (300., 450.);
const ROTATION_SPEED_RANGE: (f64, f64) = (40., 70.);

fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Bounds {
        Bounds { min, max }
    }

    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Random-waypoint motion: travels in a straight line from `source` to
/// `destination` at `speed` px/s, then picks the next waypoint inside `bounds`.
/// Rotates at `rotation_speed` deg/s regardless of whether it moves.
#[derive(Clone, Debug)]
pub struct RandomMove {
    bounds: Bounds,
    speed: f64,
    rotation_speed: f64,
    position: Vector2<f64>,
    source: Vector2<f64>,
    destination: Vector2<f64>,
    elapsed_seconds: f64,
    travel_seconds: f64,
    angle: f64,
    rng: Pcg64,
}

impl RandomMove {
    pub fn new(bounds: Bounds, speed: f64, rotation_speed: f64, mut rng: Pcg64) -> RandomMove {
        let start = random_point(&mut rng, &bounds.min, &bounds.max);
        let destination = random_point(&mut rng, &bounds.min, &bounds.max);
        RandomMove::with_route(bounds, speed, rotation_speed, start, destination, rng)
    }

    pub fn random<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> RandomMove {
        let speed = random_between(rng, SPEED_RANGE.0, SPEED_RANGE.1);
        let rotation_speed = random_between(rng, ROTATION_SPEED_RANGE.0, ROTATION_SPEED_RANGE.1);
        RandomMove::new(bounds, speed, rotation_speed, fork_rng(rng))
    }

    pub fn with_route(
        bounds: Bounds,
        speed: f64,
        rotation_speed: f64,
        start: Vector2<f64>,
        destination: Vector2<f64>,
        rng: Pcg64,
    ) -> RandomMove {
        let mut motion = RandomMove {
            bounds,
            speed,
            rotation_speed,
            position: start,
            source: start,
            destination,
            elapsed_seconds: 0.,
            travel_seconds: 0.,
            angle: 0.,
            rng,
        };
        motion.start_leg(destination);
        motion
    }

    fn start_leg(&mut self, destination: Vector2<f64>) {
        self.source = self.position;
        self.destination = destination;
        // A frozen object keeps its leg untimed; advance() never reads it.
        if !is_zero(self.speed) {
            self.travel_seconds = (self.destination - self.source).norm() / self.speed;
            self.elapsed_seconds = 0.;
        }
    }

    fn next_waypoint(&mut self) {
        let destination = random_point(&mut self.rng, &self.bounds.min, &self.bounds.max);
        self.start_leg(destination);
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        self.angle = (self.angle + delta_seconds * self.rotation_speed).rem_euclid(360.);
        if is_zero(self.speed) {
            return;
        }
        if is_zero((self.destination - self.position).norm()) {
            self.next_waypoint();
        }
        if is_zero(self.travel_seconds) {
            self.position = self.destination;
            return;
        }
        self.elapsed_seconds += delta_seconds;
        let r = (self.elapsed_seconds / self.travel_seconds).min(1.);
        self.position = if r >= 1. {
            self.destination
        } else {
            self.source + (self.destination - self.source) * r
        };
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    /// Degrees in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn source(&self) -> Vector2<f64> {
        self.source
    }

    pub fn destination(&self) -> Vector2<f64> {
        self.destination
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn travel_seconds(&self) -> f64 {
        self.travel_seconds
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
