use nalgebra::Vector2;
use rand::distributions::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use sdl2::pixels::Color;

/// Uniform sample in `[min, max)`, accepting the bounds in either order.
/// Equal bounds yield that bound.
pub fn random_between<T, R>(rng: &mut R, a: T, b: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    if a == b {
        return a;
    }
    let (min, max) = if a < b { (a, b) } else { (b, a) };
    rng.gen_range(min..max)
}

pub fn random_point<R: Rng + ?Sized>(
    rng: &mut R,
    min: &Vector2<f64>,
    max: &Vector2<f64>,
) -> Vector2<f64> {
    Vector2::new(
        random_between(rng, min.x, max.x),
        random_between(rng, min.y, max.y),
    )
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R, dark: Color, light: Color) -> Color {
    Color::RGB(
        random_between(rng, dark.r, light.r),
        random_between(rng, dark.g, light.g),
        random_between(rng, dark.b, light.b),
    )
}

pub fn new_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    }
}

/// Child generator for a single component, so components never share a source.
pub fn fork_rng<R: Rng + ?Sized>(rng: &mut R) -> Pcg64 {
    Pcg64::seed_from_u64(rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_between_stays_in_half_open_range() {
        let mut rng = new_rng(Some(7));
        for _ in 0..1000 {
            let v = random_between(&mut rng, 10, 20);
            assert!((10..20).contains(&v));
            let v = random_between(&mut rng, 20, 10);
            assert!((10..20).contains(&v));
            let f = random_between(&mut rng, 1.5f64, -2.5);
            assert!(f >= -2.5 && f < 1.5);
        }
    }

    #[test]
    fn test_random_between_equal_bounds() {
        let mut rng = new_rng(Some(1));
        assert_eq!(random_between(&mut rng, 42, 42), 42);
        assert_eq!(random_between(&mut rng, 3.0f64, 3.0), 3.0);
    }

    #[test]
    fn test_random_point_inside_box() {
        let mut rng = new_rng(Some(3));
        let min = Vector2::new(0.0, 0.0);
        let max = Vector2::new(1280.0, 720.0);
        for _ in 0..500 {
            let p = random_point(&mut rng, &min, &max);
            assert!(p.x >= 0.0 && p.x < 1280.0);
            assert!(p.y >= 0.0 && p.y < 720.0);
        }
    }

    #[test]
    fn test_random_color_channels() {
        let mut rng = new_rng(Some(11));
        for _ in 0..200 {
            let c = random_color(&mut rng, Color::RGB(50, 50, 50), Color::RGB(200, 200, 200));
            for channel in [c.r, c.g, c.b].iter() {
                assert!((50..200).contains(channel));
            }
        }
    }

    #[test]
    fn test_seeded_rngs_repeat() {
        let mut a = new_rng(Some(99));
        let mut b = new_rng(Some(99));
        assert_eq!(fork_rng(&mut a).gen::<u64>(), fork_rng(&mut b).gen::<u64>());
    }
}
