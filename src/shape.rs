use nalgebra::{Rotation2, Vector2};
use rand::Rng;
use sdl2::pixels::Color;

use crate::random::{random_between, random_color};

const SIZE_RANGE: (i32, i32) = (30, 80);
const DARKEST: Color = Color::RGB(50, 50, 50);
const LIGHTEST: Color = Color::RGB(200, 200, 200);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
}

/// Stroke geometry of a shape at a given pose, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outline {
    Polygon([Vector2<f64>; 4]),
    Circle { center: Vector2<f64>, radius: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
    pub size: i32,
}

impl Shape {
    pub fn random<R: Rng + ?Sized>(kind: ShapeKind, rng: &mut R) -> Shape {
        Shape {
            kind,
            color: random_color(rng, DARKEST, LIGHTEST),
            size: random_between(rng, SIZE_RANGE.0, SIZE_RANGE.1),
        }
    }

    pub fn half_size(&self) -> i32 {
        self.size / 2
    }

    /// Squares turn about `position` by `angle` degrees; circles ignore it.
    pub fn outline(&self, position: Vector2<f64>, angle: f64) -> Outline {
        let half = self.half_size() as f64;
        match self.kind {
            ShapeKind::Square => {
                let far = (self.size - self.half_size()) as f64;
                let rotation = Rotation2::new(angle.to_radians());
                let corners = [
                    Vector2::new(-half, -half),
                    Vector2::new(far, -half),
                    Vector2::new(far, far),
                    Vector2::new(-half, far),
                ];
                Outline::Polygon([
                    position + rotation * corners[0],
                    position + rotation * corners[1],
                    position + rotation * corners[2],
                    position + rotation * corners[3],
                ])
            }
            ShapeKind::Circle => Outline::Circle {
                center: position,
                radius: half,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::new_rng;

    fn close(a: Vector2<f64>, b: Vector2<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn test_unrotated_square_corners() {
        let shape = Shape {
            kind: ShapeKind::Square,
            color: Color::RGB(0, 0, 0),
            size: 40,
        };
        match shape.outline(Vector2::new(100., 100.), 0.) {
            Outline::Polygon(corners) => {
                assert!(close(corners[0], Vector2::new(80., 80.)));
                assert!(close(corners[1], Vector2::new(120., 80.)));
                assert!(close(corners[2], Vector2::new(120., 120.)));
                assert!(close(corners[3], Vector2::new(80., 120.)));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_square_rotates_about_center() {
        let shape = Shape {
            kind: ShapeKind::Square,
            color: Color::RGB(0, 0, 0),
            size: 40,
        };
        let center = Vector2::new(100., 100.);
        match shape.outline(center, 90.) {
            Outline::Polygon(corners) => {
                // Screen space, y down: a quarter turn takes top-left to top-right.
                assert!(close(corners[0], Vector2::new(120., 80.)));
                for corner in corners.iter() {
                    assert!(((corner - center).norm() - 800f64.sqrt()).abs() < 1e-9);
                }
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_circle_ignores_angle() {
        let shape = Shape {
            kind: ShapeKind::Circle,
            color: Color::RGB(0, 0, 0),
            size: 31,
        };
        let position = Vector2::new(5., 6.);
        assert_eq!(shape.outline(position, 0.), shape.outline(position, 123.));
        assert_eq!(
            shape.outline(position, 0.),
            Outline::Circle {
                center: position,
                radius: 15.
            }
        );
    }

    #[test]
    fn test_random_shape_ranges() {
        let mut rng = new_rng(Some(21));
        for _ in 0..100 {
            let shape = Shape::random(ShapeKind::Circle, &mut rng);
            assert!(shape.size >= 30 && shape.size < 80);
            assert!(shape.color.r >= 50 && shape.color.r < 200);
            assert!(shape.color.g >= 50 && shape.color.g < 200);
            assert!(shape.color.b >= 50 && shape.color.b < 200);
        }
    }
}
