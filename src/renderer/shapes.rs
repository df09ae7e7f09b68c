//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::settings::Color;

/// Two triangles covering a rectangle rotated by `angle` around `center`
pub fn quad(center: Vec2, half_extents: Vec2, angle: f32, color: Color) -> [Vertex; 6] {
    let rot = Vec2::from_angle(angle);
    let corner = |x: f32, y: f32| {
        let p = center + rot.rotate(Vec2::new(x * half_extents.x, y * half_extents.y));
        Vertex::new(p.x, p.y, color)
    };

    let bl = corner(-1.0, -1.0);
    let br = corner(1.0, -1.0);
    let tr = corner(1.0, 1.0);
    let tl = corner(-1.0, 1.0);

    [bl, br, tr, tr, tl, bl]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_axis_aligned_quad_corners() {
        let v = quad(Vec2::new(10.0, 20.0), Vec2::new(2.0, 3.0), 0.0, BLACK);
        assert_eq!(v[0].position, [8.0, 17.0]);
        assert_eq!(v[2].position, [12.0, 23.0]);
    }

    #[test]
    fn test_rotated_quad_keeps_center() {
        let center = Vec2::new(5.0, 5.0);
        let v = quad(center, Vec2::new(4.0, 1.0), FRAC_PI_2, BLACK);
        // bottom-left corner (-4, -1) rotated 90° -> (1, -4)
        assert!((v[0].position[0] - 6.0).abs() < 1e-4);
        assert!((v[0].position[1] - 1.0).abs() < 1e-4);
        let sum = [v[0], v[1], v[2], v[4]]
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + Vec2::from(p.position));
        assert!((sum / 4.0 - center).length() < 1e-4);
    }
}
