use glam::Vec2;

use crate::math::Ray;
use crate::scene::{Scene, SphereId};

/// Convert a window-space cursor position (pixels, y down) to normalized
/// device coordinates (x right, y up, both in [-1, 1]).
pub fn ndc_from_window(position: (f32, f32), size: (u32, u32)) -> Vec2 {
    Vec2::new(
        (position.0 / size.0 as f32) * 2.0 - 1.0,
        -(position.1 / size.1 as f32) * 2.0 + 1.0,
    )
}

/// Nearest-intersection query against all live spheres.
pub fn pick_sphere(scene: &Scene, ray: &Ray) -> Option<SphereId> {
    let mut nearest: Option<(SphereId, f32)> = None;

    for (id, sphere) in scene.iter() {
        if let Some(t) = sphere.intersect(ray) {
            match nearest {
                Some((_, best)) if t >= best => {}
                _ => nearest = Some((id, t)),
            }
        }
    }

    nearest.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Sphere;
    use glam::Vec3;

    #[test]
    fn ndc_center_and_corners() {
        let size = (800, 600);

        let center = ndc_from_window((400.0, 300.0), size);
        assert!(center.abs_diff_eq(Vec2::ZERO, 1e-6));

        let top_left = ndc_from_window((0.0, 0.0), size);
        assert!(top_left.abs_diff_eq(Vec2::new(-1.0, 1.0), 1e-6));

        let bottom_right = ndc_from_window((800.0, 600.0), size);
        assert!(bottom_right.abs_diff_eq(Vec2::new(1.0, -1.0), 1e-6));
    }

    #[test]
    fn picks_nothing_in_an_empty_scene() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(pick_sphere(&scene, &ray).is_none());
    }

    #[test]
    fn picks_the_nearest_of_two_overlapping_spheres() {
        let mut scene = Scene::new();
        let far = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 2.0, [0.0, 1.0, 0.0]));
        let near = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, [1.0, 0.0, 0.0]));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(pick_sphere(&scene, &ray), Some(near));
        assert_ne!(pick_sphere(&scene, &ray), Some(far));
    }

    #[test]
    fn ray_off_to_the_side_misses() {
        let mut scene = Scene::new();
        scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, [1.0, 0.0, 0.0]));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!(pick_sphere(&scene, &ray).is_none());
    }
}
