use glam::Vec3;

use crate::fog::FogSettings;
use crate::math::hsv_to_rgb;
use crate::scene::{Scene, Sphere};

/// Start position, yaw and pitch for the showcase camera.
pub const FOG_CAMERA_START: (Vec3, f32, f32) = (
    Vec3::new(-4.0, 2.0, 10.0),
    std::f32::consts::PI,
    -0.1,
);

/// Light blue, the classic fog color.
const FOG_COLOR: [f32; 3] = [0.678, 0.847, 0.902];

pub fn default_fog() -> FogSettings {
    FogSettings::new(FOG_COLOR, 1.0, 30.0)
}

/// Static showcase arrangement: a rainbow ring of spheres receding into
/// the fog around a pair of mirrored centerpieces, over a huge ground
/// sphere standing in for a floor.
pub fn create_fog_garden() -> Scene {
    let mut scene = Scene::new();

    scene.insert(Sphere::new(
        Vec3::new(0.0, -1001.0, 0.0),
        1000.0,
        [0.35, 0.4, 0.35],
    ));

    let ring_count = 12;
    for i in 0..ring_count {
        let angle = (i as f32 / ring_count as f32) * std::f32::consts::TAU;
        let radius = 9.0;
        let center = Vec3::new(angle.cos() * radius - 4.0, 0.0, angle.sin() * radius - 2.0);
        scene.insert(Sphere::new(
            center,
            1.0,
            hsv_to_rgb(i as f32 / ring_count as f32, 0.8, 0.9),
        ));
    }

    scene.insert(Sphere::reflective(
        Vec3::new(-5.5, 0.5, -2.0),
        1.5,
        [0.9, 0.9, 0.9],
        0.7,
    ));
    scene.insert(Sphere::reflective(
        Vec3::new(-2.5, 0.2, -2.0),
        1.2,
        [0.8, 0.6, 0.2],
        0.4,
    ));

    scene
}
