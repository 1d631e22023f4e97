use glam::Vec3;

use crate::config::Settings;
use crate::scene::{Scene, Spawner};

/// Neutral grey backdrop (0x505050) behind the match field.
pub const MATCH_BACKGROUND: [f32; 3] = [0.314, 0.314, 0.314];

/// Start position, yaw and pitch looking into the field along -Z.
pub const MATCH_CAMERA_START: (Vec3, f32, f32) = (
    Vec3::new(10.0, 10.0, 150.0),
    std::f32::consts::PI,
    0.0,
);

/// The match field starts empty; its spawner fills it over time with
/// palette-colored spheres at an accelerating pace.
pub fn create_match_field(settings: &Settings) -> (Scene, Spawner) {
    let scene = Scene::new();
    let spawner = Spawner::new(
        settings.sphere_count,
        Vec3::from_array(settings.field_extent),
        settings.sphere_radius,
    );
    (scene, spawner)
}
