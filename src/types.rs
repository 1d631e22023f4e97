use crate::fog::FogSettings;
use crate::scene::{Scene, Sphere};

/// Camera uniform buffer data for the trace shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub tan_half_fov: f32,
    pub forward: [f32; 3],
    pub near: f32,
    pub right: [f32; 3],
    pub far: f32,
    pub up: [f32; 3],
    pub _pad: f32,
}

/// Per-frame scene constants: fog band, clear color, live sphere count.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub background: [f32; 3],
    pub fog_far: f32,
    pub sphere_count: u32,
    pub fog_enabled: u32,
    pub _pad: [u32; 2],
}

impl SceneUniform {
    pub fn new(scene: &Scene, background: [f32; 3], fog: Option<&FogSettings>) -> Self {
        let (fog_color, fog_near, fog_far, fog_enabled) = match fog {
            Some(fog) => (fog.color(), fog.near(), fog.far(), 1),
            None => (background, 0.0, 1.0, 0),
        };

        Self {
            fog_color,
            fog_near,
            background,
            fog_far,
            sphere_count: scene.len() as u32,
            fog_enabled,
            _pad: [0; 2],
        }
    }
}

/// Sphere layout shared with the trace shader storage buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub reflectivity: f32,
    pub _pad: [f32; 3],
}

impl From<&Sphere> for SphereData {
    fn from(sphere: &Sphere) -> Self {
        Self {
            center: sphere.center.to_array(),
            radius: sphere.radius,
            color: sphere.color,
            opacity: sphere.opacity,
            reflectivity: sphere.reflectivity,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn scene_uniform_without_fog_disables_it() {
        let scene = Scene::new();
        let uniform = SceneUniform::new(&scene, [0.2, 0.2, 0.2], None);
        assert_eq!(uniform.fog_enabled, 0);
        assert_eq!(uniform.sphere_count, 0);
        assert_eq!(uniform.fog_color, uniform.background);
    }

    #[test]
    fn scene_uniform_carries_fog_band() {
        let mut scene = Scene::new();
        scene.insert(Sphere::new(Vec3::ZERO, 1.0, [1.0, 0.0, 0.0]));

        let fog = FogSettings::new([0.1, 0.2, 0.3], 1.0, 30.0);
        let uniform = SceneUniform::new(&scene, [0.1, 0.2, 0.3], Some(&fog));
        assert_eq!(uniform.fog_enabled, 1);
        assert_eq!(uniform.fog_near, 1.0);
        assert_eq!(uniform.fog_far, 30.0);
        assert_eq!(uniform.sphere_count, 1);
    }

    #[test]
    fn sphere_data_mirrors_sphere_fields() {
        let sphere = Sphere::reflective(Vec3::new(1.0, 2.0, 3.0), 4.0, [0.5, 0.5, 0.5], 0.3);
        let data = SphereData::from(&sphere);
        assert_eq!(data.center, [1.0, 2.0, 3.0]);
        assert_eq!(data.radius, 4.0);
        assert_eq!(data.reflectivity, 0.3);
        assert_eq!(data.opacity, 1.0);
    }
}
