use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

use glam::Vec3;
use log::debug;

use crate::game::MatchBoard;
use crate::math::Ray;

/// Quantized color used as the match key. The spawn palette only produces
/// exact channel levels, so quantizing f32 back to u8 is lossless and keeps
/// float drift out of equality checks.
pub type ColorKey = [u8; 3];

/// Stable handle to a sphere in a [`Scene`]. Ids are never reused, so a
/// handle to a removed sphere simply dangles (all lookups return None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereId(u32);

/// A pickable sphere: geometry plus the display attributes the renderer
/// and the match game care about.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub reflectivity: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, color: [f32; 3]) -> Self {
        Self {
            center,
            radius,
            color,
            opacity: 1.0,
            reflectivity: 0.0,
        }
    }

    pub fn reflective(center: Vec3, radius: f32, color: [f32; 3], reflectivity: f32) -> Self {
        Self {
            reflectivity,
            ..Self::new(center, radius, color)
        }
    }

    /// Nearest positive ray intersection distance, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.dir.dot(ray.dir);
        let half_b = oc.dot(ray.dir);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t = (-half_b - sqrt_d) / a;
        if t > 1e-4 {
            return Some(t);
        }

        let t = (-half_b + sqrt_d) / a;
        if t > 1e-4 {
            Some(t)
        } else {
            None
        }
    }

    pub fn color_key(&self) -> ColorKey {
        [
            (self.color[0] * 255.0).round() as u8,
            (self.color[1] * 255.0).round() as u8,
            (self.color[2] * 255.0).round() as u8,
        ]
    }
}

struct Entry {
    id: SphereId,
    sphere: Sphere,
}

/// Flat container of live spheres. A few hundred objects at most, so all
/// queries are linear, matching the nearest-hit picking they serve.
#[derive(Default)]
pub struct Scene {
    entries: Vec<Entry>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sphere: Sphere) -> SphereId {
        let id = SphereId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, sphere });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: SphereId) -> Option<&Sphere> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.sphere)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SphereId, &Sphere)> {
        self.entries.iter().map(|e| (e.id, &e.sphere))
    }
}

impl MatchBoard for Scene {
    type Id = SphereId;
    type Key = ColorKey;

    fn visual_key(&self, id: SphereId) -> Option<ColorKey> {
        self.get(id).map(Sphere::color_key)
    }

    fn remove(&mut self, id: SphereId) {
        self.entries.retain(|e| e.id != id);
    }

    fn set_opacity(&mut self, id: SphereId, opacity: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.sphere.opacity = opacity;
        }
    }

    fn live_ids(&self) -> Vec<SphereId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

/// Interval shrink factor applied after every spawn. The field starts
/// filling slowly and accelerates until the target count is reached.
const SPAWN_INTERVAL_DECAY: f32 = 0.9;
const MIN_SPAWN_INTERVAL: f32 = 0.01;

/// Gradually populates a scene with palette-colored spheres. Placement and
/// color derive from hashing the spawn index, so no rand dependency and a
/// fresh layout every run.
pub struct Spawner {
    target: usize,
    spawned: usize,
    interval: f32,
    countdown: f32,
    extent: Vec3,
    radius: f32,
    hasher_builder: RandomState,
}

impl Spawner {
    pub fn new(target: usize, extent: Vec3, radius: f32) -> Self {
        Self {
            target,
            spawned: 0,
            interval: 1.0,
            countdown: 1.0,
            extent,
            radius,
            hasher_builder: RandomState::new(),
        }
    }

    pub fn done(&self) -> bool {
        self.spawned >= self.target
    }

    /// Advance by `delta` seconds, inserting spheres as their spawn times
    /// elapse.
    pub fn update(&mut self, delta: f32, scene: &mut Scene) {
        if self.done() {
            return;
        }

        self.countdown -= delta;
        while self.countdown <= 0.0 && !self.done() {
            scene.insert(self.make_sphere(self.spawned));
            self.spawned += 1;

            self.interval = (self.interval * SPAWN_INTERVAL_DECAY).max(MIN_SPAWN_INTERVAL);
            self.countdown += self.interval;
        }

        if self.done() {
            debug!("spawn complete: {} spheres", self.spawned);
        }
    }

    fn hash(&self, index: usize) -> u64 {
        let mut hasher = self.hasher_builder.build_hasher();
        index.hash(&mut hasher);
        hasher.finish()
    }

    fn make_sphere(&self, index: usize) -> Sphere {
        let hash = self.hash(index);

        let x = (((hash >> 24) % 1000) as f32 / 1000.0 - 0.5) * self.extent.x;
        let y = (((hash >> 34) % 1000) as f32 / 1000.0 - 0.5) * self.extent.y;
        let z = (((hash >> 44) % 1000) as f32 / 1000.0 - 0.5) * self.extent.z;

        Sphere::new(
            Vec3::new(x, y, z),
            self.radius,
            palette_color(hash as usize),
        )
    }
}

/// Eight-color palette: each RGB channel takes one of two levels, chosen by
/// the low bits of `selector`. Every color has many potential partners in a
/// field of a few hundred spheres.
pub fn palette_color(selector: usize) -> [f32; 3] {
    let r = if selector & 1 == 0 { 128 } else { 255 };
    let g = if selector & 2 == 0 { 128 } else { 255 };
    let b = if selector & 4 == 0 { 96 } else { 224 };
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}
