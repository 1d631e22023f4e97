/// Linear depth fog parameters. Near and far clamp each other so the fog
/// band never inverts, and in the showcase the clear color tracks the fog
/// color so distant objects dissolve into the background.
#[derive(Debug, Clone, Copy)]
pub struct FogSettings {
    color: [f32; 3],
    near: f32,
    far: f32,
}

impl FogSettings {
    pub fn new(color: [f32; 3], near: f32, far: f32) -> Self {
        Self {
            color,
            near,
            far: far.max(near),
        }
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
        self.far = self.far.max(near);
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
        self.near = self.near.min(far);
    }

    /// Blend weight toward the fog color at `distance`: 0 before near,
    /// 1 past far, linear in between.
    pub fn factor(&self, distance: f32) -> f32 {
        if self.far <= self.near {
            return if distance >= self.far { 1.0 } else { 0.0 };
        }
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}
