use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunable settings with compiled-in defaults matching the classic demo:
/// 300 spheres of radius 8 scattered in a 400x300x500 field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sphere_count: usize,
    pub sphere_radius: f32,
    pub field_extent: [f32; 3],
    pub highlight_opacity: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sphere_count: 300,
            sphere_radius: 8.0,
            field_extent: [400.0, 300.0, 500.0],
            highlight_opacity: 0.5,
            window_width: 800,
            window_height: 600,
        }
    }
}

/// Load settings from an optional JSON file. Absent file path means
/// defaults; a present but unreadable or malformed file is an error.
pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        None => Ok(Settings::default()),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            let settings = serde_json::from_str(&text)
                .with_context(|| format!("parsing settings file {}", path.display()))?;
            Ok(settings)
        }
    }
}
