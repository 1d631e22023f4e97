pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod fog;
pub mod game;
pub mod math;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod types;
pub mod ui;

pub use game::{MatchBoard, MatchGame};
pub use scene::{Scene, Sphere, SphereId};
