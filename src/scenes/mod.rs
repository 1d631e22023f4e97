mod fog_garden;
mod match_field;

pub use fog_garden::{create_fog_garden, default_fog, FOG_CAMERA_START};
pub use match_field::{create_match_field, MATCH_BACKGROUND, MATCH_CAMERA_START};
