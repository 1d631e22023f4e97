use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::picking::ndc_from_window;

/// Adapter that bridges winit pointer events to the per-frame game step.
///
/// Clicks are queued at the position they landed and drained strictly
/// between frames, so pick handling never interleaves with evaluation.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last known cursor position in window pixels.
    position: Option<(f32, f32)>,
    /// Left-button presses since the last drain, in window pixels.
    clicks: Vec<(f32, f32)>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(position) = self.position {
                    self.clicks.push(position);
                }
            }
            _ => {}
        }
    }

    /// Cursor position in normalized device coordinates, if the cursor has
    /// entered the window.
    pub fn ndc(&self, size: (u32, u32)) -> Option<Vec2> {
        self.position.map(|p| ndc_from_window(p, size))
    }

    /// Drain queued clicks as normalized device coordinates.
    pub fn take_clicks(&mut self, size: (u32, u32)) -> Vec<Vec2> {
        self.clicks
            .drain(..)
            .map(|p| ndc_from_window(p, size))
            .collect()
    }
}
