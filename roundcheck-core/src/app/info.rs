use nalgebra::Vector2;
use std::time::Instant;
use winit::event::{ElementState, MouseButton};

/// The per-frame application information container.
///
/// Holds the input snapshot widgets observe during one update/render pass.
/// All widgets of a frame see the same snapshot, including the same
/// [now](AppInfo::now) timestamp, so derived state cannot tear between a
/// value computed for an old snapshot and one computed for a new snapshot.
pub struct AppInfo {
    /// The position of the cursor. If [None], the cursor left the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// The mouse button events fired this frame.
    pub buttons: Vec<(MouseButton, ElementState)>,
    /// The size of the host surface.
    pub size: Vector2<f64>,
    /// Monotonic timestamp of the current frame, used for animation sampling.
    pub now: Instant,
}

impl AppInfo {
    /// Reset the application information for a new frame.
    pub fn reset(&mut self) {
        self.buttons.clear();
        self.now = Instant::now();
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            cursor_pos: None,
            buttons: Vec::with_capacity(2),
            size: Vector2::new(0.0, 0.0),
            now: Instant::now(),
        }
    }
}
