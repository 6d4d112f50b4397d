//! Keyboard state for the spinning-object controls.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held-key state sampled once per frame by the active scene.
///
/// Q, W and E spin the object about x, y and z respectively while held.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    pub rotate_x_held: bool,
    pub rotate_y_held: bool,
    pub rotate_z_held: bool,
}

impl InputState {
    /// Fold one winit keyboard event into the held-key state.
    ///
    /// Returns `true` when the event requests application exit (Escape).
    pub fn apply(&mut self, event: &KeyEvent) -> bool {
        let held = event.state == ElementState::Pressed;
        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyQ) => self.rotate_x_held = held,
            PhysicalKey::Code(KeyCode::KeyW) => self.rotate_y_held = held,
            PhysicalKey::Code(KeyCode::KeyE) => self.rotate_z_held = held,
            PhysicalKey::Code(KeyCode::Escape) => return held,
            _ => {}
        }
        false
    }
}
