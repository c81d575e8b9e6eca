//! Input state management

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Tracks keyboard and mouse input state per frame.
///
/// The host feeds window events in as they arrive; states query the
/// aggregate during their `handle_input` calls. The host clears per-frame
/// edges with [`end_frame`](Self::end_frame) after each rendered frame.
#[derive(Default)]
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released this frame
    keys_just_released: HashSet<KeyCode>,

    /// Mouse button state (button index -> pressed)
    mouse_buttons_down: HashSet<u32>,
    /// Mouse buttons pressed this frame
    mouse_buttons_just_pressed: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    /// Process mouse button press
    pub fn process_mouse_button_down(&mut self, button: u32) {
        if !self.mouse_buttons_down.contains(&button) {
            self.mouse_buttons_just_pressed.insert(button);
        }
        self.mouse_buttons_down.insert(button);
    }

    /// Process mouse button release
    pub fn process_mouse_button_up(&mut self, button: u32) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.mouse_buttons_just_pressed.clear();
    }

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Was a key pressed this frame?
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Was a key released this frame?
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Was a mouse button pressed this frame?
    pub fn is_mouse_button_just_pressed(&self, button: u32) -> bool {
        self.mouse_buttons_just_pressed.contains(&button)
    }
}
