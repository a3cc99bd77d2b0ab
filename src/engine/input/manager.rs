// Input manager - Main coordination system for all input

use super::action::Action;
use super::config::InputConfig;
use super::state::InputState;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

use super::action::InputSource;

/// Main input manager translating winit events into game input
///
/// Keyboard and mouse buttons go through the action bindings; raw mouse
/// motion and wheel scroll are accumulated per frame for the orbit camera.
pub struct InputManager {
    /// Key/button bindings
    config: InputConfig,

    /// Action state for the avatar
    state: InputState,

    /// Whether a camera-drag mouse button is currently held
    dragging: bool,

    /// Accumulated mouse drag since last frame (pixels)
    drag_delta: (f32, f32),

    /// Accumulated wheel scroll since last frame
    scroll_delta: f32,
}

impl InputManager {
    /// Create a new input manager with the standard bindings
    pub fn new() -> Self {
        Self {
            config: InputConfig::standard(),
            state: InputState::new(),
            dragging: false,
            drag_delta: (0.0, 0.0),
            scroll_delta: 0.0,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);

            if let Some(action) = self.config.get_action(source) {
                match event.state {
                    ElementState::Pressed => {
                        if !event.repeat {
                            // Only register if not a key repeat
                            self.state.press(action);
                        }
                    }
                    ElementState::Released => {
                        self.state.release(action);
                    }
                }
            }
        }
    }

    /// Process a mouse button event (left or right button drags the camera)
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match button {
            MouseButton::Left | MouseButton::Right => {
                self.dragging = state == ElementState::Pressed;
            }
            _ => {
                let source = InputSource::mouse(button);
                if let Some(action) = self.config.get_action(source) {
                    match state {
                        ElementState::Pressed => self.state.press(action),
                        ElementState::Released => self.state.release(action),
                    }
                }
            }
        }
    }

    /// Process raw mouse motion (device deltas, pixels)
    /// Only accumulates while a drag button is held
    pub fn process_mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.dragging {
            self.drag_delta.0 += dx;
            self.drag_delta.1 += dy;
        }
    }

    /// Process mouse wheel scroll (positive = away from the user)
    pub fn process_scroll(&mut self, delta_y: f32) {
        self.scroll_delta += delta_y;
    }

    /// Roll the input state over to a new frame
    /// Call this once per frame after processing all events
    pub fn end_frame(&mut self) {
        self.state.update();
        self.drag_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Get the current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Get mutable input state (for buffered-action consumption)
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Whether the camera is being dragged this frame
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulated camera drag since the last frame (pixels)
    pub fn drag_delta(&self) -> (f32, f32) {
        self.drag_delta
    }

    /// Accumulated wheel scroll since the last frame
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Get the binding configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get mutable binding configuration
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.state.reset();
        self.dragging = false;
        self.drag_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
