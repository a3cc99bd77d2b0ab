// Frame-by-frame input state

use super::action::Action;
use super::buffer::InputBuffer;
use std::collections::HashSet;

/// Input state for the player avatar
///
/// Tracks which actions are held, which changed this frame, and keeps a
/// short buffer so taps survive until the next simulation tick.
#[derive(Debug)]
pub struct InputState {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,

    /// Actions that were pressed in the previous frame
    previous_pressed: HashSet<Action>,

    /// Input buffer for delayed/buffered inputs
    buffer: InputBuffer,
}

impl InputState {
    /// Create a new input state
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            previous_pressed: HashSet::new(),
            buffer: InputBuffer::new(),
        }
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action is held (pressed for multiple frames)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Check if an action is buffered
    pub fn is_buffered(&self, action: Action) -> bool {
        self.buffer.has(action)
    }

    /// Consume a buffered action
    /// Returns true if the action was buffered and consumed
    pub fn consume_buffered(&mut self, action: Action) -> bool {
        self.buffer.consume(action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
            // Also add to buffer for reliable input detection
            self.buffer.push(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Roll the state over to a new frame
    /// Call this once per frame after processing all events
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
        self.buffer.update();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
        self.buffer.clear();
    }

    /// Get directional input as raw axis values (-1.0 to 1.0)
    /// Returns (right, forward); opposing keys cancel out
    pub fn move_axes(&self) -> (f32, f32) {
        let mut right = 0.0;
        let mut forward = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            right -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            right += 1.0;
        }
        if self.is_pressed(Action::MoveForward) {
            forward += 1.0;
        }
        if self.is_pressed(Action::MoveBackward) {
            forward -= 1.0;
        }

        (right, forward)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
