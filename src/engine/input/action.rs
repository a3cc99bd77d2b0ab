// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Sprint,

    // Interaction
    Interact,
    Cancel,

    // Camera nudges (mouse drag handled separately by the manager)
    CameraLeft,
    CameraRight,

    // Meta actions
    Pause,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    #[allow(dead_code)]
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard bindings (WASD + arrows, standard walking-sim layout)
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement
        (InputSource::key(KeyCode::KeyW), Action::MoveForward),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveForward),
        (InputSource::key(KeyCode::KeyS), Action::MoveBackward),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveBackward),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ShiftLeft), Action::Sprint),
        (InputSource::key(KeyCode::ShiftRight), Action::Sprint),
        // Interaction (E talks, Escape closes)
        (InputSource::key(KeyCode::KeyE), Action::Interact),
        (InputSource::key(KeyCode::Escape), Action::Cancel),
        // Camera nudges (E is reserved for interaction, so Q/R rotate)
        (InputSource::key(KeyCode::KeyQ), Action::CameraLeft),
        (InputSource::key(KeyCode::KeyR), Action::CameraRight),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
    ]
}
