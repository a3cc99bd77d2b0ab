// Input handling system
//
// Action-mapped keyboard and mouse input for the walking sim, with support
// for input buffering and rebindable keys.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `buffer`: Input buffering for reliable input detection
// - `state`: Frame-by-frame input state (pressed / just pressed / released)
// - `config`: Input configuration and remapping system
// - `manager`: Main input manager translating winit events
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::new();
//
// // In your event loop, feed winit events
// input.process_keyboard_event(&key_event);
//
// // At the end of each frame, roll the state over
// input.end_frame();
//
// // Query input state
// if input.state().just_pressed(Action::Interact) {
//     // Talk to the nearest NPC
// }
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::InputState;
