// Game layer: the walking sim itself
//
// - World build (street layout, colliders, checkpoint positions)
// - Player movement, stamina and orbit camera
// - NPCs with proximity/dialog state machines
// - Checkpoint registry gating video lessons
// - The session object orchestrating one tick at a time

pub mod assets;
pub mod checkpoints;
pub mod collaborators;
pub mod dialog;
pub mod events;
pub mod npc;
pub mod player;
pub mod session;
pub mod world;

// Re-export commonly used types
pub use checkpoints::{Checkpoint, CheckpointRegistry};
pub use events::{Cue, GameEvent};
pub use session::GameSession;
pub use world::{World, WorldConfig};
