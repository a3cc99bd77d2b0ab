// NPC entity

use glam::Vec3;

use crate::core::math::approach_angle;

use super::state::{NpcActivity, NpcStateMachine};

/// How quickly an NPC turns to face the player
const FACE_RATE: f32 = 1.8;

/// An NPC posted at a checkpoint
///
/// Identity is the checkpoint id; the NPC never moves, only turns toward
/// the player and animates through its state machine.
#[derive(Debug)]
pub struct Npc {
    /// Same id as the owning checkpoint
    pub id: u32,
    /// Fixed world position
    pub position: Vec3,
    /// Art asset for the renderer; None means placeholder geometry
    pub asset_id: Option<&'static str>,
    /// Per-instance phase offset so idle bobbing is not synchronized
    pub wave_phase: f32,
    state: NpcStateMachine,
    /// Whether the player is inside the proximity (bubble) radius
    near_player: bool,
    /// Facing angle, smoothed toward the player
    facing: f32,
}

impl Npc {
    /// Create an NPC at a fixed position
    pub fn new(id: u32, position: Vec3, asset_id: Option<&'static str>, wave_phase: f32) -> Self {
        Self {
            id,
            position,
            asset_id,
            wave_phase,
            state: NpcStateMachine::new(),
            near_player: false,
            facing: 0.0,
        }
    }

    /// Current activity
    pub fn activity(&self) -> NpcActivity {
        self.state.activity()
    }

    /// State machine access for dialog/session transitions
    pub fn state_mut(&mut self) -> &mut NpcStateMachine {
        &mut self.state
    }

    /// Whether the owning checkpoint completed and froze this NPC
    pub fn is_frozen(&self) -> bool {
        self.state.is_frozen()
    }

    /// Whether the player is within the proximity radius (bubble visible
    /// unless the checkpoint is completed)
    pub fn is_near_player(&self) -> bool {
        self.near_player
    }

    /// Whether the speech bubble should render
    pub fn bubble_visible(&self) -> bool {
        self.near_player && !self.state.is_frozen()
    }

    /// Smoothed facing angle
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Distance to a position, on the ground plane
    pub fn distance_to(&self, other: Vec3) -> f32 {
        let dx = other.x - self.position.x;
        let dz = other.z - self.position.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Per-tick update: proximity edges, timers, facing
    pub fn update(&mut self, dt: f32, player_pos: Vec3, proximity_radius: f32) {
        let near = self.distance_to(player_pos) < proximity_radius;
        if near != self.near_player {
            self.near_player = near;
            if near {
                self.state.player_entered();
            } else {
                self.state.player_left();
            }
        }

        self.state.update(dt);

        // Turn toward the player while active; frozen NPCs hold their pose
        if !self.state.is_frozen() {
            let dx = player_pos.x - self.position.x;
            let dz = player_pos.z - self.position.z;
            let target = dx.atan2(dz);
            self.facing = approach_angle(self.facing, target, FACE_RATE, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const PROXIMITY: f32 = 20.0;

    fn npc_at_origin() -> Npc {
        Npc::new(0, Vec3::ZERO, Some("character-b"), 1.0)
    }

    #[test]
    fn test_waves_when_player_enters() {
        let mut npc = npc_at_origin();
        npc.update(DT, Vec3::new(100.0, 0.0, 0.0), PROXIMITY);
        assert_eq!(npc.activity(), NpcActivity::Idle);
        assert!(!npc.is_near_player());

        npc.update(DT, Vec3::new(10.0, 0.0, 0.0), PROXIMITY);
        assert_eq!(npc.activity(), NpcActivity::Waving);
        assert!(npc.is_near_player());
        assert!(npc.bubble_visible());
    }

    #[test]
    fn test_idles_when_player_leaves() {
        let mut npc = npc_at_origin();
        npc.update(DT, Vec3::new(10.0, 0.0, 0.0), PROXIMITY);
        npc.update(DT, Vec3::new(100.0, 0.0, 0.0), PROXIMITY);
        assert_eq!(npc.activity(), NpcActivity::Idle);
        assert!(!npc.bubble_visible());
    }

    #[test]
    fn test_edge_not_retriggered_every_tick() {
        let mut npc = npc_at_origin();
        npc.update(DT, Vec3::new(10.0, 0.0, 0.0), PROXIMITY);
        npc.state_mut().start_dialog();
        assert_eq!(npc.activity(), NpcActivity::Excited);

        // Staying inside the radius must not re-fire player_entered
        npc.update(DT, Vec3::new(10.0, 0.0, 0.0), PROXIMITY);
        assert_eq!(npc.activity(), NpcActivity::Excited);
    }

    #[test]
    fn test_frozen_npc_keeps_no_bubble() {
        let mut npc = npc_at_origin();
        npc.state_mut().freeze();
        npc.update(DT, Vec3::new(5.0, 0.0, 0.0), PROXIMITY);
        assert!(!npc.bubble_visible());
    }

    #[test]
    fn test_distance_ignores_height() {
        let npc = npc_at_origin();
        let d = npc.distance_to(Vec3::new(3.0, 50.0, 4.0));
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_turns_toward_player() {
        let mut npc = npc_at_origin();
        // Player due +X: target facing PI/2
        for _ in 0..600 {
            npc.update(DT, Vec3::new(10.0, 0.0, 0.0), PROXIMITY);
        }
        assert!((npc.facing() - std::f32::consts::FRAC_PI_2).abs() < 0.05);
    }
}
