// Game session: the per-tick orchestrator
//
// Owns the world, player, NPCs, dialog and checkpoint registry, and runs
// one simulation tick per fixed timestep. No module-level singletons:
// construct a session, feed it input, drain its events.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::input::{Action, InputManager};
use crate::engine::physics::CollisionResolver;
use crate::game::assets::{AssetCategory, AssetManifest};
use crate::game::checkpoints::{standard_topics, CheckpointRegistry};
use crate::game::dialog::{DialogOutcome, DialogSession};
use crate::game::events::{Cue, EventQueue, GameEvent};
use crate::game::npc::Npc;
use crate::game::player::{MoveIntent, OrbitCamera, PlayerController};
use crate::game::world::{World, WorldConfig, WorldError};

/// Distance at which an NPC's speech bubble appears
pub const PROXIMITY_RADIUS: f32 = 20.0;
/// Shorter distance at which the player may open a dialog
pub const INTERACTION_RADIUS: f32 = 12.0;

/// Player spawn position on the road
const SPAWN: Vec3 = Vec3::new(0.0, 0.0, 100.0);

/// Everything the simulation owns, advanced one tick at a time
pub struct GameSession {
    resolver: CollisionResolver,
    world: World,
    player: PlayerController,
    camera: OrbitCamera,
    npcs: Vec<Npc>,
    registry: CheckpointRegistry,
    dialog: DialogSession,
    events: EventQueue,
    rng: ChaCha8Rng,
    /// The sole NPC currently in interaction range, if any
    interactable: Option<u32>,
    /// Controls engage on the first movement input (start screen gone)
    controls_locked: bool,
}

impl GameSession {
    /// Build a session from a world config and RNG seed
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, WorldError> {
        let manifest = AssetManifest::standard();
        let world = World::build(config, &manifest)?;

        let mut resolver = CollisionResolver::new(world.bounds());
        for (center, half) in world.collider_boxes() {
            resolver.colliders_mut().add_box(center, half);
        }

        let registry = CheckpointRegistry::create_all(&world, &standard_topics());

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let npcs = Self::spawn_npcs(&world, &registry, &manifest, &mut rng);

        log::info!(
            "Session ready: {} buildings, {} checkpoints, {} colliders",
            world.buildings().len(),
            registry.total(),
            resolver.colliders().len()
        );

        Ok(Self {
            resolver,
            world,
            player: PlayerController::new(SPAWN),
            camera: OrbitCamera::new(),
            npcs,
            registry,
            dialog: DialogSession::new(),
            events: EventQueue::new(),
            rng,
            interactable: None,
            controls_locked: false,
        })
    }

    /// One NPC per checkpoint, posted at its building in id order
    fn spawn_npcs(
        world: &World,
        registry: &CheckpointRegistry,
        manifest: &AssetManifest,
        rng: &mut ChaCha8Rng,
    ) -> Vec<Npc> {
        let characters = manifest.ids_in(AssetCategory::Character);
        if characters.len() < 2 {
            log::warn!("No NPC character assets available, using placeholders");
        }

        registry
            .iter()
            .map(|checkpoint| {
                let building = &world.buildings()[checkpoint.building_index];
                // Skip the first character model, it's the player's
                let asset_id = if characters.len() >= 2 {
                    let pick = (checkpoint.id as usize % (characters.len() - 1)) + 1;
                    Some(characters[pick])
                } else {
                    None
                };
                Npc::new(
                    checkpoint.id,
                    world.npc_position(building),
                    asset_id,
                    rng.gen_range(0.0..TAU),
                )
            })
            .collect()
    }

    /// Engage controls explicitly (start button)
    pub fn start(&mut self) {
        if !self.controls_locked {
            self.controls_locked = true;
            log::info!("Controls engaged");
        }
    }

    /// Advance the simulation one tick
    pub fn tick(&mut self, input: &mut InputManager, dt: f32) {
        self.apply_input(input, dt);

        self.player
            .update(dt, &mut self.camera, &self.resolver, &mut self.events);

        self.dialog.update(dt, &mut self.events);

        self.update_npcs(dt);

        // No interaction while a dialog is open or a lesson is playing
        if self.controls_locked && !self.dialog.is_open() && self.registry.active().is_none() {
            self.scan_interactable();
        }
    }

    /// Take all events queued during the last tick(s)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Route a finished video into checkpoint completion
    ///
    /// The sole completion path; movement is re-enabled here.
    pub fn complete_checkpoint(&mut self, id: u32) {
        if self.registry.complete(id, &mut self.events) {
            if let Some(npc) = self.npcs.get_mut(id as usize) {
                npc.state_mut().freeze();
            }
            self.player.set_can_move(true);
        }
    }

    /// Full-session restart: clear progress, unfreeze nothing (NPCs are
    /// rebuilt), respawn the player
    pub fn reset(&mut self) {
        self.registry.reset();
        self.dialog = DialogSession::new();
        let manifest = AssetManifest::standard();
        self.npcs = Self::spawn_npcs(&self.world, &self.registry, &manifest, &mut self.rng);
        self.interactable = None;
        self.player = PlayerController::new(SPAWN);
        self.player.set_can_move(true);
    }

    // --- accessors for the host/renderer ---

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn registry(&self) -> &CheckpointRegistry {
        &self.registry
    }

    pub fn dialog(&self) -> &DialogSession {
        &self.dialog
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn interactable(&self) -> Option<u32> {
        self.interactable
    }

    // --- internals ---

    fn apply_input(&mut self, input: &mut InputManager, _dt: f32) {
        let state = input.state();

        let intent = MoveIntent {
            forward: state.is_pressed(Action::MoveForward),
            backward: state.is_pressed(Action::MoveBackward),
            left: state.is_pressed(Action::MoveLeft),
            right: state.is_pressed(Action::MoveRight),
        };

        // First movement input engages the controls
        if !self.controls_locked && intent.any() {
            self.start();
        }

        self.player.set_intent(intent);
        self.player
            .set_sprint_requested(state.is_pressed(Action::Sprint), &mut self.events);

        // Camera: drag, wheel, keyboard nudges
        self.camera.set_dragging(input.is_dragging());
        let (dx, dy) = input.drag_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.apply_drag(dx, dy);
        }
        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.camera.apply_zoom(scroll);
        }
        if state.just_pressed(Action::CameraLeft) {
            self.camera.nudge(1.0);
        }
        if state.just_pressed(Action::CameraRight) {
            self.camera.nudge(-1.0);
        }

        // Interact/cancel go through the buffer so taps are never lost
        if input.state_mut().consume_buffered(Action::Interact) {
            self.on_interact();
        }
        if input.state_mut().consume_buffered(Action::Cancel) {
            self.on_cancel();
        }
    }

    /// Interact key: advance an open dialog, otherwise talk to the
    /// interactable NPC
    fn on_interact(&mut self) {
        if self.dialog.is_open() {
            match self.dialog.advance(&mut self.events) {
                DialogOutcome::Finished { npc_id } => {
                    // Hand off to the checkpoint trigger flow; movement
                    // comes back, then the trigger takes it again
                    self.player.set_can_move(true);
                    if self.registry.trigger(npc_id, &mut self.events) {
                        self.player.set_can_move(false);
                    }
                }
                DialogOutcome::Advanced | DialogOutcome::NotOpen => {}
            }
            return;
        }

        // A playing lesson blocks new dialogs (single active checkpoint)
        if self.registry.active().is_some() {
            return;
        }
        let Some(npc_id) = self.interactable else {
            return;
        };
        let Some(topic) = self.registry.get(npc_id).map(|c| c.topic) else {
            log::warn!("Interactable npc {} has no checkpoint", npc_id);
            return;
        };

        if self.dialog.open(npc_id, topic, &mut self.rng, &mut self.events) {
            self.player.set_can_move(false);
            if let Some(npc) = self.npcs.get_mut(npc_id as usize) {
                npc.state_mut().start_dialog();
            }
            // The talk prompt makes no sense while talking
            if self.interactable.take().is_some() {
                self.events.push(GameEvent::PromptHidden);
            }
        }
    }

    /// Cancel key: close the dialog without triggering the checkpoint
    fn on_cancel(&mut self) {
        if self.dialog.cancel(&mut self.events).is_some() {
            self.player.set_can_move(true);
        }
    }

    fn update_npcs(&mut self, dt: f32) {
        let player_pos = self.player.position();
        for npc in &mut self.npcs {
            npc.update(dt, player_pos, PROXIMITY_RADIUS);
        }
    }

    /// Find the nearest NPC strictly inside the interaction radius
    ///
    /// NPCs are visited in checkpoint-id order, so ties resolve
    /// deterministically to the lowest id. Entering the role plays the
    /// proximity ping exactly once; leaving hides the prompt.
    fn scan_interactable(&mut self) {
        let player_pos = self.player.position();
        let mut nearest: Option<(u32, f32)> = None;

        for npc in &self.npcs {
            if self.registry.is_completed(npc.id) {
                continue;
            }
            let distance = npc.distance_to(player_pos);
            if distance >= INTERACTION_RADIUS {
                continue;
            }
            let closer = match nearest {
                None => true,
                Some((_, best)) => distance < best,
            };
            if closer {
                nearest = Some((npc.id, distance));
            }
        }

        let candidate = nearest.map(|(id, _)| id);
        if candidate != self.interactable {
            if self.interactable.is_some() {
                self.events.push(GameEvent::PromptHidden);
            }
            if let Some(npc_id) = candidate {
                self.events.push(GameEvent::PromptShown { npc_id });
                self.events.cue(Cue::ProximityPing);
            }
            self.interactable = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> GameSession {
        GameSession::new(WorldConfig::default(), 42).unwrap()
    }

    fn idle_input() -> InputManager {
        InputManager::new()
    }

    /// Run ticks with no input
    fn run(session: &mut GameSession, input: &mut InputManager, ticks: usize) {
        for _ in 0..ticks {
            session.tick(input, DT);
            input.end_frame();
        }
    }

    /// Teleport the player next to an NPC and rescan
    fn stand_near_npc(session: &mut GameSession, npc_id: u32) {
        let npc_pos = session.npcs()[npc_id as usize].position;
        session.start();
        session.player.set_position(npc_pos + Vec3::new(3.0, 0.0, 0.0));
        let mut input = idle_input();
        run(session, &mut input, 2);
    }

    fn press_interact(session: &mut GameSession) {
        let mut input = idle_input();
        input.state_mut().press(Action::Interact);
        session.tick(&mut input, DT);
        input.end_frame();
    }

    fn press_cancel(session: &mut GameSession) {
        let mut input = idle_input();
        input.state_mut().press(Action::Cancel);
        session.tick(&mut input, DT);
        input.end_frame();
    }

    #[test]
    fn test_session_builds() {
        let session = session();
        assert_eq!(session.npcs().len(), 20);
        assert_eq!(session.registry().total(), 20);
        assert_eq!(session.player().position(), SPAWN);
    }

    #[test]
    fn test_npc_ids_match_checkpoints() {
        let session = session();
        for (i, npc) in session.npcs().iter().enumerate() {
            assert_eq!(npc.id, i as u32);
        }
    }

    #[test]
    fn test_prompt_on_approach() {
        let mut session = session();
        stand_near_npc(&mut session, 4);

        assert_eq!(session.interactable(), Some(4));
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::PromptShown { npc_id: 4 }));
        assert!(events.contains(&GameEvent::Cue(Cue::ProximityPing)));
    }

    #[test]
    fn test_proximity_ping_fires_once() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        session.drain_events();

        // Staying put must not re-ping every tick
        let mut input = idle_input();
        run(&mut session, &mut input, 30);
        let pings = session
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::Cue(Cue::ProximityPing))
            .count();
        assert_eq!(pings, 0);
    }

    #[test]
    fn test_prompt_hidden_on_leaving() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        session.drain_events();

        session.player.set_position(SPAWN);
        let mut input = idle_input();
        run(&mut session, &mut input, 2);

        assert_eq!(session.interactable(), None);
        assert!(session.drain_events().contains(&GameEvent::PromptHidden));
    }

    #[test]
    fn test_no_scan_before_start() {
        let mut session = session();
        let npc_pos = session.npcs()[4].position;
        session.player.set_position(npc_pos + Vec3::new(3.0, 0.0, 0.0));

        let mut input = idle_input();
        run(&mut session, &mut input, 5);
        assert_eq!(session.interactable(), None);
    }

    #[test]
    fn test_interact_opens_dialog_and_stops_player() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        press_interact(&mut session);

        assert!(session.dialog().is_open());
        assert_eq!(session.dialog().current_npc(), Some(4));
        assert!(!session.player().can_move());
        assert_eq!(
            session.npcs()[4].activity(),
            crate::game::npc::NpcActivity::Excited
        );

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::DialogOpened { npc_id: 4 }));
        assert!(events.contains(&GameEvent::Cue(Cue::DialogOpen)));
    }

    #[test]
    fn test_interact_away_from_npcs_does_nothing() {
        let mut session = session();
        session.start();
        press_interact(&mut session);
        assert!(!session.dialog().is_open());
        assert!(session.player().can_move());
    }

    #[test]
    fn test_full_dialog_triggers_checkpoint() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        press_interact(&mut session); // open
        press_interact(&mut session); // line 1
        press_interact(&mut session); // line 2
        press_interact(&mut session); // line 3
        press_interact(&mut session); // finish -> trigger

        assert!(!session.dialog().is_open());
        assert_eq!(session.registry().active(), Some(4));
        assert!(
            !session.player().can_move(),
            "Movement stays disabled while the lesson plays"
        );
        assert!(session
            .drain_events()
            .contains(&GameEvent::LessonRequested { checkpoint_id: 4 }));
    }

    #[test]
    fn test_interact_mid_reveal_advances() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        press_interact(&mut session);

        // Immediately press again while line 0 is still revealing
        press_interact(&mut session);
        assert!(session.dialog().is_open());
        assert_eq!(session.dialog().line_index(), Some(1));
    }

    #[test]
    fn test_cancel_closes_without_trigger() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        press_interact(&mut session);
        press_cancel(&mut session);

        assert!(!session.dialog().is_open());
        assert!(session.player().can_move());
        assert_eq!(session.registry().active(), None);
        assert!(!session
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::LessonRequested { .. })));
    }

    #[test]
    fn test_single_dialog_invariant() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        press_interact(&mut session);
        assert_eq!(session.dialog().current_npc(), Some(4));

        // Walk next to another NPC while the dialog is open; the session
        // routes interact into the open dialog, never a second open
        let other_pos = session.npcs()[7].position;
        session.player.set_position(other_pos);
        press_interact(&mut session);
        assert!(session.dialog().is_open() || session.dialog().current_npc().is_none());
        // Still NPC 4's dialog (or finished with it), never NPC 7's
        if let Some(npc) = session.dialog().current_npc() {
            assert_eq!(npc, 4);
        }
    }

    #[test]
    fn test_video_completion_reenables_movement() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        for _ in 0..5 {
            press_interact(&mut session);
        }
        assert_eq!(session.registry().active(), Some(4));
        assert!(!session.player().can_move());

        session.complete_checkpoint(4);
        assert!(session.player().can_move());
        assert!(session.registry().is_completed(4));
        assert_eq!(session.registry().active(), None);
        assert!(session.npcs()[4].is_frozen());
    }

    #[test]
    fn test_completed_npc_not_interactable() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        for _ in 0..5 {
            press_interact(&mut session);
        }
        session.complete_checkpoint(4);
        session.drain_events();

        // Step away and back
        session.player.set_position(SPAWN);
        let mut input = idle_input();
        run(&mut session, &mut input, 2);
        stand_near_npc(&mut session, 4);

        assert_eq!(session.interactable(), None);
        assert!(!session.dialog().is_open());
    }

    #[test]
    fn test_complete_checkpoint_idempotent_through_session() {
        let mut session = session();
        session.complete_checkpoint(3);
        session.complete_checkpoint(3);
        assert_eq!(session.registry().completed_count(), 1);
    }

    #[test]
    fn test_nearest_npc_wins() {
        let mut session = session();
        session.start();

        // Stand between NPC 0 and NPC 2 (same side, 50 apart), nearer 2
        let a = session.npcs()[0].position;
        let b = session.npcs()[2].position;
        let between = a + (b - a) * 0.9;
        session.player.set_position(between);

        let mut input = idle_input();
        run(&mut session, &mut input, 2);

        if let Some(id) = session.interactable() {
            assert_eq!(id, 2);
        }
    }

    #[test]
    fn test_reset_restores_fresh_progress() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        for _ in 0..5 {
            press_interact(&mut session);
        }
        session.complete_checkpoint(4);
        assert_eq!(session.registry().completed_count(), 1);

        session.reset();
        assert_eq!(session.registry().completed_count(), 0);
        assert!(!session.registry().is_all_completed());
        assert_eq!(session.registry().get(4).unwrap().topic, "Division");
        assert_eq!(session.player().position(), SPAWN);
    }

    #[test]
    fn test_no_new_dialog_while_lesson_active() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        for _ in 0..5 {
            press_interact(&mut session);
        }
        assert_eq!(session.registry().active(), Some(4));

        // Interact next to another NPC while the video plays: ignored
        let other_pos = session.npcs()[6].position;
        session.player.set_position(other_pos);
        press_interact(&mut session);

        assert!(!session.dialog().is_open());
        assert_eq!(session.interactable(), None);
        assert_eq!(session.registry().active(), Some(4));
    }

    #[test]
    fn test_events_drained_not_duplicated() {
        let mut session = session();
        stand_near_npc(&mut session, 4);
        let first = session.drain_events();
        assert!(!first.is_empty());
        assert!(session.drain_events().is_empty());
    }
}
