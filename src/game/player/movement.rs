// Player movement controller
//
// Turns input intent into a collision-resolved position, camera-relative.
// A blocked move degrades to axis-separated sliding along walls; it never
// stops the simulation.

use glam::{Vec2, Vec3};

use crate::core::math::approach_angle;
use crate::engine::physics::CollisionResolver;
use crate::game::events::{Cue, EventQueue};
use crate::game::player::camera::OrbitCamera;
use crate::game::player::stamina::{Stamina, StaminaSignal};

/// Walking speed (units/second)
const BASE_SPEED: f32 = 15.0;
/// Sprinting speed (units/second)
const SPRINT_SPEED: f32 = 30.0;
/// How quickly the avatar turns to face its travel direction
const TURN_RATE: f32 = 8.0;
/// Seconds between footstep cues
const FOOTSTEP_INTERVAL_WALK: f32 = 0.35;
const FOOTSTEP_INTERVAL_SPRINT: f32 = 0.22;

/// Directional intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Whether any direction is requested
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Unit intent vector (x = right, y = forward); opposing keys cancel
    fn vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.forward {
            v.y -= 1.0;
        }
        if self.backward {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if v.length_squared() > 0.0 {
            v.normalize()
        } else {
            v
        }
    }
}

/// The player avatar's movement state
#[derive(Debug)]
pub struct PlayerController {
    position: Vec3,
    /// Facing the avatar is smoothly turning toward
    target_rotation: f32,
    /// Facing the avatar currently renders with
    current_rotation: f32,
    stamina: Stamina,
    sprinting: bool,
    can_move: bool,
    intent: MoveIntent,
    /// Whether the avatar moved last tick (drives walk animation/footsteps)
    walking: bool,
    footstep_timer: f32,
}

impl PlayerController {
    /// Create a controller at a spawn position
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            target_rotation: 0.0,
            current_rotation: 0.0,
            stamina: Stamina::default(),
            sprinting: false,
            can_move: true,
            intent: MoveIntent::default(),
            walking: false,
            footstep_timer: 0.0,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current (smoothed) facing angle
    pub fn rotation(&self) -> f32 {
        self.current_rotation
    }

    /// Stamina resource
    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    /// Whether the avatar moved last tick
    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// Whether the avatar is actually sprinting (flag set and stamina left)
    pub fn is_sprinting(&self) -> bool {
        self.sprinting && !self.stamina.is_empty()
    }

    /// Whether movement is currently enabled
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Set this tick's directional intent
    pub fn set_intent(&mut self, intent: MoveIntent) {
        if self.can_move {
            self.intent = intent;
        }
    }

    /// Request or release sprint
    ///
    /// A new request is only honored above the stamina debounce threshold,
    /// so holding the key at zero stamina does not chatter.
    pub fn set_sprint_requested(&mut self, requested: bool, events: &mut EventQueue) {
        if requested {
            if !self.sprinting && self.can_move && self.stamina.can_sprint() {
                self.sprinting = true;
                events.cue(Cue::SprintStart);
            }
        } else {
            self.sprinting = false;
        }
    }

    /// Enable or disable movement (dialog open, video playing)
    ///
    /// Disabling clears direction flags and sprint; stamina keeps ticking.
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
        if !can_move {
            self.intent = MoveIntent::default();
            self.sprinting = false;
            self.walking = false;
        }
    }

    /// Teleport to a position (session restart)
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Advance one simulation tick
    pub fn update(
        &mut self,
        dt: f32,
        camera: &mut OrbitCamera,
        resolver: &CollisionResolver,
        events: &mut EventQueue,
    ) {
        // Opposing keys cancel to a zero vector: that is standing still
        let intent = self.intent.vector();
        let moving = self.can_move && intent.length_squared() > 0.0;

        // Stamina ticks even while movement is disabled; sprint was
        // cleared on disable, so it regenerates.
        self.update_stamina(dt, moving, events);

        self.walking = moving;
        if !moving {
            self.footstep_timer = 0.0;
            // Keep easing the facing toward its target while standing
            self.current_rotation =
                approach_angle(self.current_rotation, self.target_rotation, TURN_RATE, dt);
            return;
        }

        // Camera-relative movement: rotate intent by the orbit yaw
        let (sin, cos) = camera.angle().sin_cos();
        let rotated = Vec2::new(
            intent.x * cos - intent.y * sin,
            intent.x * sin + intent.y * cos,
        );

        let speed = if self.is_sprinting() {
            SPRINT_SPEED
        } else {
            BASE_SPEED
        };
        let step = rotated * speed * dt;

        self.resolve_move(step, resolver);

        // Face the direction of travel
        self.target_rotation = rotated.x.atan2(rotated.y);
        self.current_rotation =
            approach_angle(self.current_rotation, self.target_rotation, TURN_RATE, dt);

        // Settle the camera behind the avatar on a straight run
        if self.intent.forward && !self.intent.left && !self.intent.right {
            camera.settle_behind(self.target_rotation, dt);
        }

        self.emit_footsteps(dt, events);
    }

    /// Apply a movement step through the collision gate
    ///
    /// If the full step is blocked, the X-only and Z-only steps are tried
    /// in turn (the Z retry sees the applied X), which slides the avatar
    /// along walls instead of stopping dead.
    fn resolve_move(&mut self, step: Vec2, resolver: &CollisionResolver) {
        let full = self.position + Vec3::new(step.x, 0.0, step.y);
        if !resolver.is_blocked(full) {
            self.position = full;
            return;
        }

        let x_only = self.position + Vec3::new(step.x, 0.0, 0.0);
        if !resolver.is_blocked(x_only) {
            self.position = x_only;
        }

        let z_only = self.position + Vec3::new(0.0, 0.0, step.y);
        if !resolver.is_blocked(z_only) {
            self.position = z_only;
        }
    }

    fn update_stamina(&mut self, dt: f32, moving: bool, events: &mut EventQueue) {
        if self.sprinting && moving && !self.stamina.is_empty() {
            match self.stamina.drain(dt) {
                StaminaSignal::Depleted => {
                    // Out of breath: force-clear sprint until recovered
                    self.sprinting = false;
                    events.cue(Cue::StaminaLow);
                }
                StaminaSignal::Low => events.cue(Cue::StaminaLow),
                StaminaSignal::None => {}
            }
        } else {
            self.stamina.regen(dt);
        }
    }

    fn emit_footsteps(&mut self, dt: f32, events: &mut EventQueue) {
        self.footstep_timer -= dt;
        if self.footstep_timer <= 0.0 {
            events.cue(Cue::Footstep);
            self.footstep_timer = if self.is_sprinting() {
                FOOTSTEP_INTERVAL_SPRINT
            } else {
                FOOTSTEP_INTERVAL_WALK
            };
        }
    }
}
