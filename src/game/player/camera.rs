// Third-person orbit camera

use std::f32::consts::PI;

use glam::Vec3;

use crate::core::math::{approach_angle, clamp};

/// Radians of yaw per pixel of horizontal drag
const DRAG_YAW_SENSITIVITY: f32 = 0.008;
/// Radians of pitch per pixel of vertical drag
const DRAG_PITCH_SENSITIVITY: f32 = 0.004;
/// Pitch limits: slightly below horizon to looking well down
const PITCH_MIN: f32 = -0.3;
const PITCH_MAX: f32 = 0.6;
/// Zoom limits
const DISTANCE_MIN: f32 = 5.0;
const DISTANCE_MAX: f32 = 25.0;
/// Distance change per wheel scroll unit
const ZOOM_SENSITIVITY: f32 = 0.01;
/// Keyboard nudge per press
const NUDGE_STEP: f32 = 0.1;
/// How quickly the camera settles behind the avatar while walking forward
const FOLLOW_RATE: f32 = 1.2;
/// Camera height above the avatar's feet
const CAMERA_HEIGHT: f32 = 8.0;

/// Orbit camera circling the avatar
///
/// Yaw is also the movement frame: the controller rotates input intent by
/// this angle, so "forward" is always away from the camera.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Yaw around the avatar (radians)
    angle: f32,
    /// Downward tilt
    pitch: f32,
    /// Distance from the avatar
    distance: f32,
    /// Whether the user is currently dragging the camera
    dragging: bool,
}

impl OrbitCamera {
    /// Create a camera behind the avatar
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            pitch: 0.3,
            distance: 12.0,
            dragging: false,
        }
    }

    /// Current yaw angle
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current pitch
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mark the start/end of a mouse drag
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Apply a mouse drag delta (pixels)
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.angle -= dx * DRAG_YAW_SENSITIVITY;
        self.pitch = clamp(self.pitch + dy * DRAG_PITCH_SENSITIVITY, PITCH_MIN, PITCH_MAX);
    }

    /// Apply wheel zoom (positive scroll zooms out)
    pub fn apply_zoom(&mut self, scroll: f32) {
        self.distance = clamp(
            self.distance + scroll * ZOOM_SENSITIVITY,
            DISTANCE_MIN,
            DISTANCE_MAX,
        );
    }

    /// Nudge the yaw by one keyboard step (positive = left)
    pub fn nudge(&mut self, direction: f32) {
        self.angle += direction * NUDGE_STEP;
    }

    /// Slowly rotate to sit behind an avatar facing `facing`
    ///
    /// Called while the avatar walks straight forward and the user is not
    /// dragging; never snaps.
    pub fn settle_behind(&mut self, facing: f32, dt: f32) {
        if self.dragging {
            return;
        }
        let target = facing + PI;
        self.angle = approach_angle(self.angle, target, FOLLOW_RATE, dt);
    }

    /// World position of the camera for a given avatar position
    pub fn eye_position(&self, avatar: Vec3) -> Vec3 {
        Vec3::new(
            avatar.x + self.angle.sin() * self.distance,
            CAMERA_HEIGHT + self.pitch * self.distance,
            avatar.z + self.angle.cos() * self.distance,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
