// Boolean collision gate for candidate player positions

use glam::Vec3;
use parry3d::bounding_volume::{Aabb, BoundingVolume};
use parry3d::math::Point;

use super::collider::StaticColliderSet;

/// Horizontal radius of the player volume
const PLAYER_RADIUS: f32 = 1.5;

/// Vertical extent of the player volume
const PLAYER_HEIGHT: f32 = 3.0;

/// Rectangular world edge the player can never leave
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl WorldBounds {
    /// Check whether a position lies inside the bounds
    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.z >= self.min_z
            && position.z <= self.max_z
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min_x: -50.0,
            max_x: 50.0,
            min_z: -100.0,
            max_z: 100.0,
        }
    }
}

/// Pure blocked-query over world bounds and the static collider set
///
/// Returns only yes/no; the movement controller decides how to degrade a
/// blocked move (axis-separated sliding), so no push-out vector is needed.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    bounds: WorldBounds,
    colliders: StaticColliderSet,
}

impl CollisionResolver {
    /// Create a resolver with the given bounds and an empty collider set
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            colliders: StaticColliderSet::new(),
        }
    }

    /// Replace the world bounds
    pub fn set_bounds(&mut self, bounds: WorldBounds) {
        self.bounds = bounds;
    }

    /// Get the world bounds
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Access the collider set for world build
    pub fn colliders_mut(&mut self) -> &mut StaticColliderSet {
        &mut self.colliders
    }

    /// Access the collider set
    pub fn colliders(&self) -> &StaticColliderSet {
        &self.colliders
    }

    /// Check whether a candidate position is blocked
    ///
    /// Blocked if outside the world bounds, or if the player volume at the
    /// candidate intersects any static collider. Pure query, no mutation.
    pub fn is_blocked(&self, candidate: Vec3) -> bool {
        // Hard world edge first
        if !self.bounds.contains(candidate) {
            return true;
        }

        let player_box = Self::player_volume(candidate);
        self.colliders
            .iter()
            .any(|collider| collider.intersects(&player_box))
    }

    /// Player bounding volume centered at a candidate position
    fn player_volume(candidate: Vec3) -> Aabb {
        Aabb::new(
            Point::new(candidate.x - PLAYER_RADIUS, 0.0, candidate.z - PLAYER_RADIUS),
            Point::new(
                candidate.x + PLAYER_RADIUS,
                PLAYER_HEIGHT,
                candidate.z + PLAYER_RADIUS,
            ),
        )
    }
}
