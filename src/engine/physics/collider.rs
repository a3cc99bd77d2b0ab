// Static collider storage

use glam::Vec3;
use parry3d::bounding_volume::Aabb;
use parry3d::math::Point;

/// Append-only set of static axis-aligned colliders
///
/// Filled once during world build (building footprints, street props) and
/// only queried afterwards. Nothing is ever removed during play.
#[derive(Debug, Default)]
pub struct StaticColliderSet {
    colliders: Vec<Aabb>,
}

impl StaticColliderSet {
    /// Create an empty collider set
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
        }
    }

    /// Add a collider from center and half-extents
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3) {
        let mins = center - half_extents;
        let maxs = center + half_extents;
        self.colliders.push(Aabb::new(
            Point::new(mins.x, mins.y, mins.z),
            Point::new(maxs.x, maxs.y, maxs.z),
        ));
    }

    /// Add a pre-built collider
    pub fn add_aabb(&mut self, aabb: Aabb) {
        self.colliders.push(aabb);
    }

    /// Iterate over all colliders
    pub fn iter(&self) -> impl Iterator<Item = &Aabb> {
        self.colliders.iter()
    }

    /// Number of colliders in the set
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}
