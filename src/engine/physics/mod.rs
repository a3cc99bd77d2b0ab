// Collision system for static world geometry
//
// The world is a street of axis-aligned boxes; nothing in it moves, so
// there is no dynamics pipeline — just an append-only collider set and a
// boolean blocked-query the movement controller resolves against.

mod collider;
mod resolver;

pub use collider::StaticColliderSet;
pub use resolver::{CollisionResolver, WorldBounds};

// Re-export the geometry type for code that builds colliders directly
#[allow(unused_imports)]
pub use parry3d::bounding_volume::Aabb;
