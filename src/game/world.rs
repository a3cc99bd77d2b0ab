// World build: the commercial street the player walks down
//
// Buildings line both sides of a straight road. Each building gets a
// static collider and, later, a checkpoint with an NPC in front of it.
// Layout is deterministic: same config, same street.

use glam::Vec3;

use crate::engine::physics::WorldBounds;
use crate::game::assets::{AssetCategory, AssetManifest};

/// Which side of the road a building stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign pointing from this side toward the road center
    fn toward_road(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A checkpoint-eligible building on the main street
#[derive(Debug, Clone)]
pub struct Building {
    /// Index in creation order
    pub index: usize,
    /// Ground-level center position
    pub position: Vec3,
    pub side: Side,
    /// Art asset for the renderer; None means placeholder geometry
    pub asset_id: Option<&'static str>,
}

impl Building {
    /// Trigger position for this building's checkpoint, offset toward the road
    pub fn trigger_position(&self, offset: f32) -> Vec3 {
        Vec3::new(
            self.position.x + self.side.toward_road() * offset,
            0.0,
            self.position.z,
        )
    }
}

/// Street layout configuration
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Buildings on each side of the road
    pub buildings_per_side: usize,
    /// Distance between neighboring buildings along the road
    pub building_spacing: f32,
    /// Distance of building centers from the road center
    pub road_offset: f32,
    /// Z position of the first building pair
    pub start_z: f32,
    /// Half-extents of a building's collision box (before padding)
    pub building_half_extents: Vec3,
    /// Checkpoint trigger distance from the building toward the road
    pub trigger_offset: f32,
    /// NPC distance from the trigger, further toward the road
    pub npc_offset: f32,
    /// Hard world edge
    pub bounds: WorldBounds,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            buildings_per_side: 10,
            building_spacing: 50.0,
            road_offset: 55.0,
            start_z: -350.0,
            building_half_extents: Vec3::new(10.0, 12.5, 10.0),
            trigger_offset: 20.0,
            npc_offset: 8.0,
            bounds: WorldBounds {
                min_x: -180.0,
                max_x: 180.0,
                min_z: -450.0,
                max_z: 450.0,
            },
        }
    }
}

/// World configuration errors
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("Invalid world config: {0}")]
    InvalidConfig(String),
}

/// Extra collider size so the player cannot clip building walls
const COLLIDER_PADDING: f32 = 0.5;

/// The built street: buildings, bounds and collider footprints
#[derive(Debug)]
pub struct World {
    buildings: Vec<Building>,
    config: WorldConfig,
}

impl World {
    /// Build the street from a config and asset manifest
    ///
    /// Buildings are placed pairwise (left, then right) per row, so the
    /// creation order along the road is L0, R0, L1, R1, ... Missing
    /// building art degrades to placeholder geometry, never a build failure.
    pub fn build(config: WorldConfig, manifest: &AssetManifest) -> Result<Self, WorldError> {
        Self::validate(&config)?;

        let facades = manifest.ids_in(AssetCategory::CommercialBuilding);
        if facades.is_empty() {
            log::warn!("No commercial building assets in manifest, using placeholders");
        }

        let mut buildings = Vec::with_capacity(config.buildings_per_side * 2);
        for row in 0..config.buildings_per_side {
            let z = config.start_z + row as f32 * config.building_spacing;

            // Offset the right-side pick so facing pairs differ
            let left_asset = Self::pick_facade(&facades, row);
            let right_asset = Self::pick_facade(&facades, row + 5);

            for (side, x, asset_id) in [
                (Side::Left, -config.road_offset, left_asset),
                (Side::Right, config.road_offset, right_asset),
            ] {
                buildings.push(Building {
                    index: buildings.len(),
                    position: Vec3::new(x, 0.0, z),
                    side,
                    asset_id,
                });
            }
        }

        log::info!("Built street with {} buildings", buildings.len());
        Ok(Self { buildings, config })
    }

    fn validate(config: &WorldConfig) -> Result<(), WorldError> {
        if config.buildings_per_side == 0 {
            return Err(WorldError::InvalidConfig(
                "buildings_per_side must be at least 1".into(),
            ));
        }
        if config.building_spacing <= 0.0 {
            return Err(WorldError::InvalidConfig(
                "building_spacing must be positive".into(),
            ));
        }
        let b = config.bounds;
        if b.min_x >= b.max_x || b.min_z >= b.max_z {
            return Err(WorldError::InvalidConfig("bounds are inverted".into()));
        }
        Ok(())
    }

    fn pick_facade(facades: &[&'static str], index: usize) -> Option<&'static str> {
        if facades.is_empty() {
            None
        } else {
            Some(facades[index % facades.len()])
        }
    }

    /// Buildings in creation order
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// World bounds for the collision resolver
    pub fn bounds(&self) -> WorldBounds {
        self.config.bounds
    }

    /// Layout configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Collider boxes (center, half-extents) for every building, padded so
    /// the avatar cannot brush through facades
    pub fn collider_boxes(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let half = self.config.building_half_extents;
        self.buildings.iter().map(move |b| {
            let center = Vec3::new(b.position.x, half.y, b.position.z);
            let padded = Vec3::new(half.x + COLLIDER_PADDING, half.y, half.z + COLLIDER_PADDING);
            (center, padded)
        })
    }

    /// NPC position for a building: on the road side of the trigger
    pub fn npc_position(&self, building: &Building) -> Vec3 {
        let trigger = building.trigger_position(self.config.trigger_offset);
        Vec3::new(
            trigger.x + building.side.toward_road() * self.config.npc_offset,
            0.0,
            trigger.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_default() -> World {
        World::build(WorldConfig::default(), &AssetManifest::standard()).unwrap()
    }

    #[test]
    fn test_building_count() {
        let world = build_default();
        assert_eq!(world.buildings().len(), 20);
    }

    #[test]
    fn test_buildings_alternate_sides() {
        let world = build_default();
        assert_eq!(world.buildings()[0].side, Side::Left);
        assert_eq!(world.buildings()[1].side, Side::Right);
        assert_eq!(world.buildings()[2].side, Side::Left);
    }

    #[test]
    fn test_building_positions() {
        let world = build_default();
        let first = &world.buildings()[0];
        assert_eq!(first.position, Vec3::new(-55.0, 0.0, -350.0));

        let second_row_left = &world.buildings()[2];
        assert_eq!(second_row_left.position.z, -300.0);
    }

    #[test]
    fn test_indices_follow_creation_order() {
        let world = build_default();
        for (i, building) in world.buildings().iter().enumerate() {
            assert_eq!(building.index, i);
        }
    }

    #[test]
    fn test_trigger_position_toward_road() {
        let world = build_default();
        let left = &world.buildings()[0];
        let trigger = left.trigger_position(20.0);
        assert_eq!(trigger.x, -35.0);

        let right = &world.buildings()[1];
        let trigger = right.trigger_position(20.0);
        assert_eq!(trigger.x, 35.0);
    }

    #[test]
    fn test_npc_position_past_trigger() {
        let world = build_default();
        let left = &world.buildings()[0];
        let npc = world.npc_position(left);
        assert_eq!(npc.x, -27.0);

        let right = &world.buildings()[1];
        let npc = world.npc_position(right);
        assert_eq!(npc.x, 27.0);
    }

    #[test]
    fn test_collider_per_building() {
        let world = build_default();
        assert_eq!(world.collider_boxes().count(), world.buildings().len());

        let (center, half) = world.collider_boxes().next().unwrap();
        assert_eq!(center.y, 12.5);
        assert_eq!(half.x, 10.5); // padded
    }

    #[test]
    fn test_facades_differ_across_the_road() {
        let world = build_default();
        let left = world.buildings()[0].asset_id;
        let right = world.buildings()[1].asset_id;
        assert_ne!(left, right);
    }

    #[test]
    fn test_empty_manifest_degrades_to_placeholders() {
        let world = World::build(WorldConfig::default(), &AssetManifest::new()).unwrap();
        assert!(world.buildings().iter().all(|b| b.asset_id.is_none()));
        assert_eq!(world.buildings().len(), 20);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WorldConfig {
            buildings_per_side: 0,
            ..WorldConfig::default()
        };
        assert!(World::build(config, &AssetManifest::standard()).is_err());

        let config = WorldConfig {
            bounds: WorldBounds {
                min_x: 10.0,
                max_x: -10.0,
                min_z: 0.0,
                max_z: 1.0,
            },
            ..WorldConfig::default()
        };
        assert!(World::build(config, &AssetManifest::standard()).is_err());
    }
}
