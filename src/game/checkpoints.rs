// Checkpoint registry
//
// One checkpoint per building, created in building order, gating a video
// lesson. Completion is monotonic; only a full-session reset clears it.

use std::collections::HashSet;

use glam::Vec3;

use crate::game::events::{Cue, EventQueue, GameEvent};
use crate::game::world::{Building, World};

/// A lesson topic with its external video id
#[derive(Debug, Clone)]
pub struct Topic {
    pub name: &'static str,
    pub lesson_id: &'static str,
}

/// The standard math curriculum, assigned round-robin to checkpoints
pub fn standard_topics() -> Vec<Topic> {
    [
        ("Introduction to Numbers", "lesson-intro-numbers"),
        ("Basic Addition", "lesson-addition"),
        ("Basic Subtraction", "lesson-subtraction"),
        ("Multiplication", "lesson-multiplication"),
        ("Division", "lesson-division"),
        ("Fractions", "lesson-fractions"),
        ("Basic Geometry", "lesson-geometry"),
        ("Measurement", "lesson-measurement"),
        ("Basic Statistics", "lesson-statistics"),
        ("Introduction to Algebra", "lesson-algebra"),
        ("Decimal Numbers", "lesson-decimals"),
        ("Ratios", "lesson-ratios"),
    ]
    .into_iter()
    .map(|(name, lesson_id)| Topic { name, lesson_id })
    .collect()
}

/// A learning trigger in front of a building
#[derive(Debug, Clone)]
pub struct Checkpoint {
    /// Sequential id in building-creation order
    pub id: u32,
    /// Index of the owning building
    pub building_index: usize,
    /// Trigger position, offset from the building toward the road
    pub position: Vec3,
    pub topic: &'static str,
    pub lesson_id: &'static str,
    /// Monotonic: flips false -> true once, via complete()
    pub completed: bool,
}

/// Owns all checkpoints and the completion/active bookkeeping
#[derive(Debug, Default)]
pub struct CheckpointRegistry {
    checkpoints: Vec<Checkpoint>,
    completed: HashSet<u32>,
    active: Option<u32>,
}

impl CheckpointRegistry {
    /// Create one checkpoint per building, ids 0..N in building order,
    /// topics drawn round-robin from the list
    pub fn create_all(world: &World, topics: &[Topic]) -> Self {
        let trigger_offset = world.config().trigger_offset;
        let checkpoints = world
            .buildings()
            .iter()
            .enumerate()
            .map(|(i, building): (usize, &Building)| {
                let topic = &topics[i % topics.len()];
                Checkpoint {
                    id: i as u32,
                    building_index: building.index,
                    position: building.trigger_position(trigger_offset),
                    topic: topic.name,
                    lesson_id: topic.lesson_id,
                    completed: false,
                }
            })
            .collect::<Vec<_>>();

        log::info!("Created {} checkpoints", checkpoints.len());
        Self {
            checkpoints,
            completed: HashSet::new(),
            active: None,
        }
    }

    /// Look up a checkpoint
    pub fn get(&self, id: u32) -> Option<&Checkpoint> {
        self.checkpoints.get(id as usize)
    }

    /// All checkpoints in id order
    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    /// The currently active (video playing) checkpoint
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    /// Whether a checkpoint has been completed
    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }

    /// Number of completed checkpoints
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Total number of checkpoints
    pub fn total(&self) -> usize {
        self.checkpoints.len()
    }

    /// True iff every checkpoint is completed
    pub fn is_all_completed(&self) -> bool {
        self.completed.len() == self.checkpoints.len()
    }

    /// Trigger a checkpoint: mark it active and request the lesson flow
    ///
    /// Returns true if the trigger took effect (the caller then disables
    /// player movement). No-ops: same checkpoint already active, another
    /// checkpoint active, checkpoint already completed, unknown id.
    pub fn trigger(&mut self, id: u32, events: &mut EventQueue) -> bool {
        if self.get(id).is_none() {
            log::warn!("Trigger for unknown checkpoint {}", id);
            return false;
        }
        if self.active == Some(id) {
            return false;
        }
        if let Some(active) = self.active {
            log::warn!(
                "Trigger for checkpoint {} ignored, {} is already active",
                id,
                active
            );
            return false;
        }
        if self.completed.contains(&id) {
            log::debug!("Trigger for completed checkpoint {} ignored", id);
            return false;
        }

        self.active = Some(id);
        events.push(GameEvent::LessonRequested { checkpoint_id: id });
        true
    }

    /// Mark a checkpoint completed
    ///
    /// Idempotent: completing twice neither double-counts nor re-reports.
    /// Clears the active checkpoint and reports progress. Returns true if
    /// the completion took effect (the caller re-enables movement).
    pub fn complete(&mut self, id: u32, events: &mut EventQueue) -> bool {
        let Some(checkpoint) = self.checkpoints.get_mut(id as usize) else {
            log::warn!("Completion for unknown checkpoint {}", id);
            return false;
        };

        if self.active == Some(id) {
            self.active = None;
        }

        if !self.completed.insert(id) {
            return false;
        }
        checkpoint.completed = true;

        events.cue(Cue::Success);
        events.push(GameEvent::ProgressChanged {
            completed: self.completed.len(),
            total: self.checkpoints.len(),
        });
        if self.is_all_completed() {
            log::info!("All {} checkpoints completed", self.checkpoints.len());
            events.push(GameEvent::AllCompleted);
        }
        true
    }

    /// Clear all completion state for a full-session restart
    ///
    /// Topic assignments are preserved; only the flags and the
    /// completed-set are cleared.
    pub fn reset(&mut self) {
        for checkpoint in &mut self.checkpoints {
            checkpoint.completed = false;
        }
        self.completed.clear();
        self.active = None;
        log::info!("Checkpoint progress reset");
    }
}
