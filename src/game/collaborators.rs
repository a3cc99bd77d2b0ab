// External collaborator seams
//
// The simulation core never talks to a real screen, video widget or audio
// device; it emits events which the host routes through these traits. The
// impls here are the headless stand-ins: console logging and a tick-driven
// countdown in place of an embedded video player.

use crate::game::checkpoints::Checkpoint;
use crate::game::events::Cue;

/// Lesson/HUD surface driven by the checkpoint registry and proximity scan
pub trait LessonUi {
    /// Open the learning popup for a triggered checkpoint
    fn show_learning_popup(&mut self, checkpoint: &Checkpoint);

    /// Update the completed/total progress display
    fn update_progress(&mut self, completed: usize, total: usize);

    /// Show the "press E to talk" prompt for an NPC
    fn show_interaction_prompt(&mut self, npc_id: u32);

    /// Hide the talk prompt
    fn hide_interaction_prompt(&mut self);
}

/// Audio output for fire-and-forget cues
pub trait AudioSink {
    fn play_cue(&mut self, cue: Cue);
}

/// Playback state reported by a video player each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoStatus {
    /// No video loaded
    Idle,
    /// Playing, with progress in [0, 100]
    Playing(f32),
    /// Reached the end this tick
    Finished,
}

/// Video lesson playback, advanced by the host loop once per tick
///
/// Completion observed through `update` is the sole path back into
/// checkpoint completion.
pub trait VideoPlayer {
    /// Start playback of a lesson
    fn load(&mut self, lesson_id: &str);

    /// Stop playback and unload
    fn stop(&mut self);

    /// Advance playback; returns the current status
    fn update(&mut self, dt: f32) -> VideoStatus;
}

/// Console-logging lesson UI for headless runs
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl LessonUi for ConsoleUi {
    fn show_learning_popup(&mut self, checkpoint: &Checkpoint) {
        log::info!(
            "Lesson popup: checkpoint {} — {}",
            checkpoint.id,
            checkpoint.topic
        );
    }

    fn update_progress(&mut self, completed: usize, total: usize) {
        log::info!("Progress: {}/{}", completed, total);
    }

    fn show_interaction_prompt(&mut self, npc_id: u32) {
        log::info!("Press E to talk (npc {})", npc_id);
    }

    fn hide_interaction_prompt(&mut self) {
        log::debug!("Talk prompt hidden");
    }
}

/// Audio sink that only logs; keeps the sim running when audio is unavailable
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_cue(&mut self, cue: Cue) {
        log::debug!("Audio cue: {:?}", cue);
    }
}

/// Default length of the simulated lesson video
const COUNTDOWN_SECS: f32 = 10.0;

/// Tick-driven placeholder video: counts down a fixed duration, reporting
/// progress, then finishes once
#[derive(Debug)]
pub struct CountdownVideo {
    duration: f32,
    remaining: Option<f32>,
}

impl CountdownVideo {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: None,
        }
    }

    /// Progress percentage in [0, 100], or None when idle
    pub fn progress(&self) -> Option<f32> {
        self.remaining
            .map(|r| ((self.duration - r) / self.duration * 100.0).clamp(0.0, 100.0))
    }
}

impl Default for CountdownVideo {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECS)
    }
}

impl VideoPlayer for CountdownVideo {
    fn load(&mut self, lesson_id: &str) {
        log::info!("Playing lesson video '{}' ({}s)", lesson_id, self.duration);
        self.remaining = Some(self.duration);
    }

    fn stop(&mut self) {
        self.remaining = None;
    }

    fn update(&mut self, dt: f32) -> VideoStatus {
        match self.remaining {
            None => VideoStatus::Idle,
            Some(remaining) => {
                let left = remaining - dt;
                if left <= 0.0 {
                    self.remaining = None;
                    VideoStatus::Finished
                } else {
                    self.remaining = Some(left);
                    VideoStatus::Playing(self.progress().unwrap_or(0.0))
                }
            }
        }
    }
}
