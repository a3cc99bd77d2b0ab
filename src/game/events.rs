// Game event queue
//
// Components push typed signals during a simulation tick; the host drains
// the queue once per tick and dispatches to the UI/audio/video
// collaborators. Nothing crosses threads, so this is a plain Vec.

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ping when an NPC becomes interactable
    ProximityPing,
    DialogOpen,
    DialogClose,
    /// Dialog advance button
    Click,
    /// Per-character typing tick
    TypingTick,
    StaminaLow,
    SprintStart,
    Footstep,
    /// Checkpoint completed
    Success,
}

/// Signals emitted by the simulation for external collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Play an audio cue
    Cue(Cue),

    /// An NPC became the interactable candidate; show the talk prompt
    PromptShown { npc_id: u32 },

    /// No NPC is interactable anymore; hide the talk prompt
    PromptHidden,

    /// A dialog was opened with an NPC
    DialogOpened { npc_id: u32 },

    /// The open dialog closed (finished or cancelled)
    DialogClosed,

    /// A checkpoint was triggered; open the lesson-video flow
    LessonRequested { checkpoint_id: u32 },

    /// Completion progress changed
    ProgressChanged { completed: usize, total: usize },

    /// Every checkpoint has been completed
    AllCompleted,
}

/// Event queue filled during a tick and drained by the host afterwards
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push an event
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Push an audio cue
    pub fn cue(&mut self, cue: Cue) {
        self.events.push(GameEvent::Cue(cue));
    }

    /// Take all queued events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at queued events without draining
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let mut queue = EventQueue::new();
        queue.cue(Cue::Click);
        queue.push(GameEvent::PromptHidden);
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], GameEvent::Cue(Cue::Click));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empty() {
        let mut queue = EventQueue::new();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_events_peek() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::ProgressChanged {
            completed: 1,
            total: 20,
        });
        assert_eq!(queue.events().len(), 1);
        assert_eq!(queue.len(), 1, "Peeking must not consume");
    }
}
