// NPC dialog session
//
// At most one dialog is open at a time, globally. Each dialog walks a
// four-line script (greeting, topic intro, encouragement, action prompt)
// revealed with a per-character typing effect. All timing is advanced by
// the simulation tick so a cancel can never leak a pending timer.

use rand::Rng;

use crate::game::events::{Cue, EventQueue, GameEvent};

/// Lead-in before the first character appears (the "thinking" dots)
const TYPE_LEAD_IN: f32 = 0.5;
/// Seconds per revealed character
const CHAR_INTERVAL: f32 = 0.03;
/// A typing cue fires every Nth character
const TYPING_CUE_EVERY: usize = 3;

/// Number of lines in a dialog script
pub const SCRIPT_LEN: usize = 4;

const GREETINGS: [&str; 5] = [
    "Hello! Nice to meet you!",
    "Hi! Welcome to the learning city!",
    "Oh, a new visitor! Hi there!",
    "Welcome, diligent student!",
    "Hey! I've been waiting for you!",
];

const INTROS: [&str; 5] = [
    "I'm here to help you learn {topic}.",
    "Want to learn about {topic}? I can help!",
    "Today's topic is {topic}. Interesting, right?",
    "Let's study {topic} together!",
    "There's a great video about {topic}!",
];

const ENCOURAGEMENTS: [&str; 5] = [
    "You can definitely understand this!",
    "Don't worry, the material is fun!",
    "Learning is enjoyable!",
    "Keep it up! You'll get smarter!",
    "This will be easy to grasp, trust me!",
];

const PROMPTS: [&str; 5] = [
    "Press [E] to start learning!",
    "Ready to learn? Press [E]!",
    "Hit [E] to watch the video!",
    "Let's begin! Press the [E] key!",
    "Press [E] and let's get started!",
];

/// Build the four-line script for a topic, picking a phrasing variant
/// per slot from the given RNG
pub fn build_script<R: Rng>(topic: &str, rng: &mut R) -> [String; SCRIPT_LEN] {
    let pick = |lines: &[&str; 5], rng: &mut R| lines[rng.gen_range(0..lines.len())].to_string();
    [
        pick(&GREETINGS, rng),
        pick(&INTROS, rng).replace("{topic}", topic),
        pick(&ENCOURAGEMENTS, rng),
        pick(&PROMPTS, rng),
    ]
}

/// Typing reveal state for the current line
#[derive(Debug)]
struct TypeReveal {
    lead_in_remaining: f32,
    chars_revealed: usize,
    char_timer: f32,
}

impl TypeReveal {
    fn new() -> Self {
        Self {
            lead_in_remaining: TYPE_LEAD_IN,
            chars_revealed: 0,
            char_timer: 0.0,
        }
    }
}

/// Result of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// No dialog is open; nothing happened
    NotOpen,
    /// Moved on to the next line
    Advanced,
    /// The last line was acknowledged; the dialog closed and the
    /// checkpoint trigger flow should run for this NPC
    Finished { npc_id: u32 },
}

#[derive(Debug)]
struct ActiveDialog {
    npc_id: u32,
    lines: [String; SCRIPT_LEN],
    index: usize,
    reveal: TypeReveal,
}

/// The single global dialog session
#[derive(Debug, Default)]
pub struct DialogSession {
    active: Option<ActiveDialog>,
}

impl DialogSession {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Whether a dialog is currently open
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The NPC the open dialog belongs to
    pub fn current_npc(&self) -> Option<u32> {
        self.active.as_ref().map(|d| d.npc_id)
    }

    /// Index of the line currently showing
    pub fn line_index(&self) -> Option<usize> {
        self.active.as_ref().map(|d| d.index)
    }

    /// Open a dialog with an NPC
    ///
    /// Ignored if a dialog is already open — the single-dialog invariant
    /// is enforced here, not by the caller.
    pub fn open<R: Rng>(
        &mut self,
        npc_id: u32,
        topic: &str,
        rng: &mut R,
        events: &mut EventQueue,
    ) -> bool {
        if self.active.is_some() {
            log::debug!("Dialog open request for npc {} ignored, one already open", npc_id);
            return false;
        }

        self.active = Some(ActiveDialog {
            npc_id,
            lines: build_script(topic, rng),
            index: 0,
            reveal: TypeReveal::new(),
        });

        events.cue(Cue::DialogOpen);
        events.push(GameEvent::DialogOpened { npc_id });
        true
    }

    /// Advance the dialog
    ///
    /// Valid at any moment, including mid-reveal: the current line is
    /// abandoned and the next one starts typing. At the last line the
    /// dialog closes and hands off to the checkpoint trigger flow.
    pub fn advance(&mut self, events: &mut EventQueue) -> DialogOutcome {
        let Some(dialog) = self.active.as_mut() else {
            return DialogOutcome::NotOpen;
        };

        events.cue(Cue::Click);

        if dialog.index + 1 < dialog.lines.len() {
            dialog.index += 1;
            dialog.reveal = TypeReveal::new();
            DialogOutcome::Advanced
        } else {
            let npc_id = dialog.npc_id;
            self.active = None;
            events.push(GameEvent::DialogClosed);
            DialogOutcome::Finished { npc_id }
        }
    }

    /// Close the dialog without triggering the checkpoint
    ///
    /// All transient state (typing timers, line queue) is dropped, so a
    /// later dialog starts clean. Returns the NPC id if one was open.
    pub fn cancel(&mut self, events: &mut EventQueue) -> Option<u32> {
        let dialog = self.active.take()?;
        events.cue(Cue::DialogClose);
        events.push(GameEvent::DialogClosed);
        Some(dialog.npc_id)
    }

    /// Advance the typing reveal (called every tick)
    pub fn update(&mut self, dt: f32, events: &mut EventQueue) {
        let Some(dialog) = self.active.as_mut() else {
            return;
        };

        let line_len = dialog.lines[dialog.index].chars().count();
        let reveal = &mut dialog.reveal;

        if reveal.lead_in_remaining > 0.0 {
            reveal.lead_in_remaining -= dt;
            if reveal.lead_in_remaining > 0.0 {
                return;
            }
            // Spill leftover time into the character timer
            reveal.char_timer = -reveal.lead_in_remaining;
            reveal.lead_in_remaining = 0.0;
        } else {
            reveal.char_timer += dt;
        }

        while reveal.char_timer >= CHAR_INTERVAL && reveal.chars_revealed < line_len {
            reveal.char_timer -= CHAR_INTERVAL;
            reveal.chars_revealed += 1;
            if reveal.chars_revealed % TYPING_CUE_EVERY == 0 {
                events.cue(Cue::TypingTick);
            }
        }
        if reveal.chars_revealed >= line_len {
            reveal.char_timer = 0.0;
        }
    }

    /// The revealed portion of the current line
    pub fn visible_text(&self) -> Option<&str> {
        let dialog = self.active.as_ref()?;
        let line = dialog.lines[dialog.index].as_str();
        let end = line
            .char_indices()
            .nth(dialog.reveal.chars_revealed)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        Some(&line[..end])
    }

    /// Whether the current line is fully revealed
    pub fn line_fully_revealed(&self) -> bool {
        self.active
            .as_ref()
            .map(|d| d.reveal.chars_revealed >= d.lines[d.index].chars().count())
            .unwrap_or(false)
    }
}
