// NPC activity state machine

/// What an NPC is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcActivity {
    /// Standing around
    Idle,
    /// Greeting a nearby player
    Waving,
    /// A dialog just opened with this NPC
    Excited,
    /// Scripted conversation pose (entered only by explicit call)
    Talking,
}

impl Default for NpcActivity {
    fn default() -> Self {
        Self::Idle
    }
}

impl NpcActivity {
    /// Animation clip name for this activity
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Waving => "wave",
            Self::Excited => "excited",
            Self::Talking => "talk",
        }
    }
}

/// How long the excited burst lasts before settling back to waving
const EXCITED_DURATION: f32 = 2.5;

/// State machine for NPC greeting behavior
///
/// Once the owning checkpoint completes, the machine freezes: the current
/// state is abandoned where it stands and no transition fires again.
#[derive(Debug)]
pub struct NpcStateMachine {
    current: NpcActivity,
    previous: NpcActivity,
    state_time: f32,
    excited_remaining: f32,
    frozen: bool,
}

impl Default for NpcStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl NpcStateMachine {
    pub fn new() -> Self {
        Self {
            current: NpcActivity::Idle,
            previous: NpcActivity::Idle,
            state_time: 0.0,
            excited_remaining: 0.0,
            frozen: false,
        }
    }

    /// Get the current activity
    pub fn activity(&self) -> NpcActivity {
        self.current
    }

    /// Get the previous activity
    pub fn previous_activity(&self) -> NpcActivity {
        self.previous
    }

    /// Time spent in the current activity
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Whether the machine is frozen (checkpoint completed)
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freeze the machine; all further transitions are ignored
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Player entered the proximity radius
    pub fn player_entered(&mut self) {
        if self.current == NpcActivity::Idle {
            self.transition(NpcActivity::Waving);
        }
    }

    /// Player left the proximity radius
    pub fn player_left(&mut self) {
        if self.current == NpcActivity::Waving {
            self.transition(NpcActivity::Idle);
        }
    }

    /// A dialog opened with this NPC
    pub fn start_dialog(&mut self) {
        if matches!(self.current, NpcActivity::Idle | NpcActivity::Waving) {
            self.transition(NpcActivity::Excited);
            if self.current == NpcActivity::Excited {
                self.excited_remaining = EXCITED_DURATION;
            }
        }
    }

    /// Enter the scripted talking pose (external call only)
    pub fn start_talking(&mut self) {
        self.transition(NpcActivity::Talking);
    }

    /// Advance timers (called every tick)
    pub fn update(&mut self, dt: f32) {
        if self.frozen {
            return;
        }
        self.state_time += dt;

        // Excited is a timed burst, not player-driven
        if self.current == NpcActivity::Excited {
            self.excited_remaining -= dt;
            if self.excited_remaining <= 0.0 {
                self.excited_remaining = 0.0;
                self.transition(NpcActivity::Waving);
            }
        }
    }

    fn transition(&mut self, next: NpcActivity) {
        if self.frozen || self.current == next {
            return;
        }
        self.previous = self.current;
        self.current = next;
        self.state_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sm = NpcStateMachine::new();
        assert_eq!(sm.activity(), NpcActivity::Idle);
        assert!(!sm.is_frozen());
    }

    #[test]
    fn test_wave_on_player_entering() {
        let mut sm = NpcStateMachine::new();
        sm.player_entered();
        assert_eq!(sm.activity(), NpcActivity::Waving);
        assert_eq!(sm.previous_activity(), NpcActivity::Idle);
    }

    #[test]
    fn test_idle_on_player_leaving() {
        let mut sm = NpcStateMachine::new();
        sm.player_entered();
        sm.player_left();
        assert_eq!(sm.activity(), NpcActivity::Idle);
    }

    #[test]
    fn test_excited_on_dialog_start() {
        let mut sm = NpcStateMachine::new();
        sm.player_entered();
        sm.start_dialog();
        assert_eq!(sm.activity(), NpcActivity::Excited);
    }

    #[test]
    fn test_excited_from_idle() {
        let mut sm = NpcStateMachine::new();
        sm.start_dialog();
        assert_eq!(sm.activity(), NpcActivity::Excited);
    }

    #[test]
    fn test_excited_decays_to_waving() {
        let mut sm = NpcStateMachine::new();
        sm.start_dialog();

        // Not player-driven: time alone ends the burst
        for _ in 0..200 {
            sm.update(1.0 / 60.0);
        }
        assert_eq!(sm.activity(), NpcActivity::Waving);
    }

    #[test]
    fn test_excited_persists_before_timeout() {
        let mut sm = NpcStateMachine::new();
        sm.start_dialog();
        sm.update(1.0);
        assert_eq!(sm.activity(), NpcActivity::Excited);
    }

    #[test]
    fn test_leaving_does_not_cancel_excited() {
        let mut sm = NpcStateMachine::new();
        sm.start_dialog();
        sm.player_left();
        assert_eq!(sm.activity(), NpcActivity::Excited);
    }

    #[test]
    fn test_talking_only_by_explicit_call() {
        let mut sm = NpcStateMachine::new();
        sm.player_entered();
        sm.start_dialog();
        for _ in 0..300 {
            sm.update(1.0 / 60.0);
        }
        assert_ne!(sm.activity(), NpcActivity::Talking);

        sm.start_talking();
        assert_eq!(sm.activity(), NpcActivity::Talking);
    }

    #[test]
    fn test_freeze_blocks_transitions() {
        let mut sm = NpcStateMachine::new();
        sm.player_entered();
        sm.freeze();

        // The state is abandoned where it stands
        assert_eq!(sm.activity(), NpcActivity::Waving);

        sm.player_left();
        sm.start_dialog();
        sm.start_talking();
        sm.update(10.0);
        assert_eq!(sm.activity(), NpcActivity::Waving);
    }

    #[test]
    fn test_state_time_resets_on_transition() {
        let mut sm = NpcStateMachine::new();
        sm.update(1.0);
        assert!(sm.state_time() >= 1.0);

        sm.player_entered();
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(NpcActivity::Idle.animation_name(), "idle");
        assert_eq!(NpcActivity::Waving.animation_name(), "wave");
        assert_eq!(NpcActivity::Excited.animation_name(), "excited");
        assert_eq!(NpcActivity::Talking.animation_name(), "talk");
    }
}
