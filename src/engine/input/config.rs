// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Input configuration
/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Create the default configuration
    pub fn standard() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        // Remove any existing binding for this source
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_insert_with(Vec::new)
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to any action
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Get all bindings as a list
    pub fn get_all_bindings(&self) -> Vec<(InputSource, Action)> {
        self.bindings.iter().map(|(s, a)| (*s, *a)).collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in super::action::default_bindings() {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);

        assert_eq!(config.get_action(source), Some(Action::MoveLeft));
    }

    #[test]
    fn test_unbind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);
        config.unbind_source(source);

        assert_eq!(config.get_action(source), None);
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::new();
        let source1 = InputSource::key(KeyCode::KeyA);
        let source2 = InputSource::key(KeyCode::ArrowLeft);

        config.bind(source1, Action::MoveLeft);
        config.bind(source2, Action::MoveLeft);
        config.unbind_action(Action::MoveLeft);

        assert_eq!(config.get_action(source1), None);
        assert_eq!(config.get_action(source2), None);
    }

    #[test]
    fn test_get_sources() {
        let mut config = InputConfig::new();
        let source1 = InputSource::key(KeyCode::KeyA);
        let source2 = InputSource::key(KeyCode::ArrowLeft);

        config.bind(source1, Action::MoveLeft);
        config.bind(source2, Action::MoveLeft);

        let sources = config.get_sources(Action::MoveLeft);
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&source1));
        assert!(sources.contains(&source2));
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);

        config.bind(source, Action::MoveLeft);
        config.bind(source, Action::MoveRight); // Rebind to different action

        assert_eq!(config.get_action(source), Some(Action::MoveRight));
        assert!(!config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_standard_has_movement_and_interact() {
        let config = InputConfig::standard();
        assert!(config.has_binding(Action::MoveForward));
        assert!(config.has_binding(Action::Interact));
        assert!(config.has_binding(Action::Cancel));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(InputSource::key(KeyCode::KeyZ), Action::MoveLeft);
        config.reset_to_defaults();

        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyW)),
            Some(Action::MoveForward)
        );
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyZ)), None);
    }

    #[test]
    fn test_clear() {
        let mut config = InputConfig::standard();
        config.clear();
        assert!(config.get_all_bindings().is_empty());
    }
}
