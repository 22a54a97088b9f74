//! Minimal key binding support.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A set of keys that trigger one action, with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Keys that trigger the binding.
    pub keys: Vec<KeyCode>,
    /// Short key label for help views, e.g. `"←/h"`.
    pub help: String,
    /// What the binding does.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    /// A binding for `keys` with no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.contains(&msg.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_listed_key() {
        let b = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]).with_help("←/h", "decrease");
        assert!(b.matches(&key(KeyCode::Left)));
        assert!(b.matches(&key(KeyCode::Char('h'))));
        assert!(!b.matches(&key(KeyCode::Right)));
        assert_eq!(b.help, "←/h");
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Home]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Home)));
    }
}
