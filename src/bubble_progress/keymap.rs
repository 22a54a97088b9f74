//! Keyboard bindings for driving the bar like a slider.

use crate::key::Binding;
use crossterm::event::KeyCode;

/// Keys that nudge progress when the host forwards key messages.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Adds one step.
    pub increase: Binding,
    /// Removes one step.
    pub decrease: Binding,
    /// Jumps to zero.
    pub to_start: Binding,
    /// Jumps to max.
    pub to_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Arrow keys and `h`/`l` step, Home/End jump.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        increase: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
            .with_help("→/l", "increase"),
        decrease: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
            .with_help("←/h", "decrease"),
        to_start: Binding::new(vec![KeyCode::Home]).with_help("home", "go to start"),
        to_end: Binding::new(vec![KeyCode::End]).with_help("end", "go to end"),
    }
}
