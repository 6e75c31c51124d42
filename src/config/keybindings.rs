//! Keyboard bindings configuration.

use super::loader::{ConfigError, KeybindingsConfig};
use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while the visualizer is showing; the input form handles
/// its own text entry.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Defaults with the `[keybindings]` overrides applied.
    ///
    /// An action listed in the config loses all of its default keys and
    /// gets exactly the listed ones; unlisted actions keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] for a key name that
    /// [`parse_key`] does not recognise.
    pub fn from_config(config: &KeybindingsConfig) -> Result<Self, ConfigError> {
        let mut bindings = Self::default();

        let overrides = [
            (KeyAction::Step, "step", &config.step),
            (KeyAction::Reset, "reset", &config.reset),
            (KeyAction::Help, "help", &config.help),
            (KeyAction::Quit, "quit", &config.quit),
        ];

        for (action, name, keys) in overrides {
            let Some(keys) = keys else {
                continue;
            };

            bindings.bindings.retain(|_, bound| *bound != action);
            for key in keys {
                let events = parse_key(key).ok_or_else(|| ConfigError::InvalidKey {
                    action: name.to_string(),
                    key: key.clone(),
                })?;
                for event in events {
                    bindings.bindings.insert(event, action);
                }
            }
        }

        Ok(bindings)
    }
}

/// Parse a key name from the config file into the events that produce it.
///
/// Accepts a single character (`"j"`, `"?"`), a named key (`space`,
/// `enter`, `tab`, `esc`, `backspace`, `left`, `right`, `up`, `down`), and
/// `ctrl+`, `alt+` or `shift+` prefixes. Names and prefixes are
/// case-insensitive. Shifted characters such as `?` match with or without
/// SHIFT, since terminals disagree on reporting it.
pub fn parse_key(spec: &str) -> Option<Vec<KeyEvent>> {
    let mut rest = spec.trim();
    let mut modifiers = KeyModifiers::NONE;

    'prefixes: loop {
        for (prefix, modifier) in [
            ("ctrl+", KeyModifiers::CONTROL),
            ("alt+", KeyModifiers::ALT),
            ("shift+", KeyModifiers::SHIFT),
        ] {
            if rest.len() > prefix.len()
                && rest
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            {
                modifiers |= modifier;
                rest = &rest[prefix.len()..];
                continue 'prefixes;
            }
        }
        break;
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    let mut events = vec![KeyEvent::new(code, modifiers)];
    if let KeyCode::Char(c) = code {
        if modifiers.is_empty() && (c.is_ascii_uppercase() || c.is_ascii_punctuation()) {
            events.push(KeyEvent::new(code, KeyModifiers::SHIFT));
        }
    }
    Some(events)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Stepping
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::Step,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Step,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::Step,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::Step,
        );

        // Reset
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Reset,
        );

        // Help ('?' arrives with SHIFT on most terminals)
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_space_to_step() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Step));
    }

    #[test]
    fn default_bindings_map_r_to_reset() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Reset));
    }

    #[test]
    fn default_bindings_map_shifted_question_mark_to_help() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Help));
    }

    #[test]
    fn default_bindings_map_ctrl_c_to_quit() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Quit));
    }

    #[test]
    fn unbound_key_has_no_action() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), None);
    }

    // ===== from_config =====

    fn keys(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn config_replaces_listed_action_only() {
        let config = KeybindingsConfig {
            step: keys(&["j"]),
            ..KeybindingsConfig::default()
        };

        let bindings = KeyBindings::from_config(&config).unwrap();

        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(bindings.get(press(KeyCode::Char('j'))), Some(KeyAction::Step));
        assert_eq!(bindings.get(press(KeyCode::Char(' '))), None);
        assert_eq!(bindings.get(press(KeyCode::Char('r'))), Some(KeyAction::Reset));
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let bindings = KeyBindings::from_config(&KeybindingsConfig::default()).unwrap();
        let key_event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Step));
    }

    #[test]
    fn config_rejects_unknown_key_name() {
        let config = KeybindingsConfig {
            quit: keys(&["hyper+q"]),
            ..KeybindingsConfig::default()
        };

        assert_eq!(
            KeyBindings::from_config(&config).unwrap_err(),
            ConfigError::InvalidKey {
                action: "quit".to_string(),
                key: "hyper+q".to_string(),
            }
        );
    }

    // ===== parse_key =====

    #[test]
    fn parse_key_named_and_modified_keys() {
        assert_eq!(
            parse_key("Space"),
            Some(vec![KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)])
        );
        assert_eq!(
            parse_key("ctrl+d"),
            Some(vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)])
        );
        assert_eq!(
            parse_key("down"),
            Some(vec![KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)])
        );
    }

    #[test]
    fn parse_key_shifted_punctuation_matches_both_ways() {
        assert_eq!(
            parse_key("!"),
            Some(vec![
                KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT),
            ])
        );
    }

    #[test]
    fn parse_key_rejects_words_and_empty_text() {
        assert_eq!(parse_key("jump"), None);
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("ctrl+"), None);
    }
}
