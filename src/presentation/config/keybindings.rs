use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

use crate::domain::RegionId;

/// User-facing commands that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    ShowAllRegions,
    ShowAmericas,
    ShowEurope,
    ShowAsia,
    ShowAfrica,
    ShowOceania,
    NextRegion,
    PrevRegion,
    OpenChat,
    Quit,
    Suspend,
}

impl Action {
    /// The region a `Show*` action selects
    pub fn region(self) -> Option<RegionId> {
        match self {
            Action::ShowAllRegions => Some(RegionId::All),
            Action::ShowAmericas => Some(RegionId::Americas),
            Action::ShowEurope => Some(RegionId::Europe),
            Action::ShowAsia => Some(RegionId::Asia),
            Action::ShowAfrica => Some(RegionId::Africa),
            Action::ShowOceania => Some(RegionId::Oceania),
            _ => None,
        }
    }
}

/// Flat mapping from key sequence to action
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Looks up a single key press, ignoring event kind and state
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.get(&vec![normalized]).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => {
            let n = f[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parses `<Ctrl-c>` or `<g><g>` style sequences
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            seq.strip_prefix('<')
                .or_else(|| seq.strip_suffix('>'))
                .unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_keys() {
        assert_eq!(
            parse_key_sequence("<q>"),
            Ok(vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())])
        );
        assert_eq!(
            parse_key_sequence("<Right>"),
            Ok(vec![KeyEvent::new(KeyCode::Right, KeyModifiers::empty())])
        );
        assert_eq!(
            parse_key_sequence("<F5>"),
            Ok(vec![KeyEvent::new(KeyCode::F(5), KeyModifiers::empty())])
        );
    }

    #[test]
    fn test_with_modifiers() {
        assert_eq!(
            parse_key_sequence("<Ctrl-c>"),
            Ok(vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)])
        );
        assert_eq!(
            parse_key_sequence("<ctrl-alt-a>"),
            Ok(vec![KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )])
        );
        assert_eq!(
            parse_key_sequence("<BackTab>"),
            Ok(vec![KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)])
        );
    }

    #[test]
    fn test_multiple_keys() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
            ])
        );
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_sequence("<ctrl-unknown>").is_err());
        assert!(parse_key_sequence("<q").is_err());
        assert!(parse_key_sequence("<fx>").is_err());
    }

    #[test]
    fn test_action_region() {
        assert_eq!(Action::ShowEurope.region(), Some(RegionId::Europe));
        assert_eq!(Action::OpenChat.region(), None);
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings = json5::from_str(r#"{ "<3>": "ShowEurope", "<c>": "OpenChat" }"#)?;

        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(bindings.action_for(&key), Some(Action::ShowEurope));
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(bindings.action_for(&key), None);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_bad_key() {
        let result: Result<KeyBindings, _> = json5::from_str(r#"{ "<nope-key>": "Quit" }"#);
        assert!(result.is_err());
    }
}
