use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use strum::Display;

/// User-facing intents that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    Submit,
    NextField,
    PrevField,
    ClearForm,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// First single-key binding for an action, for on-screen hints
    pub fn key_for(&self, action: Action) -> Option<String> {
        let mut keys: Vec<String> = self
            .iter()
            .filter(|(seq, bound)| **bound == action && seq.len() == 1)
            .map(|(seq, _)| key_event_to_string(&seq[0]))
            .collect();
        keys.sort();
        keys.into_iter().next()
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
                    .map_err(D::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(KeyBindings(keybindings))
    }
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
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
    let code = match raw {
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
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            let mut chars = c.chars();
            let Some(mut c) = chars.next() else {
                return Err(format!("Unable to parse {raw}"));
            };
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(code, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => "?".to_string(),
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("Ctrl");
    }
    // BackTab already implies shift
    if key_event.modifiers.intersects(KeyModifiers::SHIFT) && key_event.code != KeyCode::BackTab
    {
        modifiers.push("Shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("Alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);
    key
}

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
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("a", KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))]
    #[case("enter", KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))]
    #[case("esc", KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))]
    #[case("ctrl-s", KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))]
    #[case("Ctrl-L", KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL))]
    #[case("alt-enter", KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))]
    #[case("shift-a", KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))]
    #[case("backtab", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("ctrl-alt-a", KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT))]
    fn test_parse_key_event(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_event(raw).unwrap(), expected);
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_event("ctrl-invalid-key").is_err());
    }

    #[test]
    fn test_parse_key_sequence() {
        assert_eq!(
            parse_key_sequence("<Ctrl-s>").unwrap(),
            vec![KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)]
        );
        assert_eq!(
            parse_key_sequence("<g><g>").unwrap(),
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ]
        );
        assert!(parse_key_sequence("<Ctrl-s").is_err());
    }

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), "Ctrl-s")]
    #[case(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), "BackTab")]
    #[case(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), "Tab")]
    #[case(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT), "Alt-Space")]
    fn test_key_event_to_string(#[case] key: KeyEvent, #[case] expected: &str) {
        assert_eq!(key_event_to_string(&key), expected);
    }

    #[test]
    fn test_deserialize_keybindings() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<Ctrl-s>": "Submit", "<Tab>": "NextField" }"#).unwrap();

        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)]),
            Some(&Action::Submit)
        );
        assert_eq!(bindings.key_for(Action::NextField), Some("Tab".to_string()));
        assert_eq!(bindings.key_for(Action::Quit), None);
    }

    #[test]
    fn test_deserialize_rejects_bad_key() {
        let parsed: Result<KeyBindings, _> = json5::from_str(r#"{ "<Ctrl-nope>": "Submit" }"#);
        assert!(parsed.is_err());
    }
}
