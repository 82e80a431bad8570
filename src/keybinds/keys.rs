//! Conversion between crossterm key events and their config names

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Config name of a key event, e.g. `"ctrl-k"`, `"enter"`, `"a"`
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Parse a key name like `"ctrl-t"` into a key event
///
/// Single characters keep their case; named keys ignore it.
#[must_use]
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    if s == "-" {
        return Some(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    let (prefix, key_part) = match s.rsplit_once('-') {
        // "ctrl--" binds the minus key
        Some((prefix, "")) => (prefix.strip_suffix('-')?, "-"),
        Some((prefix, key)) => (prefix, key),
        None => ("", s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('-').filter(|part| !part.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let mut chars = key_part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyEvent::new(KeyCode::Char(c), modifiers));
    }

    let code = match key_part.to_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "btab" | "backtab" => KeyCode::BackTab,
        "bspace" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        name if name.starts_with('f') => KeyCode::F(name[1..].parse().ok()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_string() {
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some("ctrl-k".to_string())
        );
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some("space".to_string())
        );
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)),
            Some("shift-up".to_string())
        );
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some("A".to_string())
        );
    }

    #[test]
    fn test_parse_key_string() {
        assert_eq!(
            parse_key_string("ctrl-t"),
            Some(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            parse_key_string("Enter"),
            Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
        );
        assert_eq!(
            parse_key_string("alt-f2"),
            Some(KeyEvent::new(KeyCode::F(2), KeyModifiers::ALT))
        );
        assert_eq!(
            parse_key_string("ctrl--"),
            Some(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key_string("hyper-x"), None);
        assert_eq!(parse_key_string("nonsense"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for name in ["ctrl-k", "esc", "bspace", "tab", "space", "alt-up", "f5", "x"] {
            let key = parse_key_string(name).unwrap();
            assert_eq!(key_to_string(&key).as_deref(), Some(name));
        }
    }
}
