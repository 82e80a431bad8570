//! Key scripts: a compact text form of a key sequence
//!
//! Plain characters stand for themselves; named keys go in angle brackets,
//! e.g. `bu<space>status.op<down><tab><enter>`. `<lt>` is a literal `<`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::error::{KeybindError, Result};
use super::keys::parse_key_string;

/// Parse a key script into key events
///
/// # Errors
///
/// Returns [`KeybindError::Unterminated`] for a `<` without a closing `>`
/// and [`KeybindError::UnknownKeyName`] for a name that is not a key.
pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>> {
    let mut keys = Vec::new();
    let mut rest = script;
    let mut offset = 0;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            let end = rest.find('>').ok_or(KeybindError::Unterminated(offset))?;
            let name = &rest[1..end];
            let key = if name == "lt" {
                KeyEvent::new(KeyCode::Char('<'), KeyModifiers::NONE)
            } else {
                parse_key_string(name).ok_or_else(|| KeybindError::UnknownKeyName(name.to_string()))?
            };
            keys.push(key);
            offset += end + 1;
            rest = &rest[end + 1..];
        } else {
            keys.push(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            offset += c.len_utf8();
            rest = &rest[c.len_utf8()..];
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_named_keys() {
        let keys = parse_key_script("bu<space><ctrl-k><Enter>").unwrap();
        let codes: Vec<KeyCode> = keys.iter().map(|k| k.code).collect();
        assert_eq!(
            codes,
            vec![
                KeyCode::Char('b'),
                KeyCode::Char('u'),
                KeyCode::Char(' '),
                KeyCode::Char('k'),
                KeyCode::Enter
            ]
        );
        assert_eq!(keys[3].modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_literal_angle_bracket() {
        let keys = parse_key_script("a<lt>b>").unwrap();
        let codes: Vec<KeyCode> = keys.iter().map(|k| k.code).collect();
        assert_eq!(
            codes,
            vec![KeyCode::Char('a'), KeyCode::Char('<'), KeyCode::Char('b'), KeyCode::Char('>')]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_key_script("ab<enter"), Err(KeybindError::Unterminated(2)));
        assert_eq!(
            parse_key_script("<warp>"),
            Err(KeybindError::UnknownKeyName("warp".to_string()))
        );
    }
}
