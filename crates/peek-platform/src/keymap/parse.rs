use super::types::{KeyBind, KeybindError, Modifier};

/// Parses a human-readable chord like `"Ctrl+Shift+Z"` or `"Ctrl+Shift+Space"`
/// into a [`KeyBind`].
///
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Alt"` / `"Option"` -> `Alt`
/// - `"Cmd"` / `"Meta"` / `"Win"` -> `Meta`
/// - `"Shift"` -> `Shift`
///
/// The last token is always the key, even if it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, KeybindError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.len() == 1 && tokens[0].is_empty() {
        return Err(KeybindError::Empty);
    }

    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some(split) => split,
        None => return Err(KeybindError::Empty),
    };

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token)
            .ok_or_else(|| KeybindError::UnknownModifier(token.to_string()))?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    if key_token.is_empty() {
        return Err(KeybindError::MissingKey);
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" | "meta" | "win" | "super" => Some(Modifier::Meta),
        _ => None,
    }
}

/// Canonical key name shared by parsed chords and live key events.
pub fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "space" | " " => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
