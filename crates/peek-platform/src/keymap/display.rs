use super::types::{KeyBind, Modifier};

/// Display order of modifiers, matching the platform menu convention.
const ORDER: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Meta];

/// Human-readable chord for tooltips, e.g. `Ctrl+Shift+X` or `⌃⇧X` on macOS.
///
/// Modifiers are always listed in the same order regardless of how the
/// chord was written.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mods = ORDER.iter().filter(|m| kb.modifiers.contains(*m));
    let key = key_label(&kb.key);

    if cfg!(target_os = "macos") {
        let mut out: String = mods.map(|m| symbol(*m)).collect();
        out.push_str(key);
        out
    } else {
        let mut parts: Vec<&str> = mods.map(|m| label(*m)).collect();
        parts.push(key);
        parts.join("+")
    }
}

fn symbol(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Ctrl => "\u{2303}",
        Modifier::Alt => "\u{2325}",
        Modifier::Shift => "\u{21E7}",
        Modifier::Meta => "\u{2318}",
    }
}

fn label(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Ctrl => "Ctrl",
        Modifier::Alt => "Alt",
        Modifier::Shift => "Shift",
        Modifier::Meta if cfg!(target_os = "windows") => "Win",
        Modifier::Meta => "Meta",
    }
}

fn key_label(key: &str) -> &str {
    match key {
        "Space" if cfg!(target_os = "macos") => "\u{2423}",
        other => other,
    }
}
