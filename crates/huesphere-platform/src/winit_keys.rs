//! Winit key name normalization.
//!
//! Converts winit's `Key` debug representations to the names the input
//! state tracks. Winit reports platform back buttons (Android back,
//! browser/mouse back) as `"BrowserBack"` or `"GoBack"`; both collapse to
//! `"Back"`.

/// Convert a winit key name to the normalized string used by
/// [`ExitInputState`](crate::input::ExitInputState).
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "Escape" | "Esc" => "Escape".to_string(),
        "BrowserBack" | "GoBack" | "Back" => "Back".to_string(),
        " " => "Space".to_string(),
        _ => {
            // Single character keys: uppercase for consistency
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_variants() {
        assert_eq!(normalize_winit_key("Escape"), "Escape");
        assert_eq!(normalize_winit_key("Esc"), "Escape");
    }

    #[test]
    fn back_variants() {
        assert_eq!(normalize_winit_key("BrowserBack"), "Back");
        assert_eq!(normalize_winit_key("GoBack"), "Back");
    }

    #[test]
    fn space() {
        assert_eq!(normalize_winit_key(" "), "Space");
    }

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_winit_key("q"), "Q");
        assert_eq!(normalize_winit_key("é"), "É");
    }

    #[test]
    fn named_keys_passthrough() {
        assert_eq!(normalize_winit_key("F1"), "F1");
        assert_eq!(normalize_winit_key("ArrowUp"), "ArrowUp");
    }
}
