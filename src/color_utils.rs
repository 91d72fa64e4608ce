//! Fixed lookup tables for turning catalog color data into the words the
//! observation log uses.

use crate::constants::TRANSPARENT_COLOR;

/// Exact-match flame test table (hex → spoken name).
pub const FLAME_COLOR_TABLE: &[(&str, &str)] = &[
    ("#FFD700", "golden yellow"),
    ("#00FF7F", "emerald green"),
    ("#FF4500", "crimson red"),
    ("#E6E6FA", "lilac"),
    ("#00BFFF", "azure blue"),
];

pub const UNKNOWN_FLAME_COLOR: &str = "colored";

/// Name a flame color from its hex code. Exact match only - any hex the
/// table does not know collapses to the word "colored".
pub fn flame_color_name(hex: &str) -> &'static str {
    for (code, name) in FLAME_COLOR_TABLE {
        if *code == hex {
            return name;
        }
    }
    UNKNOWN_FLAME_COLOR
}

pub fn is_transparent(color: &str) -> bool {
    color == TRANSPARENT_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_flame_colors() {
        assert_eq!(flame_color_name("#FFD700"), "golden yellow");
        assert_eq!(flame_color_name("#00FF7F"), "emerald green");
        assert_eq!(flame_color_name("#E6E6FA"), "lilac");
    }

    #[test]
    fn test_unknown_flame_color_falls_back() {
        assert_eq!(flame_color_name("#123456"), UNKNOWN_FLAME_COLOR);
        // lowercase is not an exact match
        assert_eq!(flame_color_name("#ffd700"), UNKNOWN_FLAME_COLOR);
        assert_eq!(flame_color_name(""), UNKNOWN_FLAME_COLOR);
    }

    #[test]
    fn test_is_transparent() {
        assert!(is_transparent("transparent"));
        assert!(!is_transparent("#ffffff"));
    }
}
