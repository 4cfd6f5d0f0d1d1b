//! Case-insensitive checks on free-text shot-type labels.

use once_cell::sync::Lazy;
use regex::Regex;

/// Off-dribble and pull-up variants: "off-dribble", "Off Dribble",
/// "off_the_dribble", "pull-up", "pullup jumper", ...
pub fn is_off_dribble(shot_type: &str) -> bool {
    let squashed: String = shot_type
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    squashed.contains("offdribble")
        || squashed.contains("offthedribble")
        || squashed.contains("pullup")
}

// The optional separator may be any character except a line terminator
static FREE_THROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^ft$|free[^\n\r\x{2028}\x{2029}]?throw").expect("valid free-throw pattern")
});

/// Free-throw labels: `free.?throw` anywhere, or exactly `ft`
pub fn is_free_throw(shot_type: &str) -> bool {
    FREE_THROW.is_match(shot_type)
}
