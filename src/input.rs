//! UI-agnostic parsing of typed console input.

/// Parses a 1-based menu selection into a 0-based option index.
///
/// Surrounding whitespace is ignored. Anything else that is not a number in
/// `1..=option_count` is rejected.
pub fn parse_menu_choice(input: &str, option_count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=option_count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

/// Validates a typed character name. Blank names are rejected.
pub fn parse_player_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}
