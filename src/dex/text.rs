//! Text shaping shared by the adapter's sub-assemblies.

/// Uppercases the first character and lowercases the rest, so
/// "special-attack" becomes "Special-attack" and "FIRE" becomes "Fire".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Turns an upstream category field name into a display label,
/// e.g. "double_damage_from" -> "Double damage from".
pub fn effect_label(field: &str) -> String {
    capitalize(field).replace('_', " ")
}

/// The upstream flavor texts embed form-feed characters as line breaks;
/// replace them with spaces.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace('\u{0c}', " ")
}
