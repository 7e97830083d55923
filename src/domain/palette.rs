//! Elemental category to display colour lookup

/// Colour used for categories missing from the table.
pub const FALLBACK_COLOR: &str = "#68A090";

/// Category name (as the provider spells it) to hex colour.
pub static TYPE_COLORS: &[(&str, &str)] = &[
    ("bug", "#A8B820"),
    ("dark", "#705848"),
    ("dragon", "#7038F8"),
    ("electric", "#F8D030"),
    ("fairy", "#EE99AC"),
    ("fighting", "#C03028"),
    ("fire", "#F08030"),
    ("flying", "#A890F0"),
    ("ghost", "#705898"),
    ("grass", "#78C850"),
    ("ground", "#E0C068"),
    ("ice", "#98D8D8"),
    ("normal", "#A8A878"),
    ("poison", "#A040A0"),
    ("psychic", "#F85888"),
    ("rock", "#B8A038"),
    ("steel", "#B8B8D0"),
    ("water", "#6890F0"),
];

/// Hex colour for a category, case-insensitive.
pub fn type_color(category: &str) -> Option<&'static str> {
    let category = category.to_ascii_lowercase();
    TYPE_COLORS
        .binary_search_by(|(name, _)| name.cmp(&category.as_str()))
        .ok()
        .map(|idx| TYPE_COLORS[idx].1)
}

/// Like [`type_color`] but never fails.
pub fn type_color_or_fallback(category: &str) -> &'static str {
    type_color(category).unwrap_or(FALLBACK_COLOR)
}

/// Split `#RRGGBB` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
