//! Case folding that keeps character positions aligned.

/// Lowercase a single character.
///
/// Characters whose lowercase form is more than one character (such as
/// `'İ'`) are returned unchanged so that a folded string has exactly as many
/// characters as its input.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Lowercase `text`, preserving the character count.
///
/// The whole string is lowered at once so context-dependent rules apply
/// (a word-final `'Σ'` becomes `'ς'`). When that changes the number of
/// characters, each character is folded on its own with [`fold_char`].
pub fn fold(text: &str) -> Vec<char> {
    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    if lowered.len() == text.chars().count() {
        lowered
    } else {
        text.chars().map(fold_char).collect()
    }
}
