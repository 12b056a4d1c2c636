//! Character classification helpers shared by the segmentation strategies.

/// Check whether `c` is a CJK ideograph (Han character).
///
/// Covers the ideographic number zero, the unified ideograph blocks with
/// extensions A through E, and both compatibility ideograph blocks.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c,
        '\u{3007}' |                // Ideographic number zero
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}' | // CJK Extension E
        '\u{2F800}'..='\u{2FA1F}'   // CJK Compatibility Ideographs Supplement
    )
}

/// Check whether `c` counts as a word character for boundary purposes.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Keep only the CJK ideographs of `text`.
pub fn cjk_only(text: &str) -> String {
    text.chars().filter(|c| is_cjk_ideograph(*c)).collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
