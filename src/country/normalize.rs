//! Answer normalization shared by the registry and the round engine.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Normalize free-form text into the canonical answer form.
///
/// Lower-cases, decomposes to NFD and drops combining marks so guesses are
/// diacritic-insensitive, replaces everything outside `[a-z0-9 ]` with a
/// space, collapses whitespace runs and trims. Total: always returns a
/// string, possibly empty.
pub fn normalize(input: &str) -> String {
    let mut scratch = String::with_capacity(input.len());
    for ch in input.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            match lower {
                'a'..='z' | '0'..='9' => scratch.push(lower),
                _ => scratch.push(' '),
            }
        }
    }
    let mut out = String::with_capacity(scratch.len());
    for word in scratch.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
