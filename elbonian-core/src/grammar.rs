//! Structural validation of Elbonian numerals.
//!
//! A well-formed numeral matches
//! `N? n? M{0,3} D? d? C{0,3} L? l? X{0,3} V? v? I{0,3}` with nothing
//! left over, and never contains both members of a subtractive/base
//! pair. The grammar is an ordered sequence of bounded-repetition
//! matchers rather than one monolithic pattern, so tier boundaries and
//! repeat limits stay independently testable.
//!
//! Ordering here is syntactic, not derived from glyph values; the glyph
//! sequence must stay in sync with [`crate::symbol::SYMBOL_TABLE`] by
//! hand (a test asserts both list the same glyphs in the same order).

/// Maximum repetitions of each glyph, in the mandatory glyph order.
const REPEAT_LIMITS: [(char, usize); 12] = [
    ('N', 1),
    ('n', 1),
    ('M', 3),
    ('D', 1),
    ('d', 1),
    ('C', 3),
    ('L', 1),
    ('l', 1),
    ('X', 3),
    ('V', 1),
    ('v', 1),
    ('I', 3),
];

/// Subtractive/base pairs that never appear in the same numeral.
const EXCLUSIVE_PAIRS: [(char, char); 4] = [('n', 'M'), ('d', 'C'), ('l', 'X'), ('v', 'I')];

/// Returns the first subtractive/base pair whose members both occur in `s`.
pub fn find_conflict(s: &str) -> Option<(char, char)> {
    EXCLUSIVE_PAIRS
        .into_iter()
        .find(|&(subtractive, base)| s.contains(subtractive) && s.contains(base))
}

/// Whether `s` matches the structural grammar exactly.
///
/// Each matcher greedily consumes up to its limit of its glyph; the
/// input is well formed when every character was consumed by some slot.
/// Any reordering, over-repetition, or unknown glyph leaves a character
/// behind and fails the match.
pub fn matches_structure(s: &str) -> bool {
    let mut rest = s.chars().peekable();
    for (glyph, limit) in REPEAT_LIMITS {
        let mut taken = 0;
        while taken < limit && rest.peek() == Some(&glyph) {
            rest.next();
            taken += 1;
        }
    }
    rest.next().is_none()
}
