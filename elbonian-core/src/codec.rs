//! Numeral conversions.
//!
//! Both directions are total for validated input: validation guarantees
//! every glyph is in the symbol table and every integer is in range, so
//! neither function has a failure path.

use crate::symbol::SYMBOL_TABLE;

/// Sum the glyph values of a validated numeral.
///
/// Summation is order-independent, which is safe only because
/// validation already pinned the input to a unique well-formed
/// structure.
pub fn numeral_value(numeral: &str) -> u16 {
    numeral.chars().filter_map(crate::symbol::value_of).sum()
}

/// Build the canonical numeral for a value in `1..=9999` by greedy
/// highest-first subtraction over the symbol table.
///
/// The 4x subtractive glyphs (n, d, l, v) keep every magnitude tier to
/// at most one subtractive glyph plus at most three base glyphs, so the
/// greedy result is unique and always satisfies the structural grammar.
pub fn canonical_numeral(value: u16) -> String {
    let mut remaining = value;
    let mut numeral = String::new();
    for (glyph, glyph_value) in SYMBOL_TABLE {
        while remaining >= glyph_value {
            numeral.push(glyph);
            remaining -= glyph_value;
        }
    }
    numeral
}
