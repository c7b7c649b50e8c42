//! The Elbonian symbol table.
//!
//! Twelve glyphs with fixed values, ordered descending. The table is
//! immutable and process-wide; the codec iterates it in this order and
//! the grammar lists the same glyphs in the same order.

/// Smallest value representable as an Elbonian numeral.
pub const MIN_VALUE: u16 = 1;

/// Largest value representable as an Elbonian numeral (`"NnDdLlVv"`).
pub const MAX_VALUE: u16 = 9999;

/// The (glyph, value) pairs of the Elbonian system, descending by value.
pub const SYMBOL_TABLE: [(char, u16); 12] = [
    ('N', 5000),
    ('n', 4000),
    ('M', 1000),
    ('D', 500),
    ('d', 400),
    ('C', 100),
    ('L', 50),
    ('l', 40),
    ('X', 10),
    ('V', 5),
    ('v', 4),
    ('I', 1),
];

/// Look up the value of a single Elbonian glyph.
pub fn value_of(glyph: char) -> Option<u16> {
    SYMBOL_TABLE
        .iter()
        .find(|&&(g, _)| g == glyph)
        .map(|&(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        for pair in SYMBOL_TABLE.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn value_lookup() {
        assert_eq!(value_of('N'), Some(5000));
        assert_eq!(value_of('v'), Some(4));
        assert_eq!(value_of('I'), Some(1));
        assert_eq!(value_of('F'), None);
        assert_eq!(value_of('i'), None);
    }

    #[test]
    fn max_value_is_the_sum_of_one_glyph_per_slot() {
        // NnDdLlVv is the largest numeral the exclusion rules allow.
        let max: u16 = "NnDdLlVv".chars().filter_map(value_of).sum();
        assert_eq!(max, MAX_VALUE);
    }
}
