//! Raw 5x7 bitmap data for the built-in font.
//!
//! Each entry is 7 rows of 5 symbols, `#` for a filled cell and `.` for an
//! empty one. The table only defines uppercase entries; callers fold case
//! before lookup.

/// Pattern returned for space and for any unsupported character.
pub(super) const BLANK: [&str; 7] = ["....."; 7];

/// Bitmap rows for `ch`, or the blank pattern when the character is not in
/// the font. The blank fallback is an explicit default arm so lookups are
/// total.
pub(super) fn rows(ch: char) -> &'static [&'static str; 7] {
    match ch {
        'A' => &[".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => &["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => &[".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => &["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => &["#####", "#....", "#....", "###..", "#....", "#....", "#####"],
        'F' => &["#####", "#....", "#....", "###..", "#....", "#....", "#...."],
        'G' => &[".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".###."],
        'H' => &["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => &["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"],
        'J' => &["..###", "...#.", "...#.", "...#.", "#..#.", "#..#.", ".##.."],
        'K' => &["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => &["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => &["#...#", "##.##", "#.#.#", "#...#", "#...#", "#...#", "#...#"],
        'N' => &["#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#", "#...#"],
        'O' => &[".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => &["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => &[".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => &["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => &[".###.", "#...#", "#....", ".###.", "....#", "#...#", ".###."],
        'T' => &["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => &["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => &["#...#", "#...#", "#...#", "#...#", ".#.#.", ".#.#.", "..#.."],
        'W' => &["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"],
        'X' => &["#...#", ".#.#.", "..#..", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => &["#...#", ".#.#.", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'Z' => &["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],
        '0' => &[".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => &["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => &[".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => &["####.", "....#", "...#.", "..##.", "....#", "#...#", ".###."],
        '4' => &["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => &["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => &[".###.", "#....", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => &["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => &[".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => &[".###.", "#...#", "#...#", ".####", "....#", "....#", ".###."],
        '!' => &["..#..", "..#..", "..#..", "..#..", ".....", "..#..", "....."],
        '.' => &[".....", ".....", ".....", ".....", ".....", "..#..", "....."],
        ' ' => &BLANK,
        _ => &BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::glyph;

    const SUPPORTED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !.";

    #[test]
    fn test_every_entry_is_five_by_seven() {
        for ch in SUPPORTED.chars() {
            let entry = rows(ch);
            assert_eq!(entry.len(), glyph::HEIGHT, "wrong row count for {ch:?}");
            for row in entry.iter() {
                assert_eq!(row.len(), glyph::WIDTH, "wrong row width for {ch:?}");
            }
        }
    }

    #[test]
    fn test_entries_use_only_table_symbols() {
        for ch in SUPPORTED.chars() {
            for row in rows(ch).iter() {
                assert!(
                    row.chars().all(|s| s == '#' || s == '.'),
                    "unexpected symbol in entry for {ch:?}"
                );
            }
        }
    }

    #[test]
    fn test_space_is_the_blank_glyph() {
        assert_eq!(rows(' '), &BLANK);
    }

    #[test]
    fn test_unsupported_char_falls_back_to_blank() {
        for ch in ['~', '?', 'ß', '€'] {
            assert_eq!(rows(ch), &BLANK);
        }
    }
}
