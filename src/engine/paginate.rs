//! Reflowing the flat draft text into notebook spreads.
//!
//! Pagination is a pure view: the text is never stored per page. A spread is
//! cut out of the text by character offsets alone, so the same text and
//! geometry always produce the same pages, and concatenating every page in
//! order gives back exactly the original text.

use super::buffer::byte_offset;
use super::geometry::PageGeometry;

/// One open spread of the notebook: a left and a right page.
///
/// Each side holds at most `page_capacity` characters; newlines count as
/// characters and stay in the slice. The last spread of a document may be
/// partially filled, and side slices may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    pub index: usize,
    pub left: String,
    pub right: String,
}

/// Number of spreads the text occupies. An empty text still has one blank
/// spread, so the notebook is never pageless.
pub fn total_spreads(text_len: usize, geometry: PageGeometry) -> usize {
    text_len.div_ceil(geometry.spread_capacity()).max(1)
}

/// Cuts the spread at `index` out of `text`.
///
/// Indexes past the end of the text yield a spread with two empty pages.
pub fn spread_at(text: &str, index: usize, geometry: PageGeometry) -> Spread {
    let cap = geometry.page_capacity();
    let start = index * geometry.spread_capacity();
    Spread {
        index,
        left: char_slice(text, start, cap),
        right: char_slice(text, start + cap, cap),
    }
}

/// All spreads of the text, in order.
pub fn spreads(text: &str, geometry: PageGeometry) -> Vec<Spread> {
    let total = total_spreads(text.chars().count(), geometry);
    (0..total).map(|i| spread_at(text, i, geometry)).collect()
}

fn char_slice(text: &str, start: usize, len: usize) -> String {
    let from = byte_offset(text, start);
    let to = byte_offset(text, start + len);
    text[from..to].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 5 chars per line, 2 lines per page: page holds 10, spread holds 20.
    fn tiny() -> PageGeometry {
        PageGeometry::new(5, 2)
    }

    #[test]
    fn test_empty_text_has_one_blank_spread() {
        assert_eq!(total_spreads(0, tiny()), 1);
        let s = spread_at("", 0, tiny());
        assert_eq!(s.left, "");
        assert_eq!(s.right, "");
    }

    #[test]
    fn test_overflow_spills_onto_second_spread() {
        let text = "a".repeat(25);
        assert_eq!(total_spreads(25, tiny()), 2);

        let first = spread_at(&text, 0, tiny());
        assert_eq!(first.left, "a".repeat(10));
        assert_eq!(first.right, "a".repeat(10));

        let second = spread_at(&text, 1, tiny());
        assert_eq!(second.left, "a".repeat(5));
        assert_eq!(second.right, "");
    }

    #[test]
    fn test_exact_spread_boundary_adds_no_page() {
        assert_eq!(total_spreads(20, tiny()), 1);
        assert_eq!(total_spreads(21, tiny()), 2);
    }

    #[test]
    fn test_spreads_cover_the_whole_text() {
        let text = "one\ntwo three four five six seven eight nine ten";
        let joined: String = spreads(text, tiny())
            .iter()
            .map(|s| format!("{}{}", s.left, s.right))
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_sides_never_exceed_page_capacity() {
        let text = "words\nand lines that wrap unevenly across pages";
        for s in spreads(text, tiny()) {
            assert!(s.left.chars().count() <= 10);
            assert!(s.right.chars().count() <= 10);
        }
    }

    #[test]
    fn test_newlines_are_plain_characters() {
        let text = "ab\ncdefghijk";
        let s = spread_at(text, 0, tiny());
        assert_eq!(s.left, "ab\ncdefghi");
        assert_eq!(s.right, "jk");
    }

    #[test]
    fn test_pagination_is_stable() {
        let text = "stable across calls, no hidden state";
        assert_eq!(spreads(text, tiny()), spreads(text, tiny()));
    }

    #[test]
    fn test_multibyte_slicing() {
        let text = "àèìòù".repeat(5); // 25 chars
        let s = spread_at(&text, 1, tiny());
        assert_eq!(s.left.chars().count(), 5);
        assert_eq!(s.right, "");
    }

    #[test]
    fn test_out_of_range_spread_is_blank() {
        let s = spread_at("short", 7, tiny());
        assert_eq!(s.left, "");
        assert_eq!(s.right, "");
    }
}
