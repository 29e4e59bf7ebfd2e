//! 1-based page numbers for fixed-size listings.

use crate::constants::PAGE_SIZE;

/// A 1-based page of a listing, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Self = Self(1);

    /// Build a page, clamping `0` to the first page.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        if number == 0 { Self::FIRST } else { Self(number) }
    }

    /// Parse the raw `page` query value.
    ///
    /// Reads the leading decimal digits (`"3abc"` is page 3). Absent,
    /// non-numeric, zero, negative or overflowing input yields the first page.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::FIRST;
        };
        let trimmed = raw.trim_start();
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
        trimmed
            .get(..digits_end)
            .and_then(|digits| digits.parse::<u32>().ok())
            .map_or(Self::FIRST, Self::new)
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn limit(self) -> i64 {
        PAGE_SIZE as i64
    }

    /// Rows to skip: `(page - 1) * PAGE_SIZE`.
    #[must_use]
    pub const fn offset(self) -> i64 {
        (self.0 as i64 - 1) * PAGE_SIZE as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_is_first() {
        assert_eq!(Page::parse(None), Page::FIRST);
    }

    #[test]
    fn test_numeric_page() {
        let page = Page::parse(Some("3"));
        assert_eq!(page.number(), 3);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_leading_digits_are_used() {
        assert_eq!(Page::parse(Some("2abc")).number(), 2);
        assert_eq!(Page::parse(Some(" 4")).number(), 4);
    }

    #[test]
    fn test_garbage_falls_back_to_first() {
        for raw in ["", "abc", "0", "-2", "99999999999999999999"] {
            assert_eq!(Page::parse(Some(raw)), Page::FIRST, "input {raw:?}");
        }
    }

    #[test]
    fn test_first_page_has_zero_offset() {
        assert_eq!(Page::FIRST.offset(), 0);
        assert_eq!(Page::new(0), Page::FIRST);
    }

    #[test]
    fn test_consecutive_pages_do_not_overlap() {
        let p = Page::new(5);
        let next = Page::new(6);
        assert_eq!(p.offset() + p.limit(), next.offset());
    }
}
