//! Common source fixtures.

use lexkit::Source;
use once_cell::sync::Lazy;

/// Two short lines, ASCII only.
pub const TWO_LINES: &str = "ab\ncd";

/// Mixed-width text: combining mark, CJK, emoji sequence, CRLF ending.
pub const MIXED_WIDTH: &str = "c\u{0327}一🙏🏽\r\nx";

/// A tiny arithmetic program with a comment line.
pub const CALC_PROGRAM: &str = "# sum\n(price + 12) * count\n";

/// A shared source, demonstrating that sources are safely shared across
/// spans and readers (and, being `Sync`, across threads).
pub static SHARED: Lazy<Source> = Lazy::new(|| Source::new("shared.txt", TWO_LINES));

pub fn two_lines() -> Source {
    Source::new("two_lines.txt", TWO_LINES)
}

pub fn mixed_width() -> Source {
    Source::new("mixed.txt", MIXED_WIDTH)
}
