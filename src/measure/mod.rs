//! Line measurement and padding.
//!
//! All widths here are counted in Unicode code points, not display cells:
//! a two-cell CJK character counts the same as an ASCII letter. Banner art
//! is overwhelmingly ASCII, where the two notions agree, and counting code
//! points means the same input pads to the same width everywhere.

mod strip;

pub use strip::strip_ansi;

/// Width of a single line in code points.
#[inline]
pub fn line_width(line: &str) -> usize {
    line.chars().count()
}

/// The column width banner lines are padded to: the widest line, but never
/// narrower than `min_width`.
pub fn target_width(lines: &[&str], min_width: usize) -> usize {
    lines
        .iter()
        .map(|line| line_width(line))
        .fold(min_width, usize::max)
}

/// Pad `line` with trailing spaces to exactly `width` code points.
///
/// Content keeps the leading positions. Lines already at or beyond `width`
/// pass through unchanged, never truncated.
pub fn pad_line(line: &str, width: usize) -> String {
    let missing = width.saturating_sub(line_width(line));
    let mut padded = String::with_capacity(line.len() + missing);
    padded.push_str(line);
    for _ in 0..missing {
        padded.push(' ');
    }
    padded
}
