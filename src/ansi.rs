//! ANSI SGR escape sequence generation.
//!
//! Splash lines are styled with the 256-color palette form of the Select
//! Graphic Rendition codes. Each function emits exactly one sequence into
//! any [`std::fmt::Write`] destination; composition into full lines happens
//! in [`crate::splash`]. Emitters write escape bytes only, never content.

use std::fmt::{self, Write};

bitflags::bitflags! {
    /// Text attributes as a bitfield for compact storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Set the foreground color to a 256-color palette index.
#[inline]
pub fn fg_256<W: Write>(w: &mut W, index: u8) -> fmt::Result {
    write!(w, "\x1b[38;5;{}m", index)
}

/// Set the background color to a 256-color palette index.
#[inline]
pub fn bg_256<W: Write>(w: &mut W, index: u8) -> fmt::Result {
    write!(w, "\x1b[48;5;{}m", index)
}

/// Set text attributes from bitflags.
///
/// Flags are joined into a single SGR sequence (`ESC[1;4m` for bold plus
/// underline). An empty set writes nothing at all rather than an empty
/// sequence.
#[allow(unused_assignments)]
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> fmt::Result {
    if attr.is_empty() {
        return Ok(());
    }

    write!(w, "\x1b[")?;
    let mut first = true;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    write!(w, ";")?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);
    emit!(Attr::ITALIC, 3);
    emit!(Attr::UNDERLINE, 4);
    emit!(Attr::BLINK, 5);
    emit!(Attr::INVERSE, 7);
    emit!(Attr::HIDDEN, 8);
    emit!(Attr::STRIKETHROUGH, 9);

    write!(w, "m")
}

/// Reset all colors and attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> fmt::Result {
    write!(w, "\x1b[0m")
}
