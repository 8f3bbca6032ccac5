//! ANSI escape sequence stripping.
//!
//! The renderer wraps every banner line in SGR sequences; this module is
//! the inverse, recovering the visible text. Useful when a banner also goes
//! somewhere colors do not belong, such as a log file, and for checking
//! visible widths.

use std::borrow::Cow;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when the input contains no `ESC` byte, so the
/// common unstyled case allocates nothing. Handles the full escape family,
/// not only the SGR sequences this crate emits: CSI sequences run through
/// their final byte and string-terminated sequences (OSC, DCS, PM, APC) run
/// until `BEL` or `ESC \`; anything else after `ESC` is treated as a
/// two-character escape. A malformed or unterminated sequence swallows the
/// rest of the input rather than leaking escape bytes into the result.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != ESC {
            // Copy the plain run up to the next ESC. ESC is a one-byte
            // ASCII character, so both run boundaries are char boundaries.
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            out.push_str(&s[start..i]);
            continue;
        }

        // Bare ESC at the end of input: swallow it.
        let Some(&kind) = bytes.get(i + 1) else {
            break;
        };
        i += 2;

        match kind {
            // CSI: parameter bytes (0x30-0x3F) and intermediate bytes
            // (0x20-0x2F), then one final byte in 0x40-0x7E.
            b'[' => {
                while let Some(&b) = bytes.get(i) {
                    i += 1;
                    if (0x40..=0x7E).contains(&b) {
                        break;
                    }
                    if !(0x20..=0x3F).contains(&b) {
                        // Not part of any CSI sequence. Leave it for the
                        // outer loop.
                        i -= 1;
                        break;
                    }
                }
            }
            // String-terminated: OSC, DCS, PM, APC.
            b']' | b'P' | b'^' | b'_' => {
                while let Some(&b) = bytes.get(i) {
                    if b == BEL {
                        i += 1;
                        break;
                    }
                    if b == ESC && bytes.get(i + 1) == Some(&b'\\') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            // Two-character escape: the kind byte was the whole payload.
            _ => {}
        }
    }

    Cow::Owned(out)
}
