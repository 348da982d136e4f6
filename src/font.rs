//! # Fixed 5x8 font of the HCMS-2902
//!
//! Every character is a [`Glyph`] of five bytes, one per dot column from left to right.
//! Within a byte bit 0 is the top dot. The HCMS-2902 has seven dot rows, bit 7 is shifted out
//! but not shown.
//!
//! The table only knows uppercase letters, digits, space and `= . : > < / ! | - + #`.
//! Everything else (lowercase included) is drawn as [`UNKNOWN`], which is the same cross as 'X'.

/// Dot columns of one digit
pub type Glyph = [u8; crate::NUM_COLUMNS];

/// Glyph shown for characters the table doesn't know about
pub const UNKNOWN: Glyph = [0x63, 0x14, 0x08, 0x14, 0x63];

const GLYPHS: &[(u8, Glyph)] = &[
    (b' ', [0x00, 0x00, 0x00, 0x00, 0x00]),
    (b'A', [0x7e, 0x09, 0x09, 0x09, 0x7e]),
    (b'B', [0x7f, 0x49, 0x49, 0x49, 0x76]),
    (b'C', [0x3e, 0x41, 0x41, 0x41, 0x22]),
    (b'D', [0x7f, 0x41, 0x41, 0x41, 0x7e]),
    (b'E', [0x7f, 0x49, 0x49, 0x49, 0x41]),
    (b'F', [0x7f, 0x09, 0x09, 0x09, 0x01]),
    (b'G', [0x7e, 0x41, 0x49, 0x49, 0x39]),
    (b'H', [0x7f, 0x08, 0x08, 0x08, 0x7f]),
    (b'I', [0x00, 0x41, 0x7f, 0x41, 0x00]),
    (b'J', [0x00, 0x20, 0x40, 0x40, 0x7f]),
    (b'K', [0x7f, 0x08, 0x14, 0x22, 0x41]),
    (b'L', [0x7f, 0x40, 0x40, 0x40, 0x40]),
    (b'M', [0x7f, 0x02, 0x04, 0x02, 0x7f]),
    (b'N', [0x7f, 0x04, 0x08, 0x10, 0x7f]),
    (b'O', [0x3e, 0x41, 0x41, 0x41, 0x3e]),
    (b'P', [0x7f, 0x09, 0x09, 0x09, 0x07]),
    (b'Q', [0x3e, 0x41, 0x51, 0x61, 0x7e]),
    (b'R', [0x7f, 0x09, 0x19, 0x29, 0x46]),
    (b'S', [0x4f, 0x49, 0x49, 0x49, 0x79]),
    (b'T', [0x01, 0x01, 0x7f, 0x01, 0x01]),
    (b'U', [0x3f, 0x40, 0x40, 0x40, 0x3f]),
    (b'V', [0x1f, 0x20, 0x40, 0x20, 0x1f]),
    (b'W', [0x3f, 0x40, 0x30, 0x40, 0x3f]),
    (b'X', UNKNOWN),
    (b'Y', [0x07, 0x08, 0x78, 0x08, 0x07]),
    (b'Z', [0x61, 0x51, 0x49, 0x45, 0x43]),
    (b'0', [0x3e, 0x41, 0x41, 0x41, 0x3e]),
    (b'1', [0x00, 0x00, 0x04, 0x02, 0x7f]),
    (b'2', [0x46, 0x61, 0x51, 0x49, 0x46]),
    (b'3', [0x22, 0x41, 0x49, 0x49, 0x36]),
    (b'4', [0x18, 0x14, 0x12, 0x7f, 0x10]),
    (b'5', [0x27, 0x45, 0x45, 0x45, 0x39]),
    (b'6', [0x3e, 0x49, 0x49, 0x49, 0x32]),
    (b'7', [0x01, 0x01, 0x79, 0x05, 0x03]),
    (b'8', [0x36, 0x49, 0x49, 0x49, 0x36]),
    (b'9', [0x06, 0x49, 0x49, 0x49, 0x3e]),
    (b'=', [0x24, 0x24, 0x24, 0x24, 0x24]),
    (b'.', [0x00, 0x60, 0x60, 0x00, 0x00]),
    (b':', [0x00, 0x66, 0x66, 0x00, 0x00]),
    (b'>', [0x00, 0x41, 0x22, 0x14, 0x08]),
    (b'<', [0x08, 0x14, 0x22, 0x41, 0x00]),
    (b'/', [0x20, 0x10, 0x08, 0x04, 0x02]),
    (b'!', [0x00, 0x00, 0x5f, 0x00, 0x00]),
    (b'|', [0x00, 0x00, 0x7f, 0x00, 0x00]),
    (b'-', [0x08, 0x08, 0x08, 0x08, 0x08]),
    (b'+', [0x08, 0x08, 0x3e, 0x08, 0x08]),
    // all dots on, handy to test a display
    (b'#', [0xff, 0xff, 0xff, 0xff, 0xff]),
];

// ascii code -> glyph, built at compile time
static FONT: [Glyph; 128] = build_font();

const fn build_font() -> [Glyph; 128] {
    let mut font = [UNKNOWN; 128];
    let mut i = 0;
    while i < GLYPHS.len() {
        let (c, bitmap) = GLYPHS[i];
        font[c as usize] = bitmap;
        i += 1;
    }
    font
}

/// Looks up the glyph for an ascii code. Codes outside the table give [`UNKNOWN`].
pub fn glyph(c: u8) -> &'static Glyph {
    FONT.get(c as usize).unwrap_or(&UNKNOWN)
}

/// Looks up the glyph for a `char`. Non-ascii characters give [`UNKNOWN`].
pub fn char_glyph(c: char) -> &'static Glyph {
    if c.is_ascii() {
        glyph(c as u8)
    } else {
        &UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph(b' '), &[0x00; 5]);
    }

    #[test]
    fn known_glyphs() {
        assert_eq!(glyph(b'A'), &[0x7e, 0x09, 0x09, 0x09, 0x7e]);
        assert_eq!(glyph(b'T'), &[0x01, 0x01, 0x7f, 0x01, 0x01]);
        assert_eq!(glyph(b'7'), &[0x01, 0x01, 0x79, 0x05, 0x03]);
        assert_eq!(glyph(b'#'), &[0xff; 5]);
        assert_eq!(glyph(b':'), &[0x00, 0x66, 0x66, 0x00, 0x00]);
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (c, expected) in GLYPHS.iter() {
            assert_eq!(glyph(*c), expected, "glyph for {:#04x}", c);
        }
    }

    #[test]
    fn unknown_is_x() {
        assert_eq!(glyph(b'X'), &UNKNOWN);
        for c in [b'a', b'z', b'x', b'\n', 0x01, b'@', b'~', b'?', 0x80, 0xff] {
            assert_eq!(glyph(c), glyph(b'X'), "glyph for {:#04x}", c);
        }
    }

    #[test]
    fn lowercase_is_not_folded() {
        for c in b'a'..=b'z' {
            assert_eq!(glyph(c), &UNKNOWN);
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        for c in 0..=u8::MAX {
            assert_eq!(glyph(c), glyph(c));
        }
    }

    #[test]
    fn non_ascii_chars() {
        assert_eq!(char_glyph('°'), &UNKNOWN);
        assert_eq!(char_glyph('é'), &UNKNOWN);
        assert_eq!(char_glyph('H'), glyph(b'H'));
    }
}
