//! Byte classification for the HTTP header grammar.
//!
//! Every byte value maps to an [`OctetType`] bitset describing its role in
//! the grammar of [RFC 2616 section 2.2](https://tools.ietf.org/html/rfc2616#section-2.2):
//!
//! ```text
//! token      = 1*<any CHAR except CTLs or separators>
//! separators = "(" | ")" | "<" | ">" | "@"
//!            | "," | ";" | ":" | "\" | <">
//!            | "/" | "[" | "]" | "?" | "="
//!            | "{" | "}" | SP | HT
//! CTL        = <any US-ASCII control character (octets 0 - 31) and DEL (127)>
//! ```
//!
//! The table is computed at compile time and never changes, so lookups are
//! safe from any thread without synchronization.
//!
//! ## Examples
//!
//! ```rust
//! use httphead::octet::{is_control, is_token, OCTET_TYPES};
//!
//! assert!(is_token(b'a'));
//! assert!(!is_token(b','));
//! assert!(is_control(b'\n'));
//! assert!(OCTET_TYPES[0x7f].is_control());
//! ```

/// Set of grammar roles a single byte plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OctetType(u8);

const TOKEN: u8 = 1;
const CONTROL: u8 = 2;

impl OctetType {
    /// Returns true if the byte may appear in a `token` unquoted.
    #[inline]
    #[must_use]
    pub const fn is_token(self) -> bool {
        self.0 & TOKEN != 0
    }

    /// Returns true if the byte is a `CTL` (0x00..=0x1F or 0x7F).
    #[inline]
    #[must_use]
    pub const fn is_control(self) -> bool {
        self.0 & CONTROL != 0
    }
}

/// Classes of all 256 byte values, indexed by the byte itself.
pub static OCTET_TYPES: [OctetType; 256] = build_table();

/// Shorthand for `OCTET_TYPES[b as usize].is_token()`.
#[inline]
#[must_use]
pub fn is_token(b: u8) -> bool {
    OCTET_TYPES[usize::from(b)].is_token()
}

/// Shorthand for `OCTET_TYPES[b as usize].is_control()`.
#[inline]
#[must_use]
pub fn is_control(b: u8) -> bool {
    OCTET_TYPES[usize::from(b)].is_control()
}

const fn build_table() -> [OctetType; 256] {
    let mut table = [OctetType(0); 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        let mut bits = 0;
        if is_ctl(b) {
            bits |= CONTROL;
        }
        if b <= 0x7f && !is_ctl(b) && !is_separator(b) {
            bits |= TOKEN;
        }
        table[i] = OctetType(bits);
        i += 1;
    }
    table
}

const fn is_ctl(b: u8) -> bool {
    b <= 0x1f || b == 0x7f
}

const fn is_separator(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')'
            | b'<'
            | b'>'
            | b'@'
            | b','
            | b';'
            | b':'
            | b'\\'
            | b'"'
            | b'/'
            | b'['
            | b']'
            | b'?'
            | b'='
            | b'{'
            | b'}'
            | b' '
            | b'\t'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumerics_are_tokens() {
        for b in (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9') {
            assert!(is_token(b), "{:?} should be a token char", b as char);
            assert!(!is_control(b));
        }
    }

    #[test]
    fn test_tchar_punctuation() {
        for &b in b"!#$%&'*+-.^_`|~" {
            assert!(is_token(b), "{:?} should be a token char", b as char);
        }
    }

    #[test]
    fn test_separators_are_not_tokens() {
        for &b in b"()<>@,;:\\\"/[]?={} \t" {
            assert!(!is_token(b), "{:?} must not be a token char", b as char);
        }
        // tab is a separator and a control character at once
        assert!(is_control(b'\t'));
        assert!(!is_control(b' '));
    }

    #[test]
    fn test_comma_is_not_token() {
        assert!(!OCTET_TYPES[usize::from(b',')].is_token());
        assert!(!OCTET_TYPES[usize::from(b',')].is_control());
    }

    #[test]
    fn test_control_range() {
        for b in 0x00..=0x1f_u8 {
            assert!(is_control(b));
            assert!(!is_token(b));
        }
        assert!(is_control(0x7f));
        assert!(!is_token(0x7f));
        assert!(is_control(b'\r') && is_control(b'\n'));
    }

    #[test]
    fn test_high_bytes_are_neither() {
        for b in 0x80..=0xff_u8 {
            assert_eq!(OCTET_TYPES[usize::from(b)], OctetType::default());
        }
    }

    #[test]
    fn test_token_count() {
        // 94 visible ASCII chars minus 17 visible separators
        let tokens = OCTET_TYPES.iter().filter(|t| t.is_token()).count();
        assert_eq!(tokens, 77);
        let controls = OCTET_TYPES.iter().filter(|t| t.is_control()).count();
        assert_eq!(controls, 33);
    }
}
