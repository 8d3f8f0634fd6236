use std::cmp::Ordering;
use std::fmt;

/// Integer handle for a symbol.
///
/// Codes 0-255 are the fixed single-byte escapes; codes 256..511 are the
/// learned multi-byte symbols of the current table.
pub type Code = u16;

/// Number of fixed escape codes (one per byte value).
pub const NUM_ESCAPES: usize = 256;

/// First code assigned to a learned symbol.
pub const CODE_BASE: Code = 256;

/// Maximum number of learned symbols a table can hold.
pub const MAX_LEARNED_SYMBOLS: usize = 255;

/// Total code space: 256 escapes + up to 255 learned symbols.
pub const NUM_CODES: usize = NUM_ESCAPES + MAX_LEARNED_SYMBOLS + 1;

/// An immutable byte string used as a compression unit.
///
/// Length is 1..=max_symbol_len; single-byte symbols double as the fixed
/// escapes that keep every byte value encodable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    bytes: Box<[u8]>,
}

impl Symbol {
    /// Creates a symbol from a byte string.
    ///
    /// The bytes must be non-empty; the trainer only ever produces
    /// candidates of length >= 1.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        let bytes = bytes.into();
        debug_assert!(!bytes.is_empty(), "symbols are never empty");
        Self { bytes }
    }

    /// The symbol's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes (always >= 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The leading byte, used for letter-index dispatch.
    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }
}

impl fmt::Display for Symbol {
    /// Renders ASCII-printable bytes as-is and the rest as `\xNN`, for the
    /// demo listing and debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes.iter() {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

/// Ordering used to sort learned symbols before the letter index is rebuilt.
///
/// If one symbol is a prefix of the other (equal up to the shorter length),
/// the longer sorts first; otherwise plain lexicographic byte order. This
/// makes "first match in the letter-index range" a longest-match-biased
/// search rather than an arbitrary pick.
pub(crate) fn prefix_biased_order(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    if a[..n] == b[..n] {
        b.len().cmp(&a.len())
    } else {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_basics() {
        let s = Symbol::new(*b"tum");
        assert_eq!(s.len(), 3);
        assert_eq!(s.first_byte(), b't');
        assert_eq!(s.as_bytes(), b"tum");
    }

    #[test]
    fn test_prefix_sorts_longer_first() {
        assert_eq!(prefix_biased_order(b"tum", b"tu"), Ordering::Less);
        assert_eq!(prefix_biased_order(b"tu", b"tum"), Ordering::Greater);
        assert_eq!(prefix_biased_order(b"t", b"tum"), Ordering::Greater);
    }

    #[test]
    fn test_non_prefix_is_lexicographic() {
        assert_eq!(prefix_biased_order(b"abc", b"abd"), Ordering::Less);
        assert_eq!(prefix_biased_order(b"b", b"ab"), Ordering::Greater);
        assert_eq!(prefix_biased_order(b"tum", b"tun"), Ordering::Less);
    }

    #[test]
    fn test_equal_symbols_compare_equal() {
        assert_eq!(prefix_biased_order(b"tum", b"tum"), Ordering::Equal);
    }

    #[test]
    fn test_sort_groups_by_first_byte() {
        let mut syms: Vec<&[u8]> = vec![b"um", b"t", b"tum", b"tu", b"c"];
        syms.sort_by(|a, b| prefix_biased_order(a, b));
        let expected: Vec<&[u8]> = vec![b"c", b"tum", b"tu", b"t", b"um"];
        assert_eq!(syms, expected);
    }

    #[test]
    fn test_display_escapes_non_printable() {
        assert_eq!(Symbol::new(*b"ab").to_string(), "ab");
        assert_eq!(Symbol::new([0x00, b'a']).to_string(), "\\x00a");
    }
}
