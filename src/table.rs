use crate::symbol::{prefix_biased_order, Code, Symbol, CODE_BASE, MAX_LEARNED_SYMBOLS, NUM_ESCAPES};

/// A static symbol table: 256 fixed single-byte escapes plus up to 255
/// learned multi-byte symbols.
///
/// The table is the artifact training produces; once trained it is a
/// read-only lookup structure for encoders. Learned symbols live at codes
/// 256.., kept in the order required by the letter index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    /// Code -> symbol. Slots 0..256 are the escapes and never change.
    symbols: Vec<Symbol>,

    /// Entry `b` is the first learned code whose symbol starts with byte
    /// `b`; entry `b + 1` is the exclusive end. Entry 256 is the sentinel
    /// `256 + n_symbols`, so `b + 1` never needs a bounds check.
    letter_index: [Code; 257],
}

impl SymbolTable {
    /// Creates a table holding only the 256 escapes.
    pub fn new() -> Self {
        let mut symbols = Vec::with_capacity(NUM_ESCAPES + MAX_LEARNED_SYMBOLS);
        for b in 0..=255u8 {
            symbols.push(Symbol::new([b]));
        }
        Self {
            symbols,
            // All ranges [256, 256): empty until symbols are learned.
            letter_index: [CODE_BASE; 257],
        }
    }

    /// Number of learned symbols (codes 256..).
    pub fn n_symbols(&self) -> usize {
        self.symbols.len() - NUM_ESCAPES
    }

    /// Total number of live codes: 256 escapes + learned symbols.
    pub fn num_codes(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol bound to `code`.
    pub fn lookup(&self, code: Code) -> &Symbol {
        &self.symbols[code as usize]
    }

    /// Learned symbols in letter-index order.
    pub fn learned_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols[NUM_ESCAPES..].iter()
    }

    /// Appends a learned symbol at the next free code.
    ///
    /// At most 255 learned symbols may be inserted between index rebuilds;
    /// exceeding that is a caller contract violation. The letter index is
    /// not updated until [`rebuild_index`](Self::rebuild_index) runs.
    pub(crate) fn insert(&mut self, symbol: Symbol) {
        debug_assert!(
            self.n_symbols() < MAX_LEARNED_SYMBOLS,
            "symbol table capacity exceeded"
        );
        self.symbols.push(symbol);
    }

    /// Sorts the learned symbols and rebuilds the letter index.
    ///
    /// After this runs, `[letter_index[b], letter_index[b + 1])` holds
    /// exactly the learned codes whose symbols start with byte `b`, with
    /// longer symbols ahead of shorter ones sharing their prefix.
    pub(crate) fn rebuild_index(&mut self) {
        self.symbols[NUM_ESCAPES..]
            .sort_unstable_by(|a, b| prefix_biased_order(a.as_bytes(), b.as_bytes()));

        let mut per_letter = [0 as Code; 256];
        for sym in &self.symbols[NUM_ESCAPES..] {
            per_letter[sym.first_byte() as usize] += 1;
        }

        // Cumulative ranges; bytes with no symbols get an empty range.
        let mut next = CODE_BASE;
        for b in 0..256 {
            self.letter_index[b] = next;
            next += per_letter[b];
        }
        self.letter_index[256] = next; // sentinel, == 256 + n_symbols
    }

    /// The raw letter index, for invariant checks in tests.
    #[cfg(test)]
    pub(crate) fn letter_index(&self) -> &[Code; 257] {
        &self.letter_index
    }

    /// Returns the code of the best symbol matching the front of `text`.
    ///
    /// Scans the letter-index range for the first byte in stored order and
    /// returns the first learned code whose symbol is a prefix of `text`;
    /// falls back to the first byte's escape code, so the caller always
    /// advances by at least one byte. `text` must be non-empty.
    pub fn find_longest_symbol(&self, text: &[u8]) -> Code {
        let letter = text[0] as usize;
        let start = self.letter_index[letter];
        let end = self.letter_index[letter + 1];
        for code in start..end {
            if text.starts_with(self.symbols[code as usize].as_bytes()) {
                return code;
            }
        }
        letter as Code
    }

    /// Encodes `text` as a code sequence by repeated longest-match.
    pub fn encode(&self, text: &[u8]) -> Vec<Code> {
        let mut codes = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let code = self.find_longest_symbol(&text[pos..]);
            pos += self.lookup(code).len();
            codes.push(code);
        }
        codes
    }

    /// Concatenates the symbols behind a code sequence back into bytes.
    pub fn decode(&self, codes: &[Code]) -> Vec<u8> {
        let mut out = Vec::new();
        for &code in codes {
            out.extend_from_slice(self.lookup(code).as_bytes());
        }
        out
    }

    /// Measures how the table performs on `text`.
    pub fn compression_stats(&self, text: &[u8]) -> CompressionStats {
        CompressionStats {
            input_length: text.len(),
            code_count: self.encode(text).len(),
            num_symbols: self.n_symbols(),
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about one table's performance on a sample.
#[derive(Debug, Clone, Copy)]
pub struct CompressionStats {
    /// Number of input bytes encoded.
    pub input_length: usize,
    /// Number of codes the encoding produced.
    pub code_count: usize,
    /// Learned symbols in the table.
    pub num_symbols: usize,
}

impl CompressionStats {
    /// Codes emitted per input byte, as a percentage. Lower is better;
    /// 100% means every byte escaped.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.code_count as f64 / self.input_length as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(symbols: &[&[u8]]) -> SymbolTable {
        let mut table = SymbolTable::new();
        for s in symbols {
            table.insert(Symbol::new(s.to_vec()));
        }
        table.rebuild_index();
        table
    }

    #[test]
    fn test_new_has_only_escapes() {
        let table = SymbolTable::new();
        assert_eq!(table.n_symbols(), 0);
        assert_eq!(table.num_codes(), 256);
        assert_eq!(table.letter_index[256], CODE_BASE);
        for b in 0..=255u8 {
            assert_eq!(table.lookup(b as Code).as_bytes(), &[b]);
        }
    }

    #[test]
    fn test_escape_fallback_on_empty_table() {
        let table = SymbolTable::new();
        assert_eq!(table.find_longest_symbol(b"abc"), b'a' as Code);
        assert_eq!(table.find_longest_symbol(&[0x00]), 0);
    }

    #[test]
    fn test_find_prefers_longer_shared_prefix() {
        let table = table_with(&[b"tu", b"tum", b"t"]);
        let code = table.find_longest_symbol(b"tumcwi");
        assert_eq!(table.lookup(code).as_bytes(), b"tum");

        let code = table.find_longest_symbol(b"tux");
        assert_eq!(table.lookup(code).as_bytes(), b"tu");
    }

    #[test]
    fn test_find_is_a_prefix_test() {
        // "um" occurs inside the text but not at the front; the match must
        // be the escape for 't', not the learned symbol.
        let table = table_with(&[b"um"]);
        assert_eq!(table.find_longest_symbol(b"tum"), b't' as Code);
    }

    #[test]
    fn test_index_coverage() {
        let table = table_with(&[b"um", b"tum", b"c", b"tu"]);
        assert_eq!(table.letter_index[256], CODE_BASE + 4);
        for b in 0..256usize {
            let (start, end) = (table.letter_index[b], table.letter_index[b + 1]);
            assert!(start <= end);
            for code in start..end {
                assert_eq!(table.lookup(code).first_byte() as usize, b);
            }
        }
        // Every learned symbol is inside its letter's range.
        let t = b't' as usize;
        assert_eq!(table.letter_index[t + 1] - table.letter_index[t], 2);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let table = table_with(&[b"tum", b"tu", b"um"]);
        let text = b"tumcwitumvldb";
        let codes = table.encode(text);
        assert_eq!(table.decode(&codes), text);
        // Two occurrences of "tum" collapse into single codes.
        assert_eq!(codes.len(), text.len() - 2 * 2);
    }

    #[test]
    fn test_stats_ratio() {
        let table = table_with(&[b"ab"]);
        let stats = table.compression_stats(b"abab");
        assert_eq!(stats.input_length, 4);
        assert_eq!(stats.code_count, 2);
        assert!((stats.compression_ratio() - 50.0).abs() < f64::EPSILON);
    }
}
