use crate::symbol::{Code, CODE_BASE, NUM_CODES};
use crate::table::SymbolTable;

/// Per-round occurrence tallies from one simulated encoding pass.
///
/// `count1[code]` counts single-code occurrences, `count2[a][b]` counts code
/// `b` appearing immediately after code `a`. A fresh zeroed instance is
/// built every round; counts are never carried across rounds.
pub(crate) struct FrequencyCounts {
    count1: Vec<u32>,
    // NUM_CODES x NUM_CODES, row-major.
    count2: Vec<u32>,
}

impl FrequencyCounts {
    pub(crate) fn new() -> Self {
        Self {
            count1: vec![0; NUM_CODES],
            count2: vec![0; NUM_CODES * NUM_CODES],
        }
    }

    pub(crate) fn single(&self, code: Code) -> u32 {
        self.count1[code as usize]
    }

    pub(crate) fn pair(&self, first: Code, second: Code) -> u32 {
        self.count2[first as usize * NUM_CODES + second as usize]
    }

    fn bump_single(&mut self, code: Code) {
        self.count1[code as usize] += 1;
    }

    fn bump_pair(&mut self, first: Code, second: Code) {
        self.count2[first as usize * NUM_CODES + second as usize] += 1;
    }
}

/// Simulates encoding `sample` with `table`, tallying code frequencies.
///
/// Walks the sample with the longest-match finder, advancing by each matched
/// symbol's length, and records per-code and per-adjacent-pair counts. When
/// a learned multi-byte symbol matches and a previous code exists, the raw
/// byte at the match position is tallied as well (both alone and as a pair
/// with the previous code): the matcher is greedy, and this lets the
/// selector score splitting the match one byte earlier.
///
/// The escape fallback guarantees every step advances at least one byte, so
/// the walk terminates exactly at the sample end. `sample` must be
/// non-empty.
pub(crate) fn count_frequencies(table: &SymbolTable, sample: &[u8]) -> FrequencyCounts {
    debug_assert!(!sample.is_empty(), "caller must reject empty samples");

    let mut counts = FrequencyCounts::new();
    let mut pos = 0;
    let mut prev: Option<Code> = None;

    while pos < sample.len() {
        let code = table.find_longest_symbol(&sample[pos..]);
        counts.bump_single(code);
        if let Some(prev) = prev {
            counts.bump_pair(prev, code);
            if code >= CODE_BASE {
                let next_byte = sample[pos] as Code;
                counts.bump_single(next_byte);
                counts.bump_pair(prev, next_byte);
            }
        }
        pos += table.lookup(code).len();
        prev = Some(code);
    }

    counts
}
