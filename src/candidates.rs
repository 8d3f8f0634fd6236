use ahash::AHashMap as HashMap;

use crate::counts::FrequencyCounts;
use crate::error::TrainError;
use crate::symbol::{Code, Symbol, MAX_LEARNED_SYMBOLS, NUM_ESCAPES};
use crate::table::SymbolTable;

/// Proposes candidate symbols from one round's counts and selects the
/// `MAX_LEARNED_SYMBOLS` highest-gain ones.
///
/// Candidates are every known symbol on its own and every pairwise
/// concatenation (truncated to `max_symbol_len`) that was observed adjacent
/// at least once. Gain is `length x estimated frequency`; gains of distinct
/// (code1, code2) pairs that produce the same byte string accumulate.
/// Escape candidates never score below 1, so every byte value stays a
/// viable symbol even when unseen in the sample.
///
/// Selection is a full sort on (gain descending, bytes ascending): the
/// lexicographic tie-break makes the result independent of hash-map
/// iteration order, which determinism requires.
pub(crate) fn propose_and_select(
    table: &SymbolTable,
    counts: &FrequencyCounts,
    max_symbol_len: usize,
) -> Result<Vec<Symbol>, TrainError> {
    let num_codes = table.num_codes();
    let mut gains: HashMap<Vec<u8>, u64> = HashMap::with_capacity(num_codes * 4);

    for code1 in 0..num_codes as Code {
        let sym1 = table.lookup(code1);
        let mut gain = sym1.len() as u64 * counts.single(code1) as u64;
        if (code1 as usize) < NUM_ESCAPES && gain == 0 {
            gain = 1;
        }
        *gains.entry(sym1.as_bytes().to_vec()).or_insert(0) += gain;

        for code2 in 0..num_codes as Code {
            let pair_count = counts.pair(code1, code2);
            if pair_count == 0 {
                continue;
            }
            let sym2 = table.lookup(code2);
            let mut concat = Vec::with_capacity(max_symbol_len);
            concat.extend_from_slice(sym1.as_bytes());
            concat.extend_from_slice(sym2.as_bytes());
            concat.truncate(max_symbol_len);
            let gain = concat.len() as u64 * pair_count as u64;
            *gains.entry(concat).or_insert(0) += gain;
        }
    }

    if gains.len() < MAX_LEARNED_SYMBOLS {
        return Err(TrainError::CandidateUnderflow {
            distinct: gains.len(),
            needed: MAX_LEARNED_SYMBOLS,
        });
    }

    let mut ranked: Vec<(Vec<u8>, u64)> = gains.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(MAX_LEARNED_SYMBOLS);

    Ok(ranked.into_iter().map(|(bytes, _)| Symbol::new(bytes)).collect())
}
