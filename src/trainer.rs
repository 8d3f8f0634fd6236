use crate::candidates::propose_and_select;
use crate::counts::count_frequencies;
use crate::error::TrainError;
use crate::symbol::MAX_LEARNED_SYMBOLS;
use crate::table::SymbolTable;

/// Training parameters, threaded explicitly through the trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Maximum length of a learned symbol in bytes. Default 8.
    pub max_symbol_len: usize,

    /// Number of refinement rounds to run. Default 5. Training always runs
    /// exactly this many rounds; there is no convergence check.
    pub rounds: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_symbol_len: 8,
            rounds: 5,
        }
    }
}

impl TrainerConfig {
    fn validate(&self) -> Result<(), TrainError> {
        if self.max_symbol_len == 0 {
            return Err(TrainError::InvalidConfig("max_symbol_len must be >= 1"));
        }
        if self.rounds == 0 {
            return Err(TrainError::InvalidConfig("rounds must be >= 1"));
        }
        Ok(())
    }
}

/// Learns a [`SymbolTable`] from a sample by fixed-point refinement.
///
/// Each round simulates encoding the full sample with the current table,
/// tallies code and code-pair frequencies, and rebuilds the learned symbols
/// from the highest-gain candidates. The sample is re-scanned in full every
/// round; no counts carry over.
///
/// # Example
///
/// ```
/// use fsst_rs::{Trainer, TrainerConfig};
///
/// let sample = b"tumcwitumvldb";
/// let trainer = Trainer::new(TrainerConfig {
///     max_symbol_len: 3,
///     ..TrainerConfig::default()
/// });
/// let table = trainer.train(sample).unwrap();
///
/// let codes = table.encode(sample);
/// assert_eq!(table.decode(&codes), sample);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// Creates a trainer with the given configuration.
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Trains a symbol table on `sample`.
    ///
    /// Runs exactly `config.rounds` rounds, each producing a freshly
    /// constructed table from the previous round's counts. Returns the
    /// final table, fully indexed and ready for encoding.
    pub fn train(&self, sample: &[u8]) -> Result<SymbolTable, TrainError> {
        self.config.validate()?;
        if sample.is_empty() {
            return Err(TrainError::EmptySample);
        }

        let mut table = SymbolTable::new();
        for _ in 0..self.config.rounds {
            let counts = count_frequencies(&table, sample);
            let selected = propose_and_select(&table, &counts, self.config.max_symbol_len)?;
            debug_assert_eq!(selected.len(), MAX_LEARNED_SYMBOLS);

            // Fresh snapshot per round; the previous table is dropped
            // whole, never patched in place.
            let mut next = SymbolTable::new();
            for symbol in selected {
                next.insert(symbol);
            }
            next.rebuild_index();
            table = next;
        }
        Ok(table)
    }
}
