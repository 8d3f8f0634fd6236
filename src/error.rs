use thiserror::Error;

/// Errors reported by the trainer.
///
/// All variants are precondition failures: training is deterministic, so
/// nothing here is retryable and there is no partial-success mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    /// The training sample was empty.
    #[error("training sample is empty")]
    EmptySample,

    /// A round produced fewer distinct candidate strings than the table
    /// needs. Only reachable on degenerate inputs; the 256 escape
    /// candidates normally guarantee a full pool.
    #[error("sample too small or uniform to fill symbol table: {distinct} distinct candidates, need {needed}")]
    CandidateUnderflow { distinct: usize, needed: usize },

    /// Rejected configuration value, detected before training starts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
