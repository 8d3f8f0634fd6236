//! # fsst-rs - Fast Static Symbol Table training
//!
//! Learns a compact, static dictionary of short byte-string symbols from a
//! sample, in the style of FSST compression. A trained [`SymbolTable`] maps
//! codes 0-255 to fixed single-byte escapes and codes 256.. to up to 255
//! learned multi-byte symbols, and encodes similarly-distributed text as a
//! sequence of codes instead of raw bytes.
//!
//! Training is a greedy fixed-point refinement: each round simulates
//! encoding the sample with the current table, tallies code and
//! adjacent-pair frequencies, and rebuilds the learned symbols from the
//! highest-gain candidates (gain = length x estimated frequency).
//!
//! ## Example
//!
//! ```
//! use fsst_rs::{Trainer, TrainerConfig};
//!
//! let sample = b"the quick brown fox jumps over the lazy dog";
//! let table = Trainer::new(TrainerConfig::default()).train(sample).unwrap();
//!
//! let codes = table.encode(sample);
//! assert!(codes.len() < sample.len());
//! assert_eq!(table.decode(&codes), sample);
//! ```
//!
//! ## Guarantees
//!
//! - Every byte value stays encodable through its escape code, so encoding
//!   never gets stuck and decode(encode(x)) == x for any input.
//! - Training is deterministic: identical sample and configuration produce
//!   byte-identical tables.

mod candidates;
mod counts;
mod error;
mod symbol;
mod table;
mod trainer;


pub use error::TrainError;
pub use symbol::{Code, Symbol, CODE_BASE, MAX_LEARNED_SYMBOLS, NUM_ESCAPES};
pub use table::{CompressionStats, SymbolTable};
pub use trainer::{Trainer, TrainerConfig};
