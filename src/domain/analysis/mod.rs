//! Analysis Module - the option-scoring pipeline.
//!
//! A single-pass heuristic over a decision's options, in three chained
//! stages plus a random fallback:
//!
//! - `OptionScorer` - raw desirability score per option
//! - `ScoreNormalizer` - spread enforcement and dense ranks
//! - `NarrativeGenerator` - reasoning, summary, factors, bias warnings
//! - `MicroDecider` - random quick pick behind the `RandomSource` port
//!
//! # Design Philosophy
//!
//! Every stage is a pure function of its input: no I/O, no shared state,
//! deterministic output (the one random element lives behind a port).
//! Classification vocabularies and narrative templates are data, not
//! control flow.

mod context;
mod engine;
mod micro;
mod narrative;
mod normalizer;
mod option_scorer;
mod report;
mod templates;
pub mod vocabulary;

pub use context::{DecisionContext, DecisionOption, UserHistory};
pub use engine::{DecisionEngine, MIN_OPTIONS};
pub use micro::{MicroDecider, MicroSuggestion};
pub use narrative::NarrativeGenerator;
pub use normalizer::ScoreNormalizer;
pub use option_scorer::{OptionScorer, ScoredOption};
pub use report::{AnalysisReport, Ranking};
pub use templates::{ProConBalance, SpreadBucket};
