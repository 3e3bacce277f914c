//! Deterministic nomophobia scoring: static weight tables, a fail-soft
//! summing engine, and severity band classification.

mod engine;
mod severity;
mod table;

pub use engine::{Answers, LikertResponses, ScoreComponent, ScoreEngine, ScoreReport, ScoreSection};
pub use severity::{DisplayTone, Severity, SeverityBand, SCORE_DISPLAY_MAX};
pub use table::ScoringTable;
