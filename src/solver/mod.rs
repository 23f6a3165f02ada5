//! Candidate filtering, entropy ranking and solving sessions

pub mod entropy;
mod filter;
mod ranker;
mod session;

pub use filter::{LetterConstraints, filter, filter_refs};
pub use ranker::{ScoredCandidate, rank, rank_parallel};
pub use session::{Session, SessionConfig};
