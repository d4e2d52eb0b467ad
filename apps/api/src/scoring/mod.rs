//! Priority scoring engine.
//!
//! Blends TF-IDF skill-match relevance with deadline urgency into a 0–100
//! priority used to rank job applications. Every function here is pure; the
//! only I/O is the one-off corpus load at startup.

#![allow(dead_code)]

pub mod corpus;
pub mod priority;
pub mod stop_words;
pub mod tfidf;
pub mod urgency;

pub use corpus::{load_skills, CorpusError, SkillCorpus};
pub use priority::{
    compute_priority, compute_priority_at, PriorityScorer, ScoreInput, ScoreResult, ScoringConfig,
    ScoringConfigError,
};
pub use tfidf::skill_match_tfidf;
pub use urgency::deadline_urgency;
