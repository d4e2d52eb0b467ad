use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::scoring::corpus::SkillCorpus;
use crate::scoring::tfidf::skill_match_tfidf;
use crate::scoring::urgency::{deadline_urgency, today, DEFAULT_HALF_POINT_DAYS};

pub const DEFAULT_SKILL_WEIGHT: f64 = 0.65;
pub const DEFAULT_DEADLINE_WEIGHT: f64 = 0.35;

/// Weights and decay constant for priority scoring.
/// The weights are expected to sum to 1.0 but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub deadline_weight: f64,
    pub urgency_half_point_days: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: DEFAULT_SKILL_WEIGHT,
            deadline_weight: DEFAULT_DEADLINE_WEIGHT,
            urgency_half_point_days: DEFAULT_HALF_POINT_DAYS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoringConfigError {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("urgency half point must be a finite, positive number of days (got {0})")]
    InvalidHalfPoint(f64),
}

impl ScoringConfig {
    pub fn new(
        skill_weight: f64,
        deadline_weight: f64,
        urgency_half_point_days: f64,
    ) -> Result<Self, ScoringConfigError> {
        check_weight("skill weight", skill_weight)?;
        check_weight("deadline weight", deadline_weight)?;
        if !urgency_half_point_days.is_finite() || urgency_half_point_days <= 0.0 {
            return Err(ScoringConfigError::InvalidHalfPoint(urgency_half_point_days));
        }
        Ok(Self {
            skill_weight,
            deadline_weight,
            urgency_half_point_days,
        })
    }

    /// Copy of this config with either weight overridden.
    pub fn with_weights(
        &self,
        skill_weight: Option<f64>,
        deadline_weight: Option<f64>,
    ) -> Result<Self, ScoringConfigError> {
        Self::new(
            skill_weight.unwrap_or(self.skill_weight),
            deadline_weight.unwrap_or(self.deadline_weight),
            self.urgency_half_point_days,
        )
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ScoringConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoringConfigError::InvalidWeight { name, value })
    }
}

/// Output of one scoring call. Never stored; recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub skill_match_score: f64,
    pub deadline_urgency_score: f64,
    pub priority_score: u32,
}

/// One scoring request: the corpus text, the job text and an optional deadline.
/// `today` falls back to the current local date.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub skills_text: &'a str,
    pub job_text: Option<&'a str>,
    pub deadline: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
}

impl ScoreInput<'_> {
    pub fn score(&self, config: &ScoringConfig) -> ScoreResult {
        compute_priority_at(
            self.skills_text,
            self.job_text,
            self.deadline,
            config,
            self.today.unwrap_or_else(today),
        )
    }
}

/// Scores against the current local date.
pub fn compute_priority(
    skills_text: &str,
    job_text: Option<&str>,
    deadline: Option<NaiveDate>,
    config: &ScoringConfig,
) -> ScoreResult {
    compute_priority_at(skills_text, job_text, deadline, config, today())
}

/// Scores with an explicit reference date for urgency.
pub fn compute_priority_at(
    skills_text: &str,
    job_text: Option<&str>,
    deadline: Option<NaiveDate>,
    config: &ScoringConfig,
    today: NaiveDate,
) -> ScoreResult {
    let skill_match_score = skill_match_tfidf(skills_text, job_text);
    let deadline_urgency_score = deadline_urgency(deadline, today, config.urgency_half_point_days);

    let combined =
        config.skill_weight * skill_match_score + config.deadline_weight * deadline_urgency_score;
    // Float-to-int `as` saturates, and a NaN combined score maps to 0.
    let priority_score = (combined * 100.0).round().max(0.0) as u32;

    ScoreResult {
        skill_match_score,
        deadline_urgency_score,
        priority_score,
    }
}

/// Holds the skill corpus loaded at startup and the default weights.
/// Shared read-only across handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    corpus: SkillCorpus,
    config: ScoringConfig,
}

impl PriorityScorer {
    pub fn new(corpus: SkillCorpus, config: ScoringConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &SkillCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, job_text: Option<&str>, deadline: Option<NaiveDate>) -> ScoreResult {
        self.score_at(job_text, deadline, today())
    }

    pub fn score_at(
        &self,
        job_text: Option<&str>,
        deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> ScoreResult {
        self.score_with(job_text, deadline, &self.config, today)
    }

    /// Scores with per-call weights instead of the defaults.
    pub fn score_with(
        &self,
        job_text: Option<&str>,
        deadline: Option<NaiveDate>,
        config: &ScoringConfig,
        today: NaiveDate,
    ) -> ScoreResult {
        let result = compute_priority_at(self.corpus.as_str(), job_text, deadline, config, today);
        debug!(
            "Scored application: skill={:.3} urgency={:.3} priority={}",
            result.skill_match_score, result.deadline_urgency_score, result.priority_score
        );
        result
    }
}
