use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::applications::validation::{validate_new, validate_update};
use crate::errors::AppError;
use crate::models::application::{
    ApplicationUpdate, JobApplication, NewApplication, ScoredApplication,
};
use crate::scoring::urgency::today;
use crate::scoring::{PriorityScorer, ScoreInput, ScoreResult, ScoringConfig};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WeightQuery {
    pub w_skill: Option<f64>,
    pub w_deadline: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    pub job_text: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub w_skill: Option<f64>,
    pub w_deadline: Option<f64>,
    /// Reference date for urgency; defaults to the server's local date.
    pub today: Option<NaiveDate>,
}

fn score_one(
    scorer: &PriorityScorer,
    application: JobApplication,
    config: &ScoringConfig,
    today: NaiveDate,
) -> ScoredApplication {
    let score = scorer.score_with(
        application.notes.as_deref(),
        application.deadline,
        config,
        today,
    );
    ScoredApplication { application, score }
}

fn score_all(
    scorer: &PriorityScorer,
    applications: Vec<JobApplication>,
    config: &ScoringConfig,
) -> Vec<ScoredApplication> {
    let today = today();
    applications
        .into_iter()
        .map(|app| score_one(scorer, app, config, today))
        .collect()
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Application {id} not found"))
}

/// POST /api/v1/applications
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<NewApplication>,
) -> Result<(StatusCode, Json<ScoredApplication>), AppError> {
    validate_new(&req)?;
    let created = state.store.create(req).await?;
    info!("Created application {} ({} / {})", created.id, created.company, created.role);

    let scored = score_one(&state.scorer, created, state.scorer.config(), today());
    Ok((StatusCode::CREATED, Json(scored)))
}

/// GET /api/v1/applications
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoredApplication>>, AppError> {
    let apps = state.store.list().await?;
    Ok(Json(score_all(&state.scorer, apps, state.scorer.config())))
}

/// GET /api/v1/applications/ranked
pub async fn handle_ranked(
    State(state): State<AppState>,
    Query(weights): Query<WeightQuery>,
) -> Result<Json<Vec<ScoredApplication>>, AppError> {
    let config = state
        .scorer
        .config()
        .with_weights(weights.w_skill, weights.w_deadline)?;

    let apps = state.store.list().await?;
    let mut scored = score_all(&state.scorer, apps, &config);
    // Stable sort keeps the store's newest-first order among equal scores.
    scored.sort_by(|a, b| b.score.priority_score.cmp(&a.score.priority_score));
    Ok(Json(scored))
}

/// GET /api/v1/applications/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ScoredApplication>, AppError> {
    let app = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(score_one(&state.scorer, app, state.scorer.config(), today())))
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ApplicationUpdate>,
) -> Result<Json<ScoredApplication>, AppError> {
    validate_update(&req)?;
    let app = state
        .store
        .update(id, req)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Updated application {id}");
    Ok(Json(score_one(&state.scorer, app, state.scorer.config(), today())))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    info!("Deleted application {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/score
/// Scores ad-hoc text against the loaded skill corpus without storing anything.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let config = state
        .scorer
        .config()
        .with_weights(req.w_skill, req.w_deadline)?;
    let input = ScoreInput {
        skills_text: state.scorer.corpus().as_str(),
        job_text: req.job_text.as_deref(),
        deadline: req.deadline,
        today: req.today,
    };
    let result = input.score(&config);
    debug!("Ad-hoc score: priority={}", result.priority_score);
    Ok(Json(result))
}
