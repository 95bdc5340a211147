//! Axum route handlers for the dashboard, gamification and detail tabs.

use axum::{
    extract::{rejection::JsonRejection, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dashboard::compose::{compose_page, PageLayout, TabId};
use crate::dashboard::fixtures::{
    self, Gamification, InterviewQuestion, KeywordPoint, Overview, SkillPoint,
};
use crate::dashboard::skill_gap::{analyze, SkillGapAnalysis};
use crate::errors::AppError;
use crate::models::upload::UploadedData;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub category: String,
    pub questions: Vec<InterviewQuestion>,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::Validation(e.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/dashboard
///
/// Returns which sections and tabs render for the caller's `UploadedData`.
pub async fn handle_compose(
    payload: Result<Json<UploadedData>, JsonRejection>,
) -> Result<Json<PageLayout>, AppError> {
    let data = json_body(payload)?;
    Ok(Json(compose_page(&data)))
}

/// GET /api/v1/dashboard/overview
pub async fn handle_overview() -> Json<Overview> {
    Json(fixtures::overview())
}

/// GET /api/v1/dashboard/charts/skills
pub async fn handle_skill_chart() -> Json<Vec<SkillPoint>> {
    Json(fixtures::skill_radar())
}

/// GET /api/v1/dashboard/charts/keywords
pub async fn handle_keyword_chart() -> Json<Vec<KeywordPoint>> {
    Json(fixtures::keyword_match())
}

/// GET /api/v1/gamification
pub async fn handle_gamification() -> Json<Gamification> {
    Json(fixtures::gamification())
}

/// GET /api/v1/tabs/:tab
pub async fn handle_get_tab(Path(tab): Path<String>) -> Result<Json<Value>, AppError> {
    let tab = TabId::parse(&tab).ok_or_else(|| AppError::NotFound(format!("Tab {tab} not found")))?;

    let body = match tab {
        TabId::Resume => serde_json::to_value(fixtures::resume_analysis()),
        TabId::Github => serde_json::to_value(fixtures::github_analysis()),
        TabId::Linkedin => serde_json::to_value(fixtures::linkedin_analysis()),
        TabId::JobFit => serde_json::to_value(fixtures::job_fit()),
        TabId::Placement => serde_json::to_value(fixtures::placement()),
        TabId::MockInterview => {
            serde_json::to_value(json!({ "categories": fixtures::interview_categories() }))
        }
        // Analysis stays hidden until a job description is submitted.
        TabId::SkillGap => Ok(json!({ "analyzed": false })),
        TabId::Compare => serde_json::to_value(fixtures::resume_comparison()),
        TabId::Reports => serde_json::to_value(json!({ "exports": fixtures::report_exports() })),
    }
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(body))
}

/// POST /api/v1/tabs/skill-gap/analyze
pub async fn handle_skill_gap_analyze(
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<SkillGapAnalysis>, AppError> {
    let request = json_body(payload)?;
    Ok(Json(analyze(&request.job_description)?))
}

/// POST /api/v1/tabs/mock-interview/questions
pub async fn handle_interview_questions(
    payload: Result<Json<InterviewQuestionsRequest>, JsonRejection>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let request = json_body(payload)?;
    let questions = fixtures::interview_questions(&request.category).ok_or_else(|| {
        AppError::NotFound(format!("Interview category {} not found", request.category))
    })?;

    Ok(Json(InterviewQuestionsResponse {
        category: request.category,
        questions,
    }))
}
