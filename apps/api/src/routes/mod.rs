pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::mentor::handlers as mentor;
use crate::state::AppState;
use crate::upload::handlers as upload;
use crate::upload::validation::RESUME_BODY_LIMIT;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mentor relay. The functions path is kept for existing widget deployments.
        .route("/functions/v1/ai-mentor", post(mentor::handle_mentor_chat))
        .route("/api/v1/mentor/chat", post(mentor::handle_mentor_chat))
        .route("/api/v1/mentor/suggestions", get(mentor::handle_suggestions))
        // Upload & connect
        .route(
            "/api/v1/uploads/resume",
            post(upload::handle_resume_upload).layer(DefaultBodyLimit::max(RESUME_BODY_LIMIT)),
        )
        .route("/api/v1/uploads/linkedin", post(upload::handle_linkedin_connect))
        .route("/api/v1/uploads/github", post(upload::handle_github_connect))
        // Dashboard & gamification
        .route("/api/v1/dashboard", post(dashboard::handle_compose))
        .route("/api/v1/dashboard/overview", get(dashboard::handle_overview))
        .route(
            "/api/v1/dashboard/charts/skills",
            get(dashboard::handle_skill_chart),
        )
        .route(
            "/api/v1/dashboard/charts/keywords",
            get(dashboard::handle_keyword_chart),
        )
        .route("/api/v1/gamification", get(dashboard::handle_gamification))
        // Detailed tabs
        .route("/api/v1/tabs/:tab", get(dashboard::handle_get_tab))
        .route(
            "/api/v1/tabs/skill-gap/analyze",
            post(dashboard::handle_skill_gap_analyze),
        )
        .route(
            "/api/v1/tabs/mock-interview/questions",
            post(dashboard::handle_interview_questions),
        )
        .with_state(state)
}
