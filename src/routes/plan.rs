use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::planner::{self, PlanOutcome, PlanRequest};
use crate::response::AppError;
use crate::state::AppState;

pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanOutcome>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let today = state.calendar().today();
    let outcome = planner::generate_plan(&request, today);

    match &outcome {
        PlanOutcome::Rejected { error } => {
            tracing::info!(error = %error, "plan request rejected");
        }
        PlanOutcome::Completed { .. } => {
            tracing::info!(total_pages = request.total_pages, "plan already completed");
        }
        PlanOutcome::Scheduled(schedule) => {
            tracing::info!(
                %today,
                status = ?schedule.status,
                coverage = schedule.coverage,
                missing_pages = schedule.missing_pages,
                days = schedule.plan.len(),
                "plan generated"
            );
        }
    }

    Ok(Json(outcome))
}
