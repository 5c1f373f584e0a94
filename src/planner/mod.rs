//! Study plan synthesis: capacity estimation, day partitioning into
//! 50 minute cycles and the advice tables attached to each cycle.

pub mod advice;
pub mod capacity;
pub mod config;
pub mod normalize;
pub mod scheduler;
pub mod types;

use chrono::NaiveDate;

pub use capacity::Capacity;
pub use config::PlannerParams;
pub use normalize::{Normalization, PlanError};
pub use scheduler::{DayScheduler, ScheduleState};
pub use types::*;

pub fn generate_plan(request: &PlanRequest, today: NaiveDate) -> PlanOutcome {
    generate_plan_with(request, today, &PlannerParams::default())
}

pub fn generate_plan_with(
    request: &PlanRequest,
    today: NaiveDate,
    params: &PlannerParams,
) -> PlanOutcome {
    let input = match normalize::normalize(request) {
        Ok(Normalization::Pending(input)) => input,
        Ok(Normalization::Completed) => return PlanOutcome::completed(),
        Err(err) => return err.into(),
    };

    let capacity = capacity::estimate(
        request,
        input.remaining_pages,
        input.remaining_days,
        today,
        params,
    );
    tracing::debug!(
        pages_per_hour = capacity.pages_per_hour,
        valid_days = capacity.valid_days,
        capacity_pages = capacity.capacity_pages,
        remaining_pages = input.remaining_pages,
        "plan capacity estimated"
    );

    let output = DayScheduler::new(request, &capacity, input.start_time, params)
        .run(today, input.remaining_days);

    let (status, missing_pages) = if capacity.is_impossible {
        (
            PlanStatus::Impossible,
            input.remaining_pages - capacity.capacity_pages,
        )
    } else {
        (PlanStatus::Success, 0)
    };

    PlanOutcome::Scheduled(PlanSchedule {
        status,
        coverage: coverage_percent(output.final_cursor, request.total_pages),
        missing_pages,
        plan: output.days,
    })
}

/// Whole percent of the book reached, clamped to 0..=100 even when
/// overdrive carries the cursor past the last page.
pub fn coverage_percent(cursor: f64, total_pages: i64) -> i64 {
    if total_pages <= 0 {
        return 0;
    }
    ((cursor / total_pages as f64) * 100.0).trunc().clamp(0.0, 100.0) as i64
}
