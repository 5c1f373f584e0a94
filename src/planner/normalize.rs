use chrono::NaiveTime;

use super::types::{PlanOutcome, PlanRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Nessun giorno attivo selezionato")]
    NoActiveDays,
    #[error("Orario di inizio non valido: {0}")]
    InvalidStartTime(String),
}

impl From<PlanError> for PlanOutcome {
    fn from(err: PlanError) -> Self {
        PlanOutcome::Rejected {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInput {
    pub remaining_pages: i64,
    pub remaining_days: i64,
    pub start_time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Pending(NormalizedInput),
    Completed,
}

pub fn parse_start_time(raw: &str) -> Result<NaiveTime, PlanError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| PlanError::InvalidStartTime(raw.to_string()))
}

pub fn normalize(request: &PlanRequest) -> Result<Normalization, PlanError> {
    let start_time = parse_start_time(&request.start_hour_str)?;

    let remaining_pages = request.total_pages.saturating_sub(request.current_page).max(0);
    let remaining_days = request.days_total.saturating_sub(request.days_passed).max(0);

    if request.profile.active_days.is_empty() {
        return Err(PlanError::NoActiveDays);
    }
    if remaining_pages == 0 {
        return Ok(Normalization::Completed);
    }

    Ok(Normalization::Pending(NormalizedInput {
        remaining_pages,
        remaining_days,
        start_time,
    }))
}
