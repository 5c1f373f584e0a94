use chrono::{Datelike, NaiveDate};

use super::config::PlannerParams;
use super::types::{FocusQuality, PlanRequest, Profile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    /// Effective reading pace after profile penalties.
    pub pages_per_hour: f64,
    pub valid_days: i64,
    pub minutes_available: i64,
    pub capacity_pages: i64,
    pub is_impossible: bool,
}

/// Pages per hour for a reader needing `minutes_per_page` per page.
///
/// A transcriber is penalised here and again through the daily review
/// block; both apply.
pub fn reading_speed(profile: &Profile, minutes_per_page: f64, params: &PlannerParams) -> f64 {
    let base = (60.0 / minutes_per_page) * params.reading_efficiency;
    if minutes_per_page <= 0.0 || !base.is_finite() {
        return 0.0;
    }

    let mut speed = base;
    if profile.focus_quality == FocusQuality::Scattered {
        speed *= params.scattered_focus_factor;
    }
    if profile.instincts.is_transcriber() {
        speed *= params.transcriber_factor;
    }
    speed.max(0.0)
}

pub fn window_len(remaining_days: i64) -> usize {
    usize::try_from(remaining_days).unwrap_or(0)
}

pub fn count_valid_days(profile: &Profile, today: NaiveDate, remaining_days: i64) -> i64 {
    today
        .iter_days()
        .take(window_len(remaining_days))
        .filter(|date| profile.is_active_on(date.weekday()))
        .count() as i64
}

pub fn estimate(
    request: &PlanRequest,
    remaining_pages: i64,
    remaining_days: i64,
    today: NaiveDate,
    params: &PlannerParams,
) -> Capacity {
    let profile = &request.profile;
    let pages_per_hour = reading_speed(profile, request.speed, params);
    let valid_days = count_valid_days(profile, today, remaining_days);

    // Goes negative when the review block outlasts the study day; the
    // negative capacity then widens `missing_pages`.
    let mut minutes_available = request
        .daily_hours
        .saturating_mul(60)
        .saturating_mul(valid_days);
    if profile.review_mode.is_enabled() {
        minutes_available =
            minutes_available.saturating_sub(params.review_minutes.saturating_mul(valid_days));
    }

    let capacity_pages = if pages_per_hour > 0.0 {
        (minutes_available as f64 * (pages_per_hour / 60.0)).trunc() as i64
    } else {
        0
    };

    Capacity {
        pages_per_hour,
        valid_days,
        minutes_available,
        capacity_pages,
        is_impossible: capacity_pages < remaining_pages,
    }
}
