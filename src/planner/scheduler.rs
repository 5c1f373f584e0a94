use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::advice::CycleAdvice;
use super::capacity::{window_len, Capacity};
use super::config::PlannerParams;
use super::types::{DayPlan, DayType, ExerciseMode, PlanRequest, ReviewTask, StudyCycle, Task};

const REVIEW_TITLE: &str = "Review";
const REVIEW_DESC: &str = "Ripasso spaced repetition";

/// Page cursor and wall clock threaded through one plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleState {
    pub cursor: f64,
    pub clock: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutput {
    pub days: Vec<DayPlan>,
    pub final_cursor: f64,
}

pub struct DayScheduler<'a> {
    request: &'a PlanRequest,
    params: &'a PlannerParams,
    capacity: &'a Capacity,
    start_time: NaiveTime,
    advice: CycleAdvice,
}

impl<'a> DayScheduler<'a> {
    pub fn new(
        request: &'a PlanRequest,
        capacity: &'a Capacity,
        start_time: NaiveTime,
        params: &'a PlannerParams,
    ) -> Self {
        Self {
            request,
            params,
            capacity,
            start_time,
            advice: CycleAdvice::for_profile(&request.profile),
        }
    }

    pub fn run(&self, today: NaiveDate, remaining_days: i64) -> ScheduleOutput {
        let mut state = ScheduleState {
            cursor: self.request.current_page as f64,
            clock: today.and_time(self.start_time),
        };

        let days = today
            .iter_days()
            .take(window_len(remaining_days))
            .map(|date| self.plan_day(date, &mut state))
            .collect();

        ScheduleOutput {
            days,
            final_cursor: state.cursor,
        }
    }

    fn plan_day(&self, date: NaiveDate, state: &mut ScheduleState) -> DayPlan {
        let profile = &self.request.profile;
        if !profile.is_active_on(date.weekday()) {
            return DayPlan::off(date);
        }

        let mut tasks = Vec::new();
        let mut minutes_left = self.request.daily_hours.saturating_mul(60);
        state.clock = date.and_time(self.start_time);

        if profile.review_mode.is_enabled() {
            minutes_left = minutes_left.saturating_sub(self.params.review_minutes);
            tasks.push(Task::Review(ReviewTask {
                time: format_clock(state.clock),
                title: REVIEW_TITLE.to_string(),
                desc: REVIEW_DESC.to_string(),
            }));
            state.clock = advance(state.clock, self.params.review_minutes);
        }

        let cycles = if minutes_left > 0 {
            minutes_left / self.params.slot_minutes()
        } else {
            0
        };

        for _ in 0..cycles {
            if state.cursor >= self.request.total_pages as f64 {
                break;
            }
            tasks.push(Task::StudyCycle(self.study_cycle(state)));
        }

        DayPlan {
            date,
            day_type: DayType::Study,
            tasks,
        }
    }

    fn pages_per_cycle(&self) -> f64 {
        let pages = self.capacity.pages_per_hour * (self.params.cycle_minutes as f64 / 60.0);
        match self.request.profile.exercise_mode {
            ExerciseMode::HeavyPractice => pages * self.params.practice_page_factor,
            _ => pages,
        }
    }

    fn study_cycle(&self, state: &mut ScheduleState) -> StudyCycle {
        let end_time = advance(state.clock, self.params.cycle_minutes);

        let mut end_cursor =
            (state.cursor + self.pages_per_cycle()).min(self.request.total_pages as f64);
        // Overdrive: infeasible plans push one extra page per cycle, past the end if need be.
        if self.capacity.is_impossible {
            end_cursor += self.params.overdrive_pages;
        }

        let density = self.request.profile.exercise_mode.exercise_density();
        let exercises = ((end_cursor - state.cursor) * density).ceil() as i64;

        let cycle = StudyCycle {
            time_start: format_clock(state.clock),
            time_end: format_clock(end_time),
            pages_start: state.cursor.trunc() as i64,
            pages_end: end_cursor.trunc() as i64,
            exercises,
            input_strategy: self.advice.input_strategy.to_string(),
            process_strategy: self.advice.process_strategy.to_string(),
            psycho_tip: self.advice.psycho_tip.to_string(),
        };

        state.cursor = end_cursor;
        state.clock = advance(end_time, self.params.break_minutes);
        cycle
    }
}

fn advance(clock: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    clock
        .checked_add_signed(Duration::minutes(minutes))
        .unwrap_or(clock)
}

fn format_clock(clock: NaiveDateTime) -> String {
    clock.format("%H:%M").to_string()
}
