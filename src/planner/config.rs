use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerParams {
    pub cycle_minutes: i64,
    pub break_minutes: i64,
    pub review_minutes: i64,
    /// Share of the nominal reading speed that survives real study.
    pub reading_efficiency: f64,
    pub scattered_focus_factor: f64,
    pub transcriber_factor: f64,
    /// Page throughput kept when a cycle also carries heavy practice.
    pub practice_page_factor: f64,
    pub overdrive_pages: f64,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            cycle_minutes: 50,
            break_minutes: 10,
            review_minutes: 20,
            reading_efficiency: 0.9,
            scattered_focus_factor: 0.8,
            transcriber_factor: 0.7,
            practice_page_factor: 0.7,
            overdrive_pages: 1.0,
        }
    }
}

impl PlannerParams {
    pub fn slot_minutes(&self) -> i64 {
        self.cycle_minutes + self.break_minutes
    }
}
