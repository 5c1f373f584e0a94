use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::weekday_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusQuality {
    Scattered,
    Other(String),
}

impl FocusQuality {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scattered => "Dispersiva",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for FocusQuality {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Dispersiva" => Self::Scattered,
            _ => Self::Other(value),
        }
    }
}

impl From<FocusQuality> for String {
    fn from(value: FocusQuality) -> Self {
        value.as_str().to_string()
    }
}

/// Spaced-repetition setting. Any value other than "Nessuno" turns the
/// daily review block on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewMode {
    Disabled,
    Enabled(String),
}

impl ReviewMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Disabled => "Nessuno",
            Self::Enabled(value) => value,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

impl From<String> for ReviewMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Nessuno" => Self::Disabled,
            _ => Self::Enabled(value),
        }
    }
}

impl From<ReviewMode> for String {
    fn from(value: ReviewMode) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseMode {
    HeavyPractice,
    TheoryOnly,
    Balanced(String),
}

impl ExerciseMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::HeavyPractice => "Molta Pratica",
            Self::TheoryOnly => "Solo Teoria",
            Self::Balanced(value) => value,
        }
    }

    /// Exercises assigned per page read in a cycle.
    pub fn exercise_density(&self) -> f64 {
        match self {
            Self::HeavyPractice => 1.0,
            Self::TheoryOnly => 0.0,
            Self::Balanced(_) => 0.5,
        }
    }
}

impl From<String> for ExerciseMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Molta Pratica" => Self::HeavyPractice,
            "Solo Teoria" => Self::TheoryOnly,
            _ => Self::Balanced(value),
        }
    }
}

impl From<ExerciseMode> for String {
    fn from(value: ExerciseMode) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHabit {
    Highlighter,
    PassiveReader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessHabit {
    Transcriber,
    Orator,
}

/// Free-text study instinct tags as picked in the onboarding quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instincts(Vec<String>);

impl Instincts {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    fn any_contains(&self, needle: &str) -> bool {
        self.0.iter().any(|tag| tag.contains(needle))
    }

    pub fn input_habit(&self) -> Option<InputHabit> {
        if self.any_contains("Evidenziatore") {
            Some(InputHabit::Highlighter)
        } else if self.any_contains("Lettore Passivo") {
            Some(InputHabit::PassiveReader)
        } else {
            None
        }
    }

    pub fn process_habit(&self) -> Option<ProcessHabit> {
        if self.any_contains("Trascrittore") {
            Some(ProcessHabit::Transcriber)
        } else if self.any_contains("Oratore") {
            Some(ProcessHabit::Orator)
        } else {
            None
        }
    }

    pub fn is_transcriber(&self) -> bool {
        self.any_contains("Trascrittore")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Anxiety,
    Boredom,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionalEnemy(String);

impl EmotionalEnemy {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> EnemyKind {
        if self.0.contains("Ansia") {
            EnemyKind::Anxiety
        } else if self.0.contains("Noia") {
            EnemyKind::Boredom
        } else {
            EnemyKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub instincts: Instincts,
    pub focus_quality: FocusQuality,
    pub emotional_enemy: EmotionalEnemy,
    pub chronotype: String,
    pub review_mode: ReviewMode,
    pub exercise_mode: ExerciseMode,
    pub active_days: Vec<String>,
}

impl Profile {
    pub fn is_active_on(&self, weekday: Weekday) -> bool {
        let name = weekday_name(weekday);
        self.active_days.iter().any(|day| day == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub profile: Profile,
    /// Minutes needed to read one page.
    pub speed: f64,
    pub total_pages: i64,
    pub days_total: i64,
    pub daily_hours: i64,
    pub start_hour_str: String,
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub days_passed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Off,
    Study,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTask {
    pub time: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCycle {
    pub time_start: String,
    pub time_end: String,
    pub pages_start: i64,
    pub pages_end: i64,
    pub exercises: i64,
    pub input_strategy: String,
    pub process_strategy: String,
    pub psycho_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Task {
    Review(ReviewTask),
    StudyCycle(StudyCycle),
}

impl Task {
    pub fn as_study_cycle(&self) -> Option<&StudyCycle> {
        match self {
            Self::StudyCycle(cycle) => Some(cycle),
            Self::Review(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub tasks: Vec<Task>,
}

impl DayPlan {
    pub fn off(date: NaiveDate) -> Self {
        Self {
            date,
            day_type: DayType::Off,
            tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Success,
    Impossible,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSchedule {
    pub status: PlanStatus,
    pub coverage: i64,
    pub missing_pages: i64,
    pub plan: Vec<DayPlan>,
}

impl PlanSchedule {
    pub fn cycles(&self) -> impl Iterator<Item = &StudyCycle> {
        self.plan
            .iter()
            .flat_map(|day| day.tasks.iter())
            .filter_map(Task::as_study_cycle)
    }
}

/// Body returned by the plan endpoint. Validation failures travel inline
/// as `{"error": ...}` rather than as a transport error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    Rejected { error: String },
    Completed { status: PlanStatus, msg: String },
    Scheduled(PlanSchedule),
}

impl PlanOutcome {
    pub fn completed() -> Self {
        Self::Completed {
            status: PlanStatus::Completed,
            msg: "Hai finito!".to_string(),
        }
    }

    pub fn status(&self) -> Option<PlanStatus> {
        match self {
            Self::Rejected { .. } => None,
            Self::Completed { status, .. } => Some(*status),
            Self::Scheduled(schedule) => Some(schedule.status),
        }
    }

    pub fn schedule(&self) -> Option<&PlanSchedule> {
        match self {
            Self::Scheduled(schedule) => Some(schedule),
            _ => None,
        }
    }
}
