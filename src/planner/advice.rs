use super::types::{EmotionalEnemy, EnemyKind, InputHabit, Instincts, ProcessHabit, Profile};

const DEFAULT_INPUT_STRATEGY: &str = "Leggi con attenzione.";
const DEFAULT_PROCESS_STRATEGY: &str = "Rielabora mentalmente.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalStrategy {
    pub input: &'static str,
    pub process: &'static str,
}

pub fn technical_strategy(instincts: &Instincts) -> TechnicalStrategy {
    let input = match instincts.input_habit() {
        Some(InputHabit::Highlighter) => {
            "🚫 **Mani in Tasca:** Vietato sottolineare alla prima lettura."
        }
        Some(InputHabit::PassiveReader) => "⚡ **Interrogazione:** Trasforma i titoli in domande.",
        None => DEFAULT_INPUT_STRATEGY,
    };
    let process = match instincts.process_habit() {
        Some(ProcessHabit::Transcriber) => "🛑 **Filtro:** Solo 3 parole chiave per paragrafo.",
        Some(ProcessHabit::Orator) => "👶 **Feynman:** Spiega a un bambino.",
        None => DEFAULT_PROCESS_STRATEGY,
    };
    TechnicalStrategy { input, process }
}

pub fn psycho_advice(enemy: &EmotionalEnemy) -> &'static str {
    match enemy.kind() {
        EnemyKind::Anxiety => "🧘 **Mindset:** Non cercare la perfezione.",
        EnemyKind::Boredom => "🎮 **Gamification:** Usa timer aggressivi.",
        EnemyKind::Other => "🔋 **Energy:** Cerca solo i concetti macro.",
    }
}

/// Advice strings attached to every study cycle of a plan. All of them
/// depend on the profile only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleAdvice {
    pub input_strategy: &'static str,
    pub process_strategy: &'static str,
    pub psycho_tip: &'static str,
}

impl CycleAdvice {
    pub fn for_profile(profile: &Profile) -> Self {
        let technical = technical_strategy(&profile.instincts);
        Self {
            input_strategy: technical.input,
            process_strategy: technical.process,
            psycho_tip: psycho_advice(&profile.emotional_enemy),
        }
    }
}
