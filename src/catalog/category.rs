use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thematic dimension a question belongs to.
///
/// The set is closed; catalogs naming any other tag fail to load.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "deficit_calorico")]
    CaloricDeficit,
    #[serde(rename = "saciedad_proteina")]
    SatietyProtein,
    #[serde(rename = "ultraprocesados")]
    UltraProcessed,
    #[serde(rename = "neat_sedentarismo")]
    Sedentarism,
    #[serde(rename = "entrenamiento_fuerza")]
    StrengthTraining,
    #[serde(rename = "sueno")]
    Sleep,
    #[serde(rename = "estres")]
    Stress,
    #[serde(rename = "alcohol_liquidas")]
    LiquidCalories,
    #[serde(rename = "adherencia")]
    Adherence,
    #[serde(rename = "factores_medicos")]
    MedicalFactors,
}

/// Small first step suggested for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Habit {
    pub title: &'static str,
    pub description: &'static str,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::CaloricDeficit,
        Category::SatietyProtein,
        Category::UltraProcessed,
        Category::Sedentarism,
        Category::StrengthTraining,
        Category::Sleep,
        Category::Stress,
        Category::LiquidCalories,
        Category::Adherence,
        Category::MedicalFactors,
    ];

    /// Stable tag used in catalogs and persisted profiles
    pub fn tag(self) -> &'static str {
        match self {
            Category::CaloricDeficit => "deficit_calorico",
            Category::SatietyProtein => "saciedad_proteina",
            Category::UltraProcessed => "ultraprocesados",
            Category::Sedentarism => "neat_sedentarismo",
            Category::StrengthTraining => "entrenamiento_fuerza",
            Category::Sleep => "sueno",
            Category::Stress => "estres",
            Category::LiquidCalories => "alcohol_liquidas",
            Category::Adherence => "adherencia",
            Category::MedicalFactors => "factores_medicos",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::CaloricDeficit => "Déficit Calórico Inconsistente",
            Category::SatietyProtein => "Saciedad y Proteína",
            Category::UltraProcessed => "Ultraprocesados y Picoteo",
            Category::Sedentarism => "NEAT y Sedentarismo",
            Category::StrengthTraining => "Entrenamiento de Fuerza",
            Category::Sleep => "Sueño y Ritmo Circadiano",
            Category::Stress => "Estrés Percibido",
            Category::LiquidCalories => "Alcohol y Calorías Líquidas",
            Category::Adherence => "Adherencia Conductual",
            Category::MedicalFactors => "Factores Médicos",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::CaloricDeficit => "Control de porciones y consistencia alimentaria",
            Category::SatietyProtein => "Sensación de saciedad y consumo proteico",
            Category::UltraProcessed => "Consumo de alimentos procesados y hábitos de picoteo",
            Category::Sedentarism => "Movimiento diario y actividad no planificada",
            Category::StrengthTraining => "Ejercicio de resistencia y masa muscular",
            Category::Sleep => "Calidad y cantidad de sueño",
            Category::Stress => "Niveles de estrés y gestión emocional",
            Category::LiquidCalories => "Consumo de bebidas calóricas",
            Category::Adherence => "Historial de dietas y mantenimiento de hábitos",
            Category::MedicalFactors => "Condiciones de salud relevantes",
        }
    }

    /// Mechanism shown when this category is the root factor
    pub fn mechanism(self) -> &'static str {
        match self {
            Category::CaloricDeficit => "Inconsistencia energética",
            Category::SatietyProtein => "Señales de saciedad alteradas",
            Category::UltraProcessed => "Sobreestimulación alimentaria",
            Category::Sedentarism => "Metabolismo reducido",
            Category::StrengthTraining => "Pérdida muscular",
            Category::Sleep => "Desregulación hormonal",
            Category::Stress => "Alimentación emocional",
            Category::LiquidCalories => "Calorías invisibles",
            Category::Adherence => "Patrón yo-yo",
            Category::MedicalFactors => "Factores fisiológicos",
        }
    }

    /// One-sentence explanation shown next to a main factor
    pub fn factor_summary(self) -> &'static str {
        match self {
            Category::CaloricDeficit => "Tu ingesta calórica no es consistente, lo que dificulta crear un déficit sostenible.",
            Category::SatietyProtein => "No estás comiendo suficiente proteína o fibra para sentirte saciado/a.",
            Category::UltraProcessed => "El consumo de ultraprocesados y el picoteo afectan tu balance energético.",
            Category::Sedentarism => "Tu nivel de movimiento diario es bajo, reduciendo tu gasto calórico total.",
            Category::StrengthTraining => "La falta de entrenamiento de fuerza puede estar afectando tu metabolismo.",
            Category::Sleep => "La calidad o cantidad de sueño está impactando tus hormonas del hambre.",
            Category::Stress => "El estrés está influyendo en tus decisiones alimentarias.",
            Category::LiquidCalories => "Las bebidas calóricas aportan energía sin saciedad.",
            Category::Adherence => "Tienes dificultad para mantener los cambios a largo plazo.",
            Category::MedicalFactors => "Hay factores médicos que podrían estar influyendo.",
        }
    }

    pub fn first_habit(self) -> Habit {
        let (title, description) = match self {
            Category::CaloricDeficit => (
                "Planifica tu comida principal del día",
                "Cada mañana, decide qué vas a comer en tu comida principal. Solo eso. No toda la semana, solo hoy.",
            ),
            Category::SatietyProtein => (
                "Añade proteína a tu desayuno",
                "Incluye al menos una fuente de proteína en tu primera comida del día: huevos, yogur griego, jamón, etc.",
            ),
            Category::UltraProcessed => (
                "Identifica tu snack problemático",
                "Anota cuál es el ultraprocesado que más consumes y busca una alternativa más saciante.",
            ),
            Category::Sedentarism => (
                "Caminata de 10 minutos después de comer",
                "Añade un paseo corto después de tu comida principal. No es ejercicio, es movimiento.",
            ),
            Category::StrengthTraining => (
                "5 sentadillas al levantarte",
                "Antes de desayunar, haz 5 sentadillas. Es mínimo, pero crea el hábito.",
            ),
            Category::Sleep => (
                "Alarma para ir a dormir",
                "Pon una alarma 30 minutos antes de tu hora ideal de acostarte como recordatorio.",
            ),
            Category::Stress => (
                "3 respiraciones profundas antes de comer",
                "Antes de cada comida, haz 3 respiraciones profundas para activar el sistema parasimpático.",
            ),
            Category::LiquidCalories => (
                "Un vaso de agua antes de cada bebida calórica",
                "Antes de tomar cualquier bebida con calorías, bebe un vaso de agua completo.",
            ),
            Category::Adherence => (
                "Compromiso mínimo de 2 semanas",
                "Elige UN solo hábito y comprométete a hacerlo solo 14 días. Nada más.",
            ),
            Category::MedicalFactors => (
                "Agenda una cita con tu médico",
                "Si no lo has hecho, agenda una revisión para descartar factores médicos.",
            ),
        };
        Habit { title, description }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown category '{}'", s))
    }
}
