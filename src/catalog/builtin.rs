use super::category::Category;
use super::types::{OptionValue, Question, QuestionOption, QuestionType, NONE_OPTION};

/// Five labels scored 1..=5 in order, value equal to score.
fn ascending(labels: [&str; 5]) -> Vec<QuestionOption> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let score = i as u8 + 1;
            QuestionOption {
                value: OptionValue::Number(score as i64),
                label: label.to_string(),
                score: Some(score),
            }
        })
        .collect()
}

/// Five labels scored 5..=1 in order, value equal to score.
fn descending(labels: [&str; 5]) -> Vec<QuestionOption> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let score = 5 - i as u8;
            QuestionOption {
                value: OptionValue::Number(score as i64),
                label: label.to_string(),
                score: Some(score),
            }
        })
        .collect()
}

fn frequency() -> Vec<QuestionOption> {
    ascending(["Nunca", "Raramente", "A veces", "Frecuentemente", "Siempre"])
}

/// Frequency scale where doing it often is the healthy answer
fn reverse_frequency() -> Vec<QuestionOption> {
    descending(["Nunca", "Raramente", "A veces", "Frecuentemente", "Siempre"])
}

fn agreement() -> Vec<QuestionOption> {
    ascending([
        "Muy en desacuerdo",
        "En desacuerdo",
        "Neutral",
        "De acuerdo",
        "Muy de acuerdo",
    ])
}

fn question(
    id: u32,
    category: Category,
    kind: QuestionType,
    text: &str,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id,
        category,
        text: text.to_string(),
        kind,
        options,
        min: None,
        max: None,
        unit: None,
        helper_text: None,
    }
}

fn multi_option(value: &str, label: &str) -> QuestionOption {
    QuestionOption {
        value: OptionValue::Text(value.to_string()),
        label: label.to_string(),
        score: None,
    }
}

/// The 30-question diagnosis catalog shipped with the tool.
#[rustfmt::skip]
pub fn builtin_questions() -> Vec<Question> {
    use Category::*;
    use QuestionType::{Likert, Multi, Single};

    vec![
        // Déficit calórico inconsistente
        question(1, CaloricDeficit, Likert,
            "¿Con qué frecuencia comes más de lo planeado o pierdes el control sobre las porciones?",
            frequency()),
        question(2, CaloricDeficit, Likert,
            "¿Sueles saltarte comidas durante el día para luego comer en exceso?",
            frequency()),
        question(3, CaloricDeficit, Single,
            "¿Cuántas veces a la semana comes fuera de casa o pides comida a domicilio?",
            ascending(["0-1 veces", "2-3 veces", "4-5 veces", "6-7 veces", "Más de 7 veces"])),
        question(4, CaloricDeficit, Single,
            "¿Llevas algún tipo de registro de lo que comes (app, diario, fotos)?",
            descending(["Nunca", "Lo intenté pero lo dejé", "Ocasionalmente", "La mayoría de días", "Siempre"])),
        // Saciedad y proteína
        question(5, SatietyProtein, Likert,
            "¿Incluyes una fuente de proteína en cada comida principal?",
            reverse_frequency()),
        question(6, SatietyProtein, Likert,
            "¿Con qué frecuencia sientes hambre entre comidas?",
            frequency()),
        question(7, SatietyProtein, Single,
            "¿Cuántas porciones de verduras y hortalizas comes al día?",
            descending(["Ninguna", "1 porción", "2 porciones", "3 porciones", "4 o más porciones"])),
        // Ultraprocesados y picoteo
        question(8, UltraProcessed, Likert,
            "¿Con qué frecuencia consumes alimentos ultraprocesados (bollería, snacks, comida preparada)?",
            frequency()),
        question(9, UltraProcessed, Likert,
            "¿Picoteas entre horas sin tener hambre real?",
            frequency()),
        question(10, UltraProcessed, Likert,
            "¿Tienes alimentos \"prohibidos\" que cuando empiezas no puedes parar?",
            agreement()),
        question(11, UltraProcessed, Likert,
            "¿Comes frente a pantallas (TV, móvil, ordenador)?",
            frequency()),
        // NEAT y sedentarismo
        question(12, Sedentarism, Single,
            "¿Cuántas horas al día pasas sentado/a?",
            ascending(["Menos de 4 horas", "4-6 horas", "6-8 horas", "8-10 horas", "Más de 10 horas"])),
        question(13, Sedentarism, Single,
            "¿Cuántos pasos das aproximadamente al día?",
            descending(["Menos de 3.000", "3.000-5.000", "5.000-7.500", "7.500-10.000", "Más de 10.000"])),
        question(14, Sedentarism, Likert,
            "¿Utilizas escaleras en lugar de ascensor cuando es posible?",
            reverse_frequency()),
        question(15, Sedentarism, Likert,
            "¿Realizas pequeños movimientos o pausas activas durante el día?",
            reverse_frequency()),
        // Entrenamiento de fuerza
        question(16, StrengthTraining, Single,
            "¿Realizas ejercicios de fuerza o resistencia semanalmente?",
            descending(["Nunca", "1 vez por semana", "2 veces por semana", "3 veces por semana", "4 o más veces"])),
        question(17, StrengthTraining, Likert,
            "¿Sientes que has perdido fuerza o masa muscular en los últimos años?",
            agreement()),
        question(18, StrengthTraining, Likert,
            "¿Realizas principalmente cardio cuando haces ejercicio?",
            agreement()),
        // Sueño y ritmo circadiano
        question(19, Sleep, Single,
            "¿Cuántas horas duermes habitualmente por noche?",
            descending(["Menos de 5 horas", "5-6 horas", "6-7 horas", "7-8 horas", "Más de 8 horas"])),
        question(20, Sleep, Likert,
            "¿Te despiertas cansado/a aunque hayas dormido suficientes horas?",
            frequency()),
        question(21, Sleep, Likert,
            "¿Tienes horarios irregulares de sueño (diferentes cada día)?",
            frequency()),
        // Estrés percibido
        question(22, Stress, Single,
            "¿Cómo calificarías tu nivel de estrés general?",
            ascending(["Muy bajo", "Bajo", "Moderado", "Alto", "Muy alto"])),
        question(23, Stress, Likert,
            "¿Comes más cuando estás estresado/a, ansioso/a o aburrido/a?",
            frequency()),
        question(24, Stress, Single,
            "¿Tienes técnicas para gestionar el estrés (meditación, ejercicio, hobbies)?",
            descending(["No, ninguna", "Sí, pero no las uso", "A veces las uso", "Las uso regularmente", "Las uso a diario"])),
        // Alcohol y calorías líquidas
        question(25, LiquidCalories, Single,
            "¿Cuántas bebidas alcohólicas consumes a la semana?",
            ascending(["Ninguna", "1-3 bebidas", "4-7 bebidas", "8-14 bebidas", "Más de 14 bebidas"])),
        question(26, LiquidCalories, Likert,
            "¿Consumes bebidas azucaradas, zumos o refrescos regularmente?",
            frequency()),
        // Adherencia conductual
        question(27, Adherence, Single,
            "¿Cuántas dietas o planes de pérdida de peso has intentado en los últimos 5 años?",
            ascending(["Ninguna", "1-2", "3-5", "6-10", "Más de 10"])),
        question(28, Adherence, Likert,
            "¿Tiendes a abandonar los cambios de hábitos después de unas semanas?",
            agreement()),
        // Factores médicos
        question(29, MedicalFactors, Multi,
            "¿Tienes alguna condición médica que pueda afectar tu peso?",
            vec![
                multi_option(NONE_OPTION, "Ninguna que yo sepa"),
                multi_option("tiroides", "Problemas de tiroides"),
                multi_option("diabetes", "Diabetes o prediabetes"),
                multi_option("sop", "Síndrome de ovario poliquístico"),
                multi_option("menopausia", "Menopausia o perimenopausia"),
                multi_option("medicacion", "Tomo medicación que puede afectar el peso"),
                multi_option("otra", "Otra condición"),
            ]),
        question(30, MedicalFactors, Single,
            "¿Has consultado con un médico sobre tu dificultad para perder peso?",
            ascending([
                "Sí, tengo seguimiento médico",
                "Sí, pero hace tiempo",
                "No, pero planeo hacerlo",
                "No lo considero necesario",
                "No me lo he planteado",
            ])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate_catalog;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_thirty_questions() {
        let questions = builtin_questions();
        assert_eq!(questions.len(), 30);
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let categories: HashSet<Category> =
            builtin_questions().iter().map(|q| q.category).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(validate_catalog(&builtin_questions()).is_ok());
    }

    #[test]
    fn test_reversed_scale() {
        let questions = builtin_questions();
        let steps = &questions[12]; // id 13
        assert_eq!(steps.id, 13);
        assert_eq!(steps.options[0].label, "Menos de 3.000");
        assert_eq!(steps.options[0].score, Some(5));
        assert_eq!(steps.options[0].value, OptionValue::Number(5));
    }
}
