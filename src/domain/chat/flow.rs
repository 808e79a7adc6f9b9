//! Static questionnaire script for the Salomão wizard.
//!
//! The interview is a fixed five-step sequence. The table below is
//! process-wide constant state, loaded once and never mutated.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Total number of questionnaire steps.
pub const STEP_COUNT: u8 = 5;

/// Greeting seeded into every new session as the first assistant message.
pub const GREETING: &str = "Olá! Sou o Salomão, sua IA especialista em sistemas de vendas. Vou criar um sistema personalizado para seu negócio em 60 segundos. Vamos começar?";

/// The step-5 option that opts the user into the automated SDR closer.
pub const SDR_OPT_IN: &str = "Sim, quero conversão máxima!";

/// Kind of input widget a step expects from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    TextInput,
    Options,
    TextArea,
}

/// One entry in the fixed question sequence.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionStep {
    pub step: u8,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<&'static str>,
    #[serde(rename = "type")]
    pub input: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychology: Option<&'static str>,
}

/// The five-step interview, in order.
pub static QUESTION_FLOW: Lazy<[QuestionStep; 5]> = Lazy::new(|| {
    [
        QuestionStep {
            step: 1,
            question: "Que tipo de cliente você quer atrair em massa?",
            subtext: Some("Ex: empresários, mulheres que querem emagrecer, donos de pets..."),
            input: InputKind::TextInput,
            options: None,
            psychology: None,
        },
        QuestionStep {
            step: 2,
            question: "Quantos kg em média seus clientes querem perder?",
            subtext: None,
            input: InputKind::Options,
            options: Some(&["5-10kg", "10-20kg", "20-30kg", "30kg+"]),
            psychology: Some("Meta específica gera comprometimento psicológico"),
        },
        QuestionStep {
            step: 3,
            question: "Qual o maior desafio deles hoje?",
            subtext: None,
            input: InputKind::Options,
            options: Some(&[
                "Falta de tempo",
                "Não conseguem manter dieta",
                "Não sabem o que comer",
                "Resultados lentos",
            ]),
            psychology: Some("Identificar dor específica aumenta conexão emocional"),
        },
        QuestionStep {
            step: 4,
            question: "Como você prefere converter esses leads?",
            subtext: None,
            input: InputKind::Options,
            options: Some(&[
                "WhatsApp direto",
                "Agendamento de consulta",
                "Venda de programa online",
                "Grupo VIP",
            ]),
            psychology: Some("Método de conversão alinhado com perfil do público"),
        },
        QuestionStep {
            step: 5,
            question: "Quer que eu inclua um SDR automático que fecha vendas no piloto?",
            subtext: None,
            input: InputKind::Options,
            options: Some(&[SDR_OPT_IN, "Não, prefiro fazer manual"]),
            psychology: Some("Oferta de automação aumenta valor percebido"),
        },
    ]
});

/// One position in the fixed question sequence.
///
/// Each step owns exactly one profile field; the mapping lives in
/// `SystemData::record`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    TargetAudience,
    WeightGoal,
    MainChallenge,
    ConversionMethod,
    SdrAutomation,
}

impl Step {
    /// Maps a 1-based step number to a Step, `None` outside 1-5.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::TargetAudience),
            2 => Some(Step::WeightGoal),
            3 => Some(Step::MainChallenge),
            4 => Some(Step::ConversionMethod),
            5 => Some(Step::SdrAutomation),
            _ => None,
        }
    }

    /// Returns the 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Step::TargetAudience => 1,
            Step::WeightGoal => 2,
            Step::MainChallenge => 3,
            Step::ConversionMethod => 4,
            Step::SdrAutomation => 5,
        }
    }

    /// Returns the step that follows this one, `None` for the last.
    pub fn next(&self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    /// Returns true for the last step of the questionnaire.
    pub fn is_final(&self) -> bool {
        matches!(self, Step::SdrAutomation)
    }

    /// Returns the script entry for this step.
    pub fn script(&self) -> &'static QuestionStep {
        &QUESTION_FLOW[(self.number() - 1) as usize]
    }

    /// Returns the question text for this step.
    pub fn question_text(&self) -> &'static str {
        self.script().question
    }

    /// Returns the selectable answers for this step, if it is options-typed.
    pub fn options(&self) -> Option<Vec<String>> {
        self.script()
            .options
            .map(|opts| opts.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_has_exactly_five_steps() {
        assert_eq!(QUESTION_FLOW.len(), STEP_COUNT as usize);
    }

    #[test]
    fn flow_steps_are_numbered_in_order() {
        for (i, entry) in QUESTION_FLOW.iter().enumerate() {
            assert_eq!(entry.step as usize, i + 1);
        }
    }

    #[test]
    fn first_step_is_free_text() {
        let first = &QUESTION_FLOW[0];
        assert_eq!(first.input, InputKind::TextInput);
        assert!(first.options.is_none());
        assert!(first.subtext.is_some());
    }

    #[test]
    fn weight_goal_step_offers_four_ranges() {
        let options = Step::WeightGoal.options().unwrap();
        assert_eq!(options, vec!["5-10kg", "10-20kg", "20-30kg", "30kg+"]);
    }

    #[test]
    fn final_step_offers_sdr_opt_in_first() {
        let options = Step::SdrAutomation.options().unwrap();
        assert_eq!(options[0], SDR_OPT_IN);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn step_from_number_covers_valid_range() {
        assert_eq!(Step::from_number(1), Some(Step::TargetAudience));
        assert_eq!(Step::from_number(5), Some(Step::SdrAutomation));
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=STEP_COUNT {
            let step = Step::from_number(n).unwrap();
            assert_eq!(step.number(), n);
        }
    }

    #[test]
    fn step_next_walks_the_sequence() {
        assert_eq!(Step::TargetAudience.next(), Some(Step::WeightGoal));
        assert_eq!(Step::ConversionMethod.next(), Some(Step::SdrAutomation));
        assert_eq!(Step::SdrAutomation.next(), None);
    }

    #[test]
    fn only_last_step_is_final() {
        assert!(Step::SdrAutomation.is_final());
        assert!(!Step::TargetAudience.is_final());
        assert!(!Step::ConversionMethod.is_final());
    }

    #[test]
    fn question_step_serializes_input_kind_as_type() {
        let json = serde_json::to_value(Step::TargetAudience.script()).unwrap();
        assert_eq!(json["type"], "text_input");
        assert_eq!(json["step"], 1);
        assert!(json.get("options").is_none());
    }

    #[test]
    fn options_step_serializes_option_list() {
        let json = serde_json::to_value(Step::WeightGoal.script()).unwrap();
        assert_eq!(json["type"], "options");
        assert_eq!(json["options"][0], "5-10kg");
        assert_eq!(
            json["psychology"],
            "Meta específica gera comprometimento psicológico"
        );
    }
}
