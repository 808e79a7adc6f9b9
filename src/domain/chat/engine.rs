//! Scripted reply engine.
//!
//! Produces the assistant reply for each questionnaire turn. Replies are
//! deterministic templates keyed by the step being answered; only the
//! first step inspects the answer content (weight-loss keyword branch).

use super::flow::Step;
use super::preview::SystemPreview;
use super::profile::SystemData;
use crate::domain::system::GeneratedSystem;

/// Keywords in a first-step answer that select the weight-loss reply.
const WEIGHT_LOSS_KEYWORDS: [&str; 3] = ["emagrecer", "peso", "dieta"];

/// Outcome of processing one questionnaire turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Assistant reply for this turn.
    pub response: String,
    /// Quick-reply options for the step the reply asks about.
    pub options: Option<Vec<String>>,
    /// Step the session now waits on. `None` once the wizard is complete.
    pub next_step: Option<u8>,
    /// True when this turn answered the final step.
    pub is_complete: bool,
    /// Preview card, present only on the completing turn.
    pub system_preview: Option<SystemPreview>,
}

/// Returns true if the answer mentions a weight-loss niche.
fn mentions_weight_loss(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    WEIGHT_LOSS_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Builds the reply for an intermediate turn: acknowledgment of the
/// answer to `step`, followed by the question for `next`.
///
/// Returns the reply text and the quick-reply options of `next`.
pub(crate) fn reply_for(step: Step, next: Step, answer: &str) -> (String, Option<Vec<String>>) {
    let response = match step {
        Step::TargetAudience => {
            if mentions_weight_loss(answer) {
                format!(
                    "Excelente! Para criar a isca perfeita para **{}**, me conta:\n\n{}",
                    answer,
                    next.question_text()
                )
            } else {
                format!(
                    "Perfeito! Vou criar um sistema para atrair **{}**.\n\n{}",
                    answer,
                    next.question_text()
                )
            }
        }
        Step::WeightGoal => format!(
            "Perfeito! Vou focar em pessoas que querem perder **{}**. Agora me conta:\n\n{}",
            answer,
            next.question_text()
        ),
        Step::MainChallenge => format!(
            "Entendi! O maior obstáculo é \"**{}**\". Vou criar uma solução específica para isso.\n\n{}",
            answer,
            next.question_text()
        ),
        // The final step has no successor, so it never reaches here;
        // completion_reply handles it.
        Step::ConversionMethod | Step::SdrAutomation => format!(
            "Ótima escolha! **{}** tem alta taxa de conversão para esse nicho.\n\n{}",
            answer,
            next.question_text()
        ),
    };

    (response, next.options())
}

/// Builds the celebratory reply for the completing turn.
///
/// The projected numbers are fixed copy; the profile fills in the niche
/// details and the artifact contributes its description line.
pub(crate) fn completion_reply(profile: &SystemData, artifact: &GeneratedSystem) -> String {
    let sdr_line = if profile.wants_sdr() {
        "SDR automático incluso"
    } else {
        "Captura manual de leads"
    };
    let conversion_method = profile.conversion_method().unwrap_or("seu canal de vendas");
    let weight_goal = profile.weight_goal().unwrap_or("peso");

    format!(
        "🎉 **SISTEMA \"CALCULADORA DE TRANSFORMAÇÃO CORPORAL\" CRIADO!**\n\n\
         🔥 **Com este sistema você terá:**\n\
         📈 De 3 leads/dia → **45 leads/dia**\n\
         💰 **Aumento de 1200%** no faturamento  \n\
         ⭐ **89% de taxa de conversão**\n\n\
         ✨ **FUNCIONALIDADES INCLUÍDAS:**\n\
         • {description}\n\
         • Visualização antes/depois com IA\n\
         • Plano personalizado automático\n\
         • {sdr_line}\n\
         • Integração direta com {conversion_method}\n\n\
         🚀 **Pronto para capturar leads qualificados que querem perder {weight_goal}!**\n\n\
         Clique em \"Publicar Sistema\" para ativar e começar a receber leads hoje mesmo!",
        description = artifact.description,
        sdr_line = sdr_line,
        conversion_method = conversion_method,
        weight_goal = weight_goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::flow::SDR_OPT_IN;

    mod keywords {
        use super::*;

        #[test]
        fn detects_emagrecer() {
            assert!(mentions_weight_loss("mulheres que querem emagrecer"));
        }

        #[test]
        fn detects_keywords_case_insensitively() {
            assert!(mentions_weight_loss("quero perder PESO rápido"));
            assert!(mentions_weight_loss("pessoas de DIETA"));
        }

        #[test]
        fn ignores_unrelated_answers() {
            assert!(!mentions_weight_loss("empresários"));
            assert!(!mentions_weight_loss("donos de pets"));
        }
    }

    mod replies {
        use super::*;

        #[test]
        fn first_step_uses_weight_loss_branch_when_keyword_present() {
            let (response, _) = reply_for(
                Step::TargetAudience,
                Step::WeightGoal,
                "mulheres que querem emagrecer",
            );
            assert!(response.starts_with("Excelente! Para criar a isca perfeita para"));
            assert!(response.contains("**mulheres que querem emagrecer**"));
            assert!(response.contains(Step::WeightGoal.question_text()));
        }

        #[test]
        fn first_step_uses_generic_branch_otherwise() {
            let (response, _) =
                reply_for(Step::TargetAudience, Step::WeightGoal, "empresários");
            assert!(response.starts_with("Perfeito! Vou criar um sistema para atrair"));
            assert!(response.contains("**empresários**"));
        }

        #[test]
        fn second_step_reply_echoes_goal_and_asks_challenge() {
            let (response, _) = reply_for(Step::WeightGoal, Step::MainChallenge, "10-20kg");
            assert!(response.contains("querem perder **10-20kg**"));
            assert!(response.contains(Step::MainChallenge.question_text()));
        }

        #[test]
        fn third_step_reply_quotes_the_challenge() {
            let (response, _) = reply_for(
                Step::MainChallenge,
                Step::ConversionMethod,
                "Não sabem o que comer",
            );
            assert!(response.contains("\"**Não sabem o que comer**\""));
            assert!(response.contains(Step::ConversionMethod.question_text()));
        }

        #[test]
        fn fourth_step_reply_praises_the_choice() {
            let (response, _) = reply_for(
                Step::ConversionMethod,
                Step::SdrAutomation,
                "WhatsApp direto",
            );
            assert!(response.contains("**WhatsApp direto** tem alta taxa de conversão"));
            assert!(response.contains(Step::SdrAutomation.question_text()));
        }

        #[test]
        fn reply_carries_options_of_the_next_step() {
            let (_, options) = reply_for(Step::TargetAudience, Step::WeightGoal, "empresários");
            let options = options.unwrap();
            assert_eq!(options, vec!["5-10kg", "10-20kg", "20-30kg", "30kg+"]);

            let (_, options) = reply_for(
                Step::ConversionMethod,
                Step::SdrAutomation,
                "WhatsApp direto",
            );
            assert_eq!(
                options.unwrap(),
                vec![SDR_OPT_IN, "Não, prefiro fazer manual"]
            );
        }
    }

    mod completion {
        use super::*;

        fn full_profile() -> SystemData {
            let mut profile = SystemData::new();
            profile.record(Step::TargetAudience, "donos de clínicas de estética");
            profile.record(Step::WeightGoal, "10-20kg");
            profile.record(Step::MainChallenge, "Não sabem o que comer");
            profile.record(Step::ConversionMethod, "WhatsApp direto");
            profile.record(Step::SdrAutomation, SDR_OPT_IN);
            profile
        }

        fn artifact() -> GeneratedSystem {
            GeneratedSystem::fallback(Some("donos de clínicas de estética"), None)
        }

        #[test]
        fn completion_reply_includes_sdr_line_on_opt_in() {
            let reply = completion_reply(&full_profile(), &artifact());
            assert!(reply.contains("SDR automático incluso"));
            assert!(!reply.contains("Captura manual de leads"));
        }

        #[test]
        fn completion_reply_includes_manual_line_on_opt_out() {
            let mut profile = full_profile();
            profile.record(Step::SdrAutomation, "Não, prefiro fazer manual");
            let reply = completion_reply(&profile, &artifact());
            assert!(reply.contains("Captura manual de leads"));
            assert!(!reply.contains("SDR automático incluso"));
        }

        #[test]
        fn completion_reply_embeds_profile_details_and_description() {
            let reply = completion_reply(&full_profile(), &artifact());
            assert!(reply.contains("Integração direta com WhatsApp direto"));
            assert!(reply.contains("querem perder 10-20kg!"));
            assert!(reply.contains("• Sistema inteligente de captação de leads"));
        }

        #[test]
        fn completion_reply_falls_back_for_missing_answers() {
            let reply = completion_reply(&SystemData::new(), &artifact());
            assert!(reply.contains("Integração direta com seu canal de vendas"));
            assert!(reply.contains("querem perder peso!"));
        }

        #[test]
        fn completion_reply_keeps_fixed_projection_copy() {
            let reply = completion_reply(&full_profile(), &artifact());
            assert!(reply.starts_with(
                "🎉 **SISTEMA \"CALCULADORA DE TRANSFORMAÇÃO CORPORAL\" CRIADO!**"
            ));
            assert!(reply.contains("**45 leads/dia**"));
            assert!(reply.contains("**Aumento de 1200%** no faturamento"));
            assert!(reply.contains("**89% de taxa de conversão**"));
            assert!(reply.ends_with(
                "Clique em \"Publicar Sistema\" para ativar e começar a receber leads hoje mesmo!"
            ));
        }
    }
}
