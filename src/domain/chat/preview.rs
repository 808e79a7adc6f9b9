//! Preview card shown alongside the completion message.

use serde::{Deserialize, Serialize};

use super::profile::SystemData;

/// Summary of the system the wizard built, rendered by the client as a
/// call-to-action card next to the final reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPreview {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub hook: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_method: Option<String>,
    #[serde(rename = "hasSDR")]
    pub has_sdr: bool,
}

impl SystemPreview {
    /// Builds the preview from a completed questionnaire profile.
    ///
    /// The headline copy is fixed; the profile only fills in the weight
    /// goal, challenge, conversion method and the SDR flag.
    pub fn from_profile(profile: &SystemData) -> Self {
        Self {
            title: "Calculadora de Transformação Corporal".to_string(),
            subtitle: "Veja como você ficará em 90 dias".to_string(),
            button_text: "Ver Minha Transformação".to_string(),
            hook: "Descubra seu peso ideal e veja o resultado visual".to_string(),
            template: "weight_loss_calculator".to_string(),
            target_weight: profile.weight_goal().map(str::to_string),
            challenge: profile.main_challenge().map(str::to_string),
            conversion_method: profile.conversion_method().map(str::to_string),
            has_sdr: profile.wants_sdr(),
        }
    }
}
