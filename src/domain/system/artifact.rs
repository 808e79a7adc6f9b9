//! Generated marketing-system artifact.

use serde::{Deserialize, Serialize};

/// Default landing-page palette, also used by generator prompts.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#1e293b";

/// Primary/secondary color pair for the generated landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewColors {
    pub primary: String,
    pub secondary: String,
}

impl Default for PreviewColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

/// Landing-page copy inside a generated artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewCard {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub colors: PreviewColors,
}

/// Marketing-system description produced by the artifact generator.
///
/// Deserialization is tolerant: any field the model omits falls back to
/// its default, so a partially valid reply still parses. Callers decide
/// whether the result is usable via [`GeneratedSystem::is_unusable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedSystem {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    /// Estimated conversion rate as the model writes it, e.g. "35".
    pub conversion_rate: String,
    pub template: String,
    pub preview: PreviewCard,
}

impl GeneratedSystem {
    /// Deterministic artifact used when the generator call fails.
    ///
    /// Pure and total: built only from template strings plus whatever
    /// profile fields happen to exist.
    pub fn fallback(target_audience: Option<&str>, main_challenge: Option<&str>) -> Self {
        Self {
            name: "Sistema Personalizado".to_string(),
            description: "Sistema inteligente de captação de leads".to_string(),
            features: vec![
                "Formulário otimizado".to_string(),
                "Integração WhatsApp".to_string(),
                "Analytics em tempo real".to_string(),
            ],
            conversion_rate: "35".to_string(),
            template: "custom_template".to_string(),
            preview: PreviewCard {
                title: format!("Solução para {}", target_audience.unwrap_or("seu negócio")),
                subtitle: main_challenge
                    .unwrap_or("Capte leads qualificados todos os dias")
                    .to_string(),
                button_text: "Quero Saber Mais".to_string(),
                colors: PreviewColors::default(),
            },
        }
    }

    /// True when the artifact lacks the minimum usable content.
    pub fn is_unusable(&self) -> bool {
        self.name.trim().is_empty()
    }
}
