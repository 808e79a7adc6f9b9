//! Accumulated answer profile for a chat session.

use serde::{Deserialize, Serialize};

use super::flow::{Step, SDR_OPT_IN};
use crate::domain::system::GeneratedSystem;

/// The answers collected across the questionnaire, one field per step.
///
/// Fields fill in step order and stay `None` until their step has been
/// answered. A later step never touches an earlier step's field, so the
/// profile only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemData {
    #[serde(skip_serializing_if = "Option::is_none")]
    target_audience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    weight_goal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    main_challenge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    conversion_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sdr_automation: Option<String>,
}

impl SystemData {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer under the field owned by the given step.
    pub fn record(&mut self, step: Step, answer: impl Into<String>) {
        let answer = answer.into();
        match step {
            Step::TargetAudience => self.target_audience = Some(answer),
            Step::WeightGoal => self.weight_goal = Some(answer),
            Step::MainChallenge => self.main_challenge = Some(answer),
            Step::ConversionMethod => self.conversion_method = Some(answer),
            Step::SdrAutomation => self.sdr_automation = Some(answer),
        }
    }

    /// Returns the answer recorded for the given step, if any.
    pub fn answer_for(&self, step: Step) -> Option<&str> {
        match step {
            Step::TargetAudience => self.target_audience(),
            Step::WeightGoal => self.weight_goal(),
            Step::MainChallenge => self.main_challenge(),
            Step::ConversionMethod => self.conversion_method(),
            Step::SdrAutomation => self.sdr_automation(),
        }
    }

    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    pub fn weight_goal(&self) -> Option<&str> {
        self.weight_goal.as_deref()
    }

    pub fn main_challenge(&self) -> Option<&str> {
        self.main_challenge.as_deref()
    }

    pub fn conversion_method(&self) -> Option<&str> {
        self.conversion_method.as_deref()
    }

    pub fn sdr_automation(&self) -> Option<&str> {
        self.sdr_automation.as_deref()
    }

    /// Number of steps answered so far.
    pub fn answered_count(&self) -> usize {
        [
            self.target_audience.is_some(),
            self.weight_goal.is_some(),
            self.main_challenge.is_some(),
            self.conversion_method.is_some(),
            self.sdr_automation.is_some(),
        ]
        .iter()
        .filter(|answered| **answered)
        .count()
    }

    /// True once all five steps have an answer.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == 5
    }

    /// True when the user picked the automated SDR closer at step 5.
    pub fn wants_sdr(&self) -> bool {
        self.sdr_automation.as_deref() == Some(SDR_OPT_IN)
    }

    /// Deterministic artifact used when the generator is unavailable.
    pub fn fallback_artifact(&self) -> GeneratedSystem {
        GeneratedSystem::fallback(self.target_audience(), self.main_challenge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> SystemData {
        let mut profile = SystemData::new();
        profile.record(Step::TargetAudience, "donos de clínicas de estética");
        profile.record(Step::WeightGoal, "10-20kg");
        profile.record(Step::MainChallenge, "Falta de tempo");
        profile.record(Step::ConversionMethod, "WhatsApp direto");
        profile.record(Step::SdrAutomation, SDR_OPT_IN);
        profile
    }

    #[test]
    fn new_profile_is_empty() {
        let profile = SystemData::new();
        assert_eq!(profile.answered_count(), 0);
        assert!(!profile.is_complete());
        assert!(profile.target_audience().is_none());
    }

    #[test]
    fn record_maps_each_step_to_its_field() {
        let profile = complete_profile();
        assert_eq!(
            profile.target_audience(),
            Some("donos de clínicas de estética")
        );
        assert_eq!(profile.weight_goal(), Some("10-20kg"));
        assert_eq!(profile.main_challenge(), Some("Falta de tempo"));
        assert_eq!(profile.conversion_method(), Some("WhatsApp direto"));
        assert_eq!(profile.sdr_automation(), Some(SDR_OPT_IN));
    }

    #[test]
    fn answer_for_reads_back_what_record_wrote() {
        let profile = complete_profile();
        for n in 1..=5 {
            let step = Step::from_number(n).unwrap();
            assert!(profile.answer_for(step).is_some());
        }
    }

    #[test]
    fn recording_a_later_step_leaves_earlier_fields_alone() {
        let mut profile = SystemData::new();
        profile.record(Step::TargetAudience, "empresários");
        profile.record(Step::WeightGoal, "5-10kg");
        assert_eq!(profile.target_audience(), Some("empresários"));
    }

    #[test]
    fn profile_is_complete_after_five_answers() {
        let profile = complete_profile();
        assert_eq!(profile.answered_count(), 5);
        assert!(profile.is_complete());
    }

    #[test]
    fn wants_sdr_requires_the_exact_opt_in_answer() {
        let mut profile = SystemData::new();
        profile.record(Step::SdrAutomation, SDR_OPT_IN);
        assert!(profile.wants_sdr());

        profile.record(Step::SdrAutomation, "Não, prefiro fazer manual");
        assert!(!profile.wants_sdr());

        profile.record(Step::SdrAutomation, "sim");
        assert!(!profile.wants_sdr());
    }

    #[test]
    fn empty_profile_serializes_to_empty_object() {
        let json = serde_json::to_value(SystemData::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let profile = complete_profile();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["targetAudience"], "donos de clínicas de estética");
        assert_eq!(json["weightGoal"], "10-20kg");
        assert_eq!(json["mainChallenge"], "Falta de tempo");
        assert_eq!(json["conversionMethod"], "WhatsApp direto");
        assert_eq!(json["sdrAutomation"], SDR_OPT_IN);
    }

    #[test]
    fn profile_deserializes_from_partial_json() {
        let json = r#"{"targetAudience":"donos de pets"}"#;
        let profile: SystemData = serde_json::from_str(json).unwrap();
        assert_eq!(profile.target_audience(), Some("donos de pets"));
        assert_eq!(profile.answered_count(), 1);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let original = complete_profile();
        let json = serde_json::to_string(&original).unwrap();
        let restored: SystemData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn fallback_artifact_uses_recorded_audience() {
        let profile = complete_profile();
        let artifact = profile.fallback_artifact();
        assert!(artifact
            .preview
            .title
            .contains("donos de clínicas de estética"));
    }
}
