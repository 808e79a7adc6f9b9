//! Chat session aggregate.
//!
//! A `ChatSession` walks a visitor through the fixed five-step sales
//! questionnaire. Each turn records the answer, appends the user and
//! assistant messages, and advances the step counter. The final turn
//! produces the completion reply together with a preview card.

use crate::domain::foundation::{ChatSessionId, SessionStatus, Timestamp, UserId};
use crate::domain::system::GeneratedSystem;

use super::engine::{self, TurnOutcome};
use super::errors::ChatError;
use super::flow::{Step, GREETING};
use super::message::Message;
use super::preview::SystemPreview;
use super::profile::SystemData;

/// Chat session aggregate root.
///
/// # Invariants
///
/// - `current_step` stays within the questionnaire range (1..=5)
/// - `messages` always starts with the greeting and grows by one user
///   and one assistant message per processed turn
/// - the final step does not advance; answering it again replays the
///   completion turn with the re-recorded answer
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    id: ChatSessionId,
    user_id: Option<UserId>,
    messages: Vec<Message>,
    current_step: u8,
    system_data: SystemData,
    status: SessionStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ChatSession {
    /// Starts a new session seeded with the greeting message.
    ///
    /// Sessions may be anonymous; `user_id` is `None` for visitors who
    /// have not signed in.
    pub fn start(user_id: Option<UserId>) -> Self {
        let now = Timestamp::now();
        Self {
            id: ChatSessionId::new(),
            user_id,
            messages: vec![Message::assistant(GREETING)],
            current_step: Step::TargetAudience.number(),
            system_data: SystemData::new(),
            status: SessionStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ChatSessionId,
        user_id: Option<UserId>,
        messages: Vec<Message>,
        current_step: u8,
        system_data: SystemData,
        status: SessionStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            messages,
            current_step,
            system_data,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &ChatSessionId {
        &self.id
    }

    /// Returns the owning user, if the session is not anonymous.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Returns the full message transcript.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the step the session currently waits on.
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Returns the answers collected so far.
    pub fn system_data(&self) -> &SystemData {
        &self.system_data
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the step the next answer will be recorded against.
    ///
    /// # Errors
    ///
    /// - `Archived` if the session no longer accepts turns
    /// - `InvalidStep` if the stored step is outside the questionnaire
    pub fn pending_step(&self) -> Result<Step, ChatError> {
        if !self.status.is_mutable() {
            return Err(ChatError::Archived);
        }
        Step::from_number(self.current_step)
            .ok_or_else(|| ChatError::invalid_step(self.current_step))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Processes one questionnaire turn.
    ///
    /// Records the answer against the pending step, appends the user
    /// message and the scripted assistant reply, and advances the step.
    /// On the final step the reply is the completion message built from
    /// `artifact`; callers that have no generated artifact pass `None`
    /// and the deterministic fallback is used instead.
    ///
    /// # Errors
    ///
    /// - `MissingMessage` if the answer is blank (no state is touched)
    /// - `Archived` if the session no longer accepts turns
    /// - `InvalidStep` if the stored step is outside the questionnaire
    pub fn process_answer(
        &mut self,
        answer: &str,
        artifact: Option<&GeneratedSystem>,
    ) -> Result<TurnOutcome, ChatError> {
        if answer.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }
        let step = self.pending_step()?;

        self.system_data.record(step, answer);
        self.messages.push(Message::user(answer));

        let outcome = match step.next() {
            Some(next) => {
                let (response, options) = engine::reply_for(step, next, answer);
                self.messages.push(match &options {
                    Some(opts) => Message::assistant_with_options(&response, opts.clone()),
                    None => Message::assistant(&response),
                });
                self.current_step = next.number();
                TurnOutcome {
                    response,
                    options,
                    next_step: Some(next.number()),
                    is_complete: false,
                    system_preview: None,
                }
            }
            None => {
                // Final step: the step counter stays put so the turn can
                // be replayed, and the session remains active.
                let fallback;
                let artifact = match artifact {
                    Some(artifact) => artifact,
                    None => {
                        fallback = self.system_data.fallback_artifact();
                        &fallback
                    }
                };
                let response = engine::completion_reply(&self.system_data, artifact);
                self.messages.push(Message::assistant(&response));
                TurnOutcome {
                    response,
                    options: None,
                    next_step: None,
                    is_complete: true,
                    system_preview: Some(SystemPreview::from_profile(&self.system_data)),
                }
            }
        };

        self.touch();
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::flow::SDR_OPT_IN;
    use crate::domain::chat::message::Role;

    fn walk(session: &mut ChatSession, answers: &[&str]) -> Vec<TurnOutcome> {
        answers
            .iter()
            .map(|answer| session.process_answer(answer, None).unwrap())
            .collect()
    }

    mod start {
        use super::*;

        #[test]
        fn start_seeds_greeting_at_step_one() {
            let session = ChatSession::start(None);

            assert_eq!(session.current_step(), 1);
            assert_eq!(session.status(), SessionStatus::Active);
            assert_eq!(session.messages().len(), 1);
            assert_eq!(session.messages()[0].role(), Role::Assistant);
            assert_eq!(session.messages()[0].content(), GREETING);
            assert!(session.user_id().is_none());
            assert_eq!(session.system_data().answered_count(), 0);
        }

        #[test]
        fn start_keeps_owner_when_signed_in() {
            let user = UserId::new("user-42").unwrap();
            let session = ChatSession::start(Some(user.clone()));
            assert_eq!(session.user_id(), Some(&user));
        }

        #[test]
        fn sessions_get_unique_ids() {
            assert_ne!(*ChatSession::start(None).id(), *ChatSession::start(None).id());
        }
    }

    mod turns {
        use super::*;

        #[test]
        fn answer_advances_step_and_pairs_messages() {
            let mut session = ChatSession::start(None);
            let outcome = session.process_answer("empresários", None).unwrap();

            assert_eq!(session.current_step(), 2);
            assert_eq!(outcome.next_step, Some(2));
            assert!(!outcome.is_complete);
            assert!(outcome.system_preview.is_none());
            assert_eq!(
                outcome.options.as_deref(),
                Some(&["5-10kg".to_string(), "10-20kg".to_string(), "20-30kg".to_string(), "30kg+".to_string()][..])
            );

            // greeting + user + assistant
            assert_eq!(session.messages().len(), 3);
            assert_eq!(session.messages()[1].role(), Role::User);
            assert_eq!(session.messages()[1].content(), "empresários");
            assert_eq!(session.messages()[2].role(), Role::Assistant);
            assert_eq!(session.messages()[2].options().map(|o| o.len()), Some(4));
        }

        #[test]
        fn answer_is_recorded_raw_in_profile() {
            let mut session = ChatSession::start(None);
            session.process_answer("  donos de pets  ", None).unwrap();
            assert_eq!(
                session.system_data().target_audience(),
                Some("  donos de pets  ")
            );
        }

        #[test]
        fn weight_loss_keyword_selects_the_special_reply() {
            let mut session = ChatSession::start(None);
            let outcome = session
                .process_answer("mulheres que querem emagrecer", None)
                .unwrap();
            assert!(outcome.response.starts_with("Excelente!"));
        }

        #[test]
        fn blank_answer_is_rejected_without_touching_state() {
            let mut session = ChatSession::start(None);
            let before = session.clone();

            let err = session.process_answer("   ", None).unwrap_err();
            assert_eq!(err, ChatError::MissingMessage);
            assert_eq!(session, before);
        }

        #[test]
        fn archived_session_rejects_turns() {
            let mut session = ChatSession::reconstitute(
                ChatSessionId::new(),
                None,
                vec![Message::assistant(GREETING)],
                3,
                SystemData::new(),
                SessionStatus::Archived,
                Timestamp::now(),
                Timestamp::now(),
            );

            let err = session.process_answer("empresários", None).unwrap_err();
            assert_eq!(err, ChatError::Archived);
        }

        #[test]
        fn out_of_range_step_is_surfaced() {
            let mut session = ChatSession::reconstitute(
                ChatSessionId::new(),
                None,
                vec![Message::assistant(GREETING)],
                9,
                SystemData::new(),
                SessionStatus::Active,
                Timestamp::now(),
                Timestamp::now(),
            );

            let err = session.process_answer("empresários", None).unwrap_err();
            assert_eq!(err, ChatError::InvalidStep(9));
        }
    }

    mod completion {
        use super::*;

        const ANSWERS: [&str; 5] = [
            "donos de clínicas de estética",
            "10-20kg",
            "Não sabem o que comer",
            "WhatsApp direto",
            SDR_OPT_IN,
        ];

        #[test]
        fn full_walkthrough_completes_with_preview() {
            let mut session = ChatSession::start(None);
            let outcomes = walk(&mut session, &ANSWERS);

            let last = outcomes.last().unwrap();
            assert!(last.is_complete);
            assert_eq!(last.next_step, None);
            assert!(last.options.is_none());

            let preview = last.system_preview.as_ref().unwrap();
            assert!(preview.has_sdr);
            assert_eq!(preview.target_weight.as_deref(), Some("10-20kg"));
            assert_eq!(preview.conversion_method.as_deref(), Some("WhatsApp direto"));

            // Step parks at the final question and the session stays open.
            assert_eq!(session.current_step(), 5);
            assert_eq!(session.status(), SessionStatus::Active);
            assert!(session.system_data().is_complete());
            assert_eq!(session.messages().len(), 1 + 2 * ANSWERS.len());
        }

        #[test]
        fn final_turn_uses_fallback_artifact_when_none_given() {
            let mut session = ChatSession::start(None);
            let outcomes = walk(&mut session, &ANSWERS);
            assert!(outcomes
                .last()
                .unwrap()
                .response
                .contains("Sistema inteligente de captação de leads"));
        }

        #[test]
        fn final_turn_embeds_the_provided_artifact() {
            let mut session = ChatSession::start(None);
            walk(&mut session, &ANSWERS[..4]);

            let mut artifact = GeneratedSystem::fallback(None, None);
            artifact.description = "Quiz de transformação com IA".to_string();
            let outcome = session
                .process_answer(SDR_OPT_IN, Some(&artifact))
                .unwrap();

            assert!(outcome.response.contains("• Quiz de transformação com IA"));
        }

        #[test]
        fn replaying_the_final_step_rewrites_the_answer() {
            let mut session = ChatSession::start(None);
            walk(&mut session, &ANSWERS);
            assert!(session.system_data().wants_sdr());

            let outcome = session
                .process_answer("Não, prefiro fazer manual", None)
                .unwrap();

            assert!(outcome.is_complete);
            assert!(!session.system_data().wants_sdr());
            assert!(!outcome.system_preview.as_ref().unwrap().has_sdr);
            assert_eq!(session.current_step(), 5);
            assert_eq!(session.messages().len(), 1 + 2 * (ANSWERS.len() + 1));
        }

        #[test]
        fn declining_automation_clears_the_preview_flag() {
            let mut session = ChatSession::start(None);
            walk(&mut session, &ANSWERS[..4]);
            let outcome = session
                .process_answer("Não, prefiro fazer manual", None)
                .unwrap();
            assert!(!outcome.system_preview.as_ref().unwrap().has_sdr);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn steps_stay_in_range_and_messages_stay_paired(
                answers in proptest::collection::vec("[a-z]{1,20}", 1..10)
            ) {
                let mut session = ChatSession::start(None);
                let mut prev = session.current_step();

                for (i, answer) in answers.iter().enumerate() {
                    let outcome = session.process_answer(answer, None).unwrap();
                    let step = session.current_step();

                    prop_assert!((1..=5).contains(&step));
                    prop_assert!(step >= prev);
                    prop_assert_eq!(session.messages().len(), 1 + 2 * (i + 1));
                    prop_assert_eq!(outcome.is_complete, i + 1 >= 5);
                    prev = step;
                }
            }
        }
    }
}
