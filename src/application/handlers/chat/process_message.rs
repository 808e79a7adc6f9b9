//! ProcessMessageHandler - Command handler for one questionnaire turn.

use std::sync::Arc;

use tracing::warn;

use crate::domain::chat::{ChatError, ChatSession, SystemData, TurnOutcome};
use crate::domain::foundation::ChatSessionId;
use crate::domain::system::GeneratedSystem;
use crate::ports::{ArtifactGenerator, ChatSessionRepository};

/// Command to process one user message in a session.
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub session_id: ChatSessionId,
    pub message: String,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    /// Session state after the turn.
    pub session: ChatSession,
    /// What to send back to the client.
    pub outcome: TurnOutcome,
}

/// Handler for processing questionnaire turns.
pub struct ProcessMessageHandler {
    sessions: Arc<dyn ChatSessionRepository>,
    generator: Arc<dyn ArtifactGenerator>,
}

impl ProcessMessageHandler {
    pub fn new(
        sessions: Arc<dyn ChatSessionRepository>,
        generator: Arc<dyn ArtifactGenerator>,
    ) -> Self {
        Self {
            sessions,
            generator,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<ProcessMessageResult, ChatError> {
        // 1. Reject blank input before touching any state
        if cmd.message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }

        // 2. Load the session
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| ChatError::not_found(cmd.session_id))?;

        let step = session.pending_step()?;

        // 3. On the final step, generate the artifact against a profile
        //    that already includes this answer. Generation failure falls
        //    back to the deterministic artifact and never fails the turn.
        let artifact = if step.is_final() {
            let mut profile = session.system_data().clone();
            profile.record(step, cmd.message.as_str());
            Some(self.generate_or_fallback(&profile).await)
        } else {
            None
        };

        // 4. Apply the turn and persist transcript, step and answers
        let outcome = session.process_answer(&cmd.message, artifact.as_ref())?;
        self.sessions.update(&session).await?;

        Ok(ProcessMessageResult { session, outcome })
    }

    async fn generate_or_fallback(&self, profile: &SystemData) -> GeneratedSystem {
        match self.generator.generate(profile).await {
            Ok(artifact) => artifact,
            Err(err) => {
                warn!(error = %err, "Artifact generation failed, using fallback");
                profile.fallback_artifact()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::SDR_OPT_IN;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::ports::GenerationError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockChatSessionRepository {
        sessions: Mutex<HashMap<ChatSessionId, ChatSession>>,
        updates: Mutex<Vec<ChatSession>>,
        fail_update: bool,
    }

    impl MockChatSessionRepository {
        fn with_session(session: ChatSession) -> Self {
            let mut sessions = HashMap::new();
            sessions.insert(*session.id(), session);
            Self {
                sessions: Mutex::new(sessions),
                updates: Mutex::new(Vec::new()),
                fail_update: false,
            }
        }

        fn empty() -> Self {
            Self {
                sessions: Mutex::new(HashMap::new()),
                updates: Mutex::new(Vec::new()),
                fail_update: false,
            }
        }

        fn failing_update(session: ChatSession) -> Self {
            let mut repo = Self::with_session(session);
            repo.fail_update = true;
            repo
        }

        fn updates(&self) -> Vec<ChatSession> {
            self.updates.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatSessionRepository for MockChatSessionRepository {
        async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
            self.sessions
                .lock()
                .unwrap()
                .insert(*session.id(), session.clone());
            Ok(())
        }

        async fn update(&self, session: &ChatSession) -> Result<(), DomainError> {
            if self.fail_update {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated update failure",
                ));
            }
            self.updates.lock().unwrap().push(session.clone());
            self.sessions
                .lock()
                .unwrap()
                .insert(*session.id(), session.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &ChatSessionId,
        ) -> Result<Option<ChatSession>, DomainError> {
            Ok(self.sessions.lock().unwrap().get(id).cloned())
        }
    }

    struct MockGenerator {
        seen_profiles: Mutex<Vec<SystemData>>,
        description: String,
        fail: bool,
    }

    impl MockGenerator {
        fn returning(description: &str) -> Self {
            Self {
                seen_profiles: Mutex::new(Vec::new()),
                description: description.to_string(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                seen_profiles: Mutex::new(Vec::new()),
                description: String::new(),
                fail: true,
            }
        }

        fn seen_profiles(&self) -> Vec<SystemData> {
            self.seen_profiles.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArtifactGenerator for MockGenerator {
        async fn generate(
            &self,
            profile: &SystemData,
        ) -> Result<GeneratedSystem, GenerationError> {
            self.seen_profiles.lock().unwrap().push(profile.clone());
            if self.fail {
                return Err(GenerationError::unavailable("simulated outage"));
            }
            let mut artifact = profile.fallback_artifact();
            artifact.description = self.description.clone();
            Ok(artifact)
        }
    }

    /// Session that has already answered the first four questions.
    fn session_at_final_step() -> ChatSession {
        let mut session = ChatSession::start(None);
        for answer in [
            "donos de clínicas de estética",
            "10-20kg",
            "Não sabem o que comer",
            "WhatsApp direto",
        ] {
            session.process_answer(answer, None).unwrap();
        }
        session
    }

    fn handler(
        repo: Arc<MockChatSessionRepository>,
        generator: Arc<MockGenerator>,
    ) -> ProcessMessageHandler {
        ProcessMessageHandler::new(repo, generator)
    }

    #[tokio::test]
    async fn intermediate_turn_advances_and_persists() {
        let session = ChatSession::start(None);
        let session_id = *session.id();
        let repo = Arc::new(MockChatSessionRepository::with_session(session));
        let generator = Arc::new(MockGenerator::returning("unused"));

        let result = handler(repo.clone(), generator.clone())
            .handle(ProcessMessageCommand {
                session_id,
                message: "empresários".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome.next_step, Some(2));
        assert!(!result.outcome.is_complete);

        let updates = repo.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].current_step(), 2);
        assert_eq!(updates[0].messages().len(), 3);

        // Intermediate turns never call the generator
        assert!(generator.seen_profiles().is_empty());
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_a_write() {
        let session = ChatSession::start(None);
        let session_id = *session.id();
        let repo = Arc::new(MockChatSessionRepository::with_session(session));
        let generator = Arc::new(MockGenerator::returning("unused"));

        let result = handler(repo.clone(), generator)
            .handle(ProcessMessageCommand {
                session_id,
                message: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::MissingMessage)));
        assert!(repo.updates().is_empty());
    }

    #[tokio::test]
    async fn unknown_session_returns_not_found() {
        let repo = Arc::new(MockChatSessionRepository::empty());
        let generator = Arc::new(MockGenerator::returning("unused"));
        let missing = ChatSessionId::new();

        let result = handler(repo, generator)
            .handle(ProcessMessageCommand {
                session_id: missing,
                message: "empresários".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::NotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn final_turn_generates_with_the_answer_already_recorded() {
        let session = session_at_final_step();
        let session_id = *session.id();
        let repo = Arc::new(MockChatSessionRepository::with_session(session));
        let generator = Arc::new(MockGenerator::returning("Quiz personalizado com IA"));

        let result = handler(repo.clone(), generator.clone())
            .handle(ProcessMessageCommand {
                session_id,
                message: SDR_OPT_IN.to_string(),
            })
            .await
            .unwrap();

        assert!(result.outcome.is_complete);
        assert_eq!(result.outcome.next_step, None);
        assert!(result.outcome.response.contains("Quiz personalizado com IA"));
        assert!(result.outcome.system_preview.as_ref().unwrap().has_sdr);

        // The generator saw the profile including the final answer
        let seen = generator.seen_profiles();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].sdr_automation(), Some(SDR_OPT_IN));

        assert_eq!(repo.updates().len(), 1);
        assert_eq!(repo.updates()[0].current_step(), 5);
    }

    #[tokio::test]
    async fn generation_failure_falls_back_and_still_completes() {
        let session = session_at_final_step();
        let session_id = *session.id();
        let repo = Arc::new(MockChatSessionRepository::with_session(session));
        let generator = Arc::new(MockGenerator::failing());

        let result = handler(repo.clone(), generator)
            .handle(ProcessMessageCommand {
                session_id,
                message: SDR_OPT_IN.to_string(),
            })
            .await
            .unwrap();

        assert!(result.outcome.is_complete);
        assert!(result
            .outcome
            .response
            .contains("Sistema inteligente de captação de leads"));
        assert_eq!(repo.updates().len(), 1);
    }

    #[tokio::test]
    async fn update_failure_is_surfaced() {
        let session = ChatSession::start(None);
        let session_id = *session.id();
        let repo = Arc::new(MockChatSessionRepository::failing_update(session));
        let generator = Arc::new(MockGenerator::returning("unused"));

        let result = handler(repo, generator)
            .handle(ProcessMessageCommand {
                session_id,
                message: "empresários".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::Infrastructure(_))));
    }
}
