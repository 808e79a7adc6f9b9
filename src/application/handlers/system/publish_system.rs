//! PublishSystemHandler - Command handler for publishing a system from a
//! completed chat session.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{ChatSessionId, UserId};
use crate::domain::system::{System, SystemError};
use crate::ports::{ArtifactGenerator, ChatSessionRepository, SystemRepository};

/// Command to publish a system from a chat session.
#[derive(Debug, Clone)]
pub struct PublishSystemCommand {
    pub user_id: UserId,
    pub session_id: ChatSessionId,
}

/// Handler for publishing systems.
///
/// Publishing regenerates the artifact from the session's answers
/// rather than trusting anything cached on the client; the fallback
/// artifact is used when generation fails, same as in the chat flow.
pub struct PublishSystemHandler {
    sessions: Arc<dyn ChatSessionRepository>,
    systems: Arc<dyn SystemRepository>,
    generator: Arc<dyn ArtifactGenerator>,
}

impl PublishSystemHandler {
    pub fn new(
        sessions: Arc<dyn ChatSessionRepository>,
        systems: Arc<dyn SystemRepository>,
        generator: Arc<dyn ArtifactGenerator>,
    ) -> Self {
        Self {
            sessions,
            systems,
            generator,
        }
    }

    pub async fn handle(&self, cmd: PublishSystemCommand) -> Result<System, SystemError> {
        // 1. Load the source session
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SystemError::session_not_found(cmd.session_id))?;

        // 2. Regenerate the artifact, falling back on failure
        let profile = session.system_data();
        let artifact = match self.generator.generate(profile).await {
            Ok(artifact) => artifact,
            Err(err) => {
                warn!(error = %err, "Artifact generation failed, publishing fallback");
                profile.fallback_artifact()
            }
        };

        // 3. Create and persist the system with the original answers
        //    embedded in its config
        let original_data = serde_json::to_value(profile).map_err(|e| {
            SystemError::infrastructure(format!("Failed to serialize profile: {}", e))
        })?;
        let system = System::from_artifact(cmd.user_id, &artifact, original_data)?;
        self.systems.save(&system).await?;

        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{ChatSession, SystemData, SDR_OPT_IN};
    use crate::domain::foundation::{DomainError, ErrorCode, SystemStatus};
    use crate::domain::system::GeneratedSystem;
    use crate::ports::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockChatSessionRepository {
        session: Option<ChatSession>,
    }

    #[async_trait]
    impl ChatSessionRepository for MockChatSessionRepository {
        async fn save(&self, _session: &ChatSession) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _session: &ChatSession) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &ChatSessionId,
        ) -> Result<Option<ChatSession>, DomainError> {
            Ok(self.session.clone())
        }
    }

    struct MockSystemRepository {
        saved: Mutex<Vec<System>>,
        fail_save: bool,
    }

    impl MockSystemRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<System> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SystemRepository for MockSystemRepository {
        async fn save(&self, system: &System) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated save failure",
                ));
            }
            self.saved.lock().unwrap().push(system.clone());
            Ok(())
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<System>, DomainError> {
            Ok(vec![])
        }
    }

    struct MockGenerator {
        fail: bool,
    }

    #[async_trait]
    impl ArtifactGenerator for MockGenerator {
        async fn generate(
            &self,
            profile: &SystemData,
        ) -> Result<GeneratedSystem, GenerationError> {
            if self.fail {
                return Err(GenerationError::unavailable("simulated outage"));
            }
            let mut artifact = profile.fallback_artifact();
            artifact.name = "Calculadora de Transformação".to_string();
            Ok(artifact)
        }
    }

    fn completed_session() -> ChatSession {
        let mut session = ChatSession::start(None);
        for answer in [
            "donos de clínicas de estética",
            "10-20kg",
            "Não sabem o que comer",
            "WhatsApp direto",
            SDR_OPT_IN,
        ] {
            session.process_answer(answer, None).unwrap();
        }
        session
    }

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn handler(
        session: Option<ChatSession>,
        systems: Arc<MockSystemRepository>,
        fail_generation: bool,
    ) -> PublishSystemHandler {
        PublishSystemHandler::new(
            Arc::new(MockChatSessionRepository { session }),
            systems,
            Arc::new(MockGenerator {
                fail: fail_generation,
            }),
        )
    }

    #[tokio::test]
    async fn publishes_active_system_with_original_answers() {
        let systems = Arc::new(MockSystemRepository::new());
        let handler = handler(Some(completed_session()), systems.clone(), false);

        let system = handler
            .handle(PublishSystemCommand {
                user_id: test_user_id(),
                session_id: ChatSessionId::new(),
            })
            .await
            .unwrap();

        assert_eq!(system.status(), SystemStatus::Active);
        assert_eq!(system.name(), "Calculadora de Transformação");
        assert!(system.url().starts_with("calculadora-de-transformação-"));
        assert_eq!(
            system.config()["originalData"]["conversionMethod"],
            "WhatsApp direto"
        );

        let saved = systems.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id(), system.id());
    }

    #[tokio::test]
    async fn unknown_session_returns_not_found() {
        let systems = Arc::new(MockSystemRepository::new());
        let handler = handler(None, systems.clone(), false);

        let result = handler
            .handle(PublishSystemCommand {
                user_id: test_user_id(),
                session_id: ChatSessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(SystemError::SessionNotFound(_))));
        assert!(systems.saved().is_empty());
    }

    #[tokio::test]
    async fn generation_failure_publishes_the_fallback() {
        let systems = Arc::new(MockSystemRepository::new());
        let handler = handler(Some(completed_session()), systems.clone(), true);

        let system = handler
            .handle(PublishSystemCommand {
                user_id: test_user_id(),
                session_id: ChatSessionId::new(),
            })
            .await
            .unwrap();

        assert_eq!(system.name(), "Sistema Personalizado");
        assert_eq!(systems.saved().len(), 1);
    }

    #[tokio::test]
    async fn save_failure_is_surfaced() {
        let systems = Arc::new(MockSystemRepository::failing());
        let handler = handler(Some(completed_session()), systems, false);

        let result = handler
            .handle(PublishSystemCommand {
                user_id: test_user_id(),
                session_id: ChatSessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(SystemError::Infrastructure(_))));
    }
}
