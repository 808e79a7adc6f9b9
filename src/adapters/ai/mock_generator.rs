//! Mock Artifact Generator for testing.
//!
//! Provides a configurable mock implementation of the ArtifactGenerator
//! port, allowing tests to run without calling the real API.
//!
//! Outcomes are queued in configuration order; once the queue is empty
//! the mock answers with the profile's deterministic fallback artifact.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockGenerator::new().with_artifact_named("Calculadora Fit");
//!
//! let artifact = generator.generate(&profile).await?;
//! assert_eq!(artifact.name, "Calculadora Fit");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::chat::SystemData;
use crate::domain::system::GeneratedSystem;
use crate::ports::{ArtifactGenerator, GenerationError};

/// Mock artifact generator for testing.
///
/// Configurable to return specific artifacts or inject errors.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    /// Pre-configured outcomes (consumed in order).
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Number of generate calls served.
    calls: Arc<AtomicUsize>,
}

/// A configured mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(GeneratedSystem),
    Error(MockGenerationError),
}

/// Mock error types for testing fallback handling.
///
/// `GenerationError` itself is not `Clone`, so the queue stores this
/// mirror and converts on the way out.
#[derive(Debug, Clone)]
pub enum MockGenerationError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate an unparseable reply.
    MalformedOutput { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockGenerationError> for GenerationError {
    fn from(err: MockGenerationError) -> Self {
        match err {
            MockGenerationError::RateLimited { retry_after_secs } => {
                GenerationError::rate_limited(retry_after_secs)
            }
            MockGenerationError::Unavailable { message } => GenerationError::unavailable(message),
            MockGenerationError::AuthenticationFailed => GenerationError::AuthenticationFailed,
            MockGenerationError::MalformedOutput { message } => {
                GenerationError::malformed_output(message)
            }
            MockGenerationError::Timeout { timeout_secs } => {
                GenerationError::Timeout { timeout_secs }
            }
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Creates a new mock generator with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds an artifact to the outcome queue.
    pub fn with_artifact(self, artifact: GeneratedSystem) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(artifact));
        self
    }

    /// Adds an artifact with the given name and stock content.
    pub fn with_artifact_named(self, name: impl Into<String>) -> Self {
        let artifact = GeneratedSystem {
            name: name.into(),
            ..GeneratedSystem::fallback(None, None)
        };
        self.with_artifact(artifact)
    }

    /// Adds an error to the outcome queue.
    pub fn with_error(self, error: MockGenerationError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Gets the next outcome, defaulting to the profile's fallback artifact.
    fn next_outcome(&self, profile: &SystemData) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Success(profile.fallback_artifact()))
    }
}

#[async_trait]
impl ArtifactGenerator for MockGenerator {
    async fn generate(&self, profile: &SystemData) -> Result<GeneratedSystem, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.next_outcome(profile) {
            MockOutcome::Success(artifact) => Ok(artifact),
            MockOutcome::Error(err) => Err(err.into()),
        }
    }
}
