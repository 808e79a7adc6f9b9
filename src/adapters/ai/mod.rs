//! Artifact Generator Adapters.
//!
//! Implementations of the ArtifactGenerator port.
//!
//! ## Available Adapters
//!
//! - `MockGenerator` - Configurable mock for testing
//! - `OpenAIGenerator` - OpenAI chat completions in JSON mode

mod mock_generator;
mod openai_generator;

pub use mock_generator::{MockGenerationError, MockGenerator};
pub use openai_generator::{OpenAIConfig, OpenAIGenerator};
