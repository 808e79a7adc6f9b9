//! Chat domain module.
//!
//! Implements the scripted five-step sales questionnaire: the static
//! question flow, the session aggregate, the reply engine, and the
//! preview card produced on completion.

mod aggregate;
mod engine;
mod errors;
mod flow;
mod message;
mod preview;
mod profile;

pub use aggregate::ChatSession;
pub use engine::TurnOutcome;
pub use errors::ChatError;
pub use flow::{InputKind, QuestionStep, Step, GREETING, QUESTION_FLOW, SDR_OPT_IN, STEP_COUNT};
pub use message::{Message, Role};
pub use preview::SystemPreview;
pub use profile::SystemData;
