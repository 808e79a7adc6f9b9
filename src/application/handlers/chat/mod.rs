//! Chat command and query handlers.

mod get_session;
mod process_message;
mod start_session;

pub use get_session::{GetChatSessionHandler, GetChatSessionQuery};
pub use process_message::{ProcessMessageCommand, ProcessMessageHandler, ProcessMessageResult};
pub use start_session::{StartChatCommand, StartChatHandler};
