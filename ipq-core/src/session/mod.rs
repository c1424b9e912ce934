//! Query session
//!
//! [`Session`] is a pure state machine: it consumes [`SessionEvent`]s one at a
//! time and answers with the [`Effect`]s to run. [`Orchestrator`] runs those
//! effects on tokio and feeds their completions back in.

mod effect;
mod event;
mod orchestrator;
mod state;

pub use effect::Effect;
pub use event::SessionEvent;
pub use orchestrator::Orchestrator;
pub use state::{Session, COPY_MESSAGE_TTL, REFRESH_MESSAGE_TTL};
