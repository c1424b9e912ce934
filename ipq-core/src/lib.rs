//! ipq Core Library
//!
//! Platform-independent logic of the `ipq` IP query tool:
//! - Target extraction, validation and IP classification (`utils`)
//! - The query session state machine and its tokio effect runner (`session`)
//! - One-shot report collection for non-interactive output (`report`)
//!
//! Network access and the clipboard are abstracted through traits so the
//! binary can plug in real implementations and tests can plug in mocks.

pub mod error;
pub mod report;
pub mod session;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use report::QueryReport;
pub use session::{Effect, Orchestrator, Session, SessionEvent};
pub use traits::{ClipboardWriter, LookupError, LookupGateway, LookupResult};
