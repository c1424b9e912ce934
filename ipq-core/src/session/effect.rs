//! Session side effects

use std::time::Duration;

use crate::types::{Family, Target};

/// Work requested by the session. Each effect eventually produces at most one
/// [`SessionEvent`](super::SessionEvent), except clipboard writes which
/// produce none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAddress {
        family: Family,
        target: Target,
        generation: u64,
    },
    FetchGeoDetail {
        ip: String,
        generation: u64,
    },
    WriteClipboard(String),
    ExpireMessage {
        id: u64,
        after: Duration,
    },
}
