//! Session input events

use crate::traits::LookupResult;
use crate::types::{Family, GeoDetail};

/// Everything that can change a [`Session`](super::Session).
///
/// Completions carry the generation they were issued under; completions of an
/// older generation are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Ipv4Completed {
        generation: u64,
        outcome: LookupResult<String>,
    },
    Ipv6Completed {
        generation: u64,
        outcome: LookupResult<String>,
    },
    GeoCompleted {
        generation: u64,
        detail: GeoDetail,
    },
    GeoFailed {
        generation: u64,
        message: String,
    },
    DetailModeEnabled,
    RefreshRequested,
    CopyRequested(Family),
    EphemeralMessageExpired {
        id: u64,
    },
}

impl SessionEvent {
    /// Completion event for an address lookup of `family`.
    #[must_use]
    pub fn address_completed(
        family: Family,
        generation: u64,
        outcome: LookupResult<String>,
    ) -> Self {
        match family {
            Family::V4 => Self::Ipv4Completed {
                generation,
                outcome,
            },
            Family::V6 => Self::Ipv6Completed {
                generation,
                outcome,
            },
        }
    }
}
