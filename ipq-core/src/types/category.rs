//! IP address category

use std::fmt;

use serde::Serialize;

/// Routing scope of an address, as shown next to each resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpCategory {
    Public,
    Private,
    Loopback,
    #[serde(rename = "Link-Local")]
    LinkLocal,
    Multicast,
    Unspecified,
    Invalid,
}

impl IpCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Loopback => "Loopback",
            Self::LinkLocal => "Link-Local",
            Self::Multicast => "Multicast",
            Self::Unspecified => "Unspecified",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for IpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
