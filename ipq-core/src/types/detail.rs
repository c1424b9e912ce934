//! Geolocation detail

use serde::Serialize;

/// ISP, location and network attributes of an address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GeoDetail {
    pub isp: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub mobile: bool,
    pub proxy: bool,
    pub hosting: bool,
}

impl GeoDetail {
    /// Human readable location, most specific part first.
    ///
    /// The region is dropped when it repeats the city or country, the country
    /// when it repeats the city. Returns `None` when nothing is known.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        let city = self.city.trim();
        let region = self.region.trim();
        let country = self.country.trim();

        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if !city.is_empty() {
            parts.push(city);
        }
        if !region.is_empty() && region != city && region != country {
            parts.push(region);
        }
        if !country.is_empty() && country != city {
            parts.push(country);
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Progress of the geolocation fetch for the current refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    NotRequested,
    Pending,
    Available(GeoDetail),
    Failed(String),
}

impl DetailState {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Available(_) | Self::Failed(_))
    }
}
