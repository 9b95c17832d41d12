use serde::{Deserialize, Serialize};

/// One airport record as returned by the aviationstack `/airports` resource.
/// Only the gateway's decode step produces these; nothing else constructs or
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: u64,
    pub airport_name: String,
    pub iata_code: String,
    pub icao_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub gmt: String,
    pub country_name: String,
    pub city_name: String,
}

impl Airport {
    /// OpenStreetMap link for this airport's coordinates, used in place of
    /// an embedded map widget.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=12/{lat}/{lon}",
            lat = self.latitude,
            lon = self.longitude,
        )
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) — {}, {}",
            self.airport_name, self.iata_code, self.city_name, self.country_name
        )
    }
}

/// Pagination metadata attached to every paginated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    pub total: u32,
}

/// The outer JSON object wrapping a result page and its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Vec<Airport>,
    pub pagination: PageInfo,
}
