//! Coordinate query submitted to an address lookup.

use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Public map viewer a coordinate can be opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MapProvider {
    Google,
    #[value(name = "openstreetmap")]
    OpenStreetMap,
}

impl std::fmt::Display for MapProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapProvider::Google => write!(f, "google"),
            MapProvider::OpenStreetMap => write!(f, "openstreetmap"),
        }
    }
}

/// Latitude / longitude pair.
///
/// The shape does not enforce coordinate ranges; see
/// [`CoordinateQuery::in_standard_range`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lng: f64,
}

impl CoordinateQuery {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether lat is within [-90, 90] and lng within [-180, 180]
    pub fn in_standard_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Substitute `{lat}`, `{lng}` and `{long}` placeholders in a URL template
    pub fn fill_template(&self, template: &str) -> String {
        let lat = self.lat.to_string();
        let lng = self.lng.to_string();
        template
            .replace("{lat}", &lat)
            .replace("{lng}", &lng)
            .replace("{long}", &lng)
    }

    /// Viewer URL centred on this coordinate
    pub fn map_url(&self, provider: MapProvider) -> String {
        match provider {
            MapProvider::Google => {
                format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
            }
            MapProvider::OpenStreetMap => format!(
                "https://www.openstreetmap.org/?mlat={}&mlon={}&zoom=17",
                self.lat, self.lng
            ),
        }
    }
}

impl From<CoordinateQuery> for Point<f64> {
    fn from(query: CoordinateQuery) -> Self {
        Point::new(query.lng, query.lat)
    }
}

impl From<Point<f64>> for CoordinateQuery {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}
