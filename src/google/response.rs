//! Google Geocoding API response payload.

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Treat a `null` string like a missing one
fn null_as_empty_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat a `null` array like a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level geocoding response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub plus_code: Option<PlusCode>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub long_name: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub short_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
    #[serde(default)]
    pub location_type: Option<String>,
}

/// Either coordinate may be missing; each is taken on its own
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlusCode {
    #[serde(default)]
    pub global_code: Option<String>,
    #[serde(default)]
    pub compound_code: Option<String>,
}

impl GeocodeResponse {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Whether the upstream reported a non-OK status
    pub fn is_failure(&self) -> bool {
        self.status.as_deref().is_some_and(|s| s != "OK")
    }
}
