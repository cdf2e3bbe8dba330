//! Google Geocoding payloads and their conversion into results.

mod convert;
mod response;

pub use convert::{to_resolution_result, ConversionOptions, DEFAULT_SUCCESS_STATUS};
pub use response::{AddressComponent, GeocodeResponse, GeocodeResult, Geometry, LatLng, PlusCode};
