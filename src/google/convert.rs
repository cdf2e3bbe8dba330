//! Mapping of a Google geocoding payload onto an address resolution result.

use tracing::{debug, warn};

use super::response::{AddressComponent, GeocodeResponse};
use crate::models::{AddressResolutionResult, Field};

pub const DEFAULT_SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Status written into results converted from an "OK" response
    pub success_status: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            success_status: DEFAULT_SUCCESS_STATUS.to_string(),
        }
    }
}

/// Which result field an address component fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    PoiName,
    HouseNumber,
    Room,
    BuildingArea,
    SubCommune,
    Street,
    Province,
    District,
    Ward,
}

/// Component type → slot. A component may fill several slots.
const COMPONENT_SLOTS: &[(&str, Slot)] = &[
    ("premise", Slot::PoiName),
    ("point_of_interest", Slot::PoiName),
    ("street_number", Slot::HouseNumber),
    ("floor", Slot::Room),
    ("room", Slot::Room),
    ("sublocality_level_1", Slot::BuildingArea),
    ("sublocality_level_2", Slot::SubCommune),
    ("route", Slot::Street),
    ("administrative_area_level_1", Slot::Province),
    ("administrative_area_level_2", Slot::District),
    ("administrative_area_level_3", Slot::Ward),
];

fn fill(result: &mut AddressResolutionResult, slot: Slot, value: &str) {
    let value = value.to_string();
    match slot {
        Slot::PoiName => result.poi_vn = Field::Value(value),
        Slot::HouseNumber => result.house_num = Field::Value(value),
        Slot::Room => result.room = Field::Value(value),
        Slot::BuildingArea => result.buaname = Field::Value(value),
        Slot::SubCommune => result.sub_com = Field::Value(value),
        Slot::Street => result.st_name = Field::Value(value),
        Slot::Province => result.province = value,
        Slot::District => result.district = value,
        Slot::Ward => result.ward = value,
    }
}

fn apply_components(result: &mut AddressResolutionResult, components: &[AddressComponent]) {
    let mut ward_found = false;

    for component in components {
        for (ty, slot) in COMPONENT_SLOTS {
            if component.has_type(ty) {
                fill(result, *slot, &component.long_name);
                ward_found |= *slot == Slot::Ward;
            }
        }
    }

    if !ward_found {
        if let Some(area) = components
            .iter()
            .rev()
            .find(|c| c.has_type("sublocality_level_1"))
        {
            result.ward = area.long_name.clone();
        }
    }
}

/// Convert a geocoding response into a result.
///
/// A non-OK upstream status is carried into `status` and nothing else is
/// filled. Fields without a source in the payload stay absent.
pub fn to_resolution_result(
    response: &GeocodeResponse,
    options: &ConversionOptions,
) -> AddressResolutionResult {
    if response.is_failure() {
        let status = response.status.clone().unwrap_or_default();
        warn!(
            "Geocoding response status {}: {}",
            status,
            response.error_message.as_deref().unwrap_or("no message")
        );
        return AddressResolutionResult {
            status,
            ..Default::default()
        };
    }

    let mut result = AddressResolutionResult {
        status: options.success_status.clone(),
        ..Default::default()
    };

    let Some(first) = response.results.first() else {
        debug!("Geocoding response has no results");
        return result;
    };

    result.address = first.formatted_address.clone().unwrap_or_default();

    if let Some(location) = first.geometry.as_ref().and_then(|g| g.location) {
        if let Some(lat) = location.lat {
            result.latitude = Field::Value(lat);
        }
        if let Some(lng) = location.lng {
            result.longitude = Field::Value(lng);
        }
    }

    if let Some(code) = first.plus_code.as_ref().and_then(|p| p.global_code.clone()) {
        result.plus_code = Field::Value(code);
    }

    apply_components(&mut result, &first.address_components);

    if let Some(phone) = &first.formatted_phone_number {
        result.phone = Field::Value(phone.clone());
    }
    if let Some(web) = &first.website {
        result.web = Field::Value(web.clone());
    }
    if let Some(place_id) = &first.place_id {
        result.google_id = Field::Value(place_id.clone());
    }

    debug!(
        "Converted geocoding result '{}' ({} components)",
        result.address,
        first.address_components.len()
    );

    result
}

impl From<&GeocodeResponse> for AddressResolutionResult {
    fn from(response: &GeocodeResponse) -> Self {
        to_resolution_result(response, &ConversionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANOI: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "1 Đinh Tiên Hoàng, Hàng Trống, Hoàn Kiếm, Hà Nội, Vietnam",
            "place_id": "ChIJ-abc",
            "geometry": { "location": { "lat": 21.0285, "lng": 105.8542 }, "location_type": "ROOFTOP" },
            "plus_code": { "global_code": "7PH73VHF+CM", "compound_code": "3VHF+CM Hoàn Kiếm" },
            "formatted_phone_number": "024 3825 3536",
            "website": "https://example.vn",
            "address_components": [
                { "long_name": "1", "short_name": "1", "types": ["street_number"] },
                { "long_name": "Đinh Tiên Hoàng", "short_name": "Đinh Tiên Hoàng", "types": ["route"] },
                { "long_name": "Hàng Trống", "short_name": "Hàng Trống", "types": ["administrative_area_level_3", "political"] },
                { "long_name": "Hoàn Kiếm", "short_name": "Hoàn Kiếm", "types": ["administrative_area_level_2", "political"] },
                { "long_name": "Hà Nội", "short_name": "Hà Nội", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "Vietnam", "short_name": "VN", "types": ["country", "political"] }
            ]
        }]
    }"#;

    #[test]
    fn test_ok_response() {
        let response = GeocodeResponse::from_json(HANOI).unwrap();
        let result = to_resolution_result(&response, &ConversionOptions::default());

        assert_eq!(result.status, "success");
        assert!(result.address.starts_with("1 Đinh Tiên Hoàng"));
        assert_eq!(result.province, "Hà Nội");
        assert_eq!(result.district, "Hoàn Kiếm");
        assert_eq!(result.ward, "Hàng Trống");
        assert_eq!(result.house_num, Field::Value("1".to_string()));
        assert_eq!(result.st_name, Field::Value("Đinh Tiên Hoàng".to_string()));
        assert_eq!(result.latitude, Field::Value(21.0285));
        assert_eq!(result.longitude, Field::Value(105.8542));
        assert_eq!(result.plus_code, Field::Value("7PH73VHF+CM".to_string()));
        assert_eq!(result.google_id, Field::Value("ChIJ-abc".to_string()));
        assert_eq!(result.phone, Field::Value("024 3825 3536".to_string()));
        assert_eq!(result.web, Field::Value("https://example.vn".to_string()));
        assert!(result.poi_vn.is_absent());
        assert!(result.buaname.is_absent());
    }

    #[test]
    fn test_failure_status() {
        let response = GeocodeResponse::from_json(
            r#"{"status": "ZERO_RESULTS", "results": [], "error_message": "nothing"}"#,
        )
        .unwrap();
        let result = AddressResolutionResult::from(&response);

        assert_eq!(result.status, "ZERO_RESULTS");
        assert!(result.address.is_empty());
        assert_eq!(result.present_fields().len(), 5);
    }

    #[test]
    fn test_missing_status_is_converted() {
        let response = GeocodeResponse::from_json(
            r#"{"results": [{"formatted_address": "somewhere"}]}"#,
        )
        .unwrap();
        let options = ConversionOptions {
            success_status: "OK".to_string(),
        };
        let result = to_resolution_result(&response, &options);
        assert_eq!(result.status, "OK");
        assert_eq!(result.address, "somewhere");
        assert!(result.latitude.is_absent());
    }

    #[test]
    fn test_lenient_payload_still_converts() {
        let response = GeocodeResponse::from_json(
            r#"{"status": "OK", "results": [{
                "formatted_address": "12 Lý Thái Tổ",
                "address_components": null,
                "geometry": { "location": { "lat": 21.0 } }
            }]}"#,
        )
        .unwrap();
        let result = AddressResolutionResult::from(&response);

        assert_eq!(result.address, "12 Lý Thái Tổ");
        assert_eq!(result.latitude, Field::Value(21.0));
        assert!(result.longitude.is_absent());
        assert!(result.st_name.is_absent());
    }

    #[test]
    fn test_ok_without_results() {
        let response = GeocodeResponse::from_json(r#"{"status": "OK", "results": []}"#).unwrap();
        let result = AddressResolutionResult::from(&response);
        assert_eq!(result.status, "success");
        assert!(result.address.is_empty());
    }

    #[test]
    fn test_sublocality_fallback_and_poi() {
        let response = GeocodeResponse::from_json(
            r#"{"status": "OK", "results": [{
                "formatted_address": "x",
                "address_components": [
                    { "long_name": "Vincom", "types": ["point_of_interest", "establishment"] },
                    { "long_name": "Tầng 3", "types": ["floor"] },
                    { "long_name": "Phường Bến Nghé", "types": ["sublocality_level_1", "sublocality"] },
                    { "long_name": "Khu phố 2", "types": ["sublocality_level_2"] }
                ]
            }]}"#,
        )
        .unwrap();
        let result = AddressResolutionResult::from(&response);

        assert_eq!(result.poi_vn, Field::Value("Vincom".to_string()));
        assert_eq!(result.room, Field::Value("Tầng 3".to_string()));
        assert_eq!(result.buaname, Field::Value("Phường Bến Nghé".to_string()));
        assert_eq!(result.sub_com, Field::Value("Khu phố 2".to_string()));
        assert_eq!(result.ward, "Phường Bến Nghé");
        assert!(result.province.is_empty());
    }
}
