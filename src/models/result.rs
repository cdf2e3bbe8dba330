//! Address / point-of-interest resolution result.

use serde::{Deserialize, Serialize};

use super::catalog::{self, FieldKind};
use super::Field;

/// Status written into results that carry a failure message
pub const ERROR_STATUS: &str = "error";

/// Outcome of an address lookup.
///
/// The five subdivision/status fields are always present. Every other field
/// is an opaque pass-through value that may be absent, `null`, or set, and
/// those three states survive a decode/encode cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressResolutionResult {
    pub status: String,
    pub address: String,
    pub province: String,
    pub district: String,
    pub ward: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub poi_vn: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub poi_en: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub poi_ex: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub r#type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub sub_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub poi_st_sd: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub room: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub house_num: Field<String>,
    /// Building / area name
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub buaname: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub st_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub sub_com: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub fax: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub web: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub mail: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub brandname: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub import: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status_detail: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub note: Field<String>,
    #[serde(default, alias = "done", skip_serializing_if = "Field::is_absent")]
    pub dine: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub update_: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub source: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub gen_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub perform: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dup: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub explain: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub classify: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dtrend: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub google_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub be_id: Field<String>,

    /// Open Location Code of the match
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub plus_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub latitude: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub longitude: Field<f64>,
}

impl AddressResolutionResult {
    /// Create a result with the required fields and every optional field absent
    pub fn new(
        status: impl Into<String>,
        address: impl Into<String>,
        province: impl Into<String>,
        district: impl Into<String>,
        ward: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            address: address.into(),
            province: province.into(),
            district: district.into(),
            ward: ward.into(),
            ..Default::default()
        }
    }

    /// Failure record: the message goes in `address`, subdivisions are empty
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            address: message.into(),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success") || self.status.eq_ignore_ascii_case("ok")
    }

    /// Required text field by catalog name
    pub fn required(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "address" => Some(&self.address),
            "province" => Some(&self.province),
            "district" => Some(&self.district),
            "ward" => Some(&self.ward),
            _ => None,
        }
    }

    /// Optional text field by catalog name (or alias)
    pub fn text(&self, name: &str) -> Option<&Field<String>> {
        let name = catalog::lookup(name)?.name;
        let field = match name {
            "poi_vn" => &self.poi_vn,
            "poi_en" => &self.poi_en,
            "poi_ex" => &self.poi_ex,
            "type" => &self.r#type,
            "sub_type" => &self.sub_type,
            "poi_st_sd" => &self.poi_st_sd,
            "room" => &self.room,
            "house_num" => &self.house_num,
            "buaname" => &self.buaname,
            "st_name" => &self.st_name,
            "sub_com" => &self.sub_com,
            "phone" => &self.phone,
            "fax" => &self.fax,
            "web" => &self.web,
            "mail" => &self.mail,
            "brandname" => &self.brandname,
            "import" => &self.import,
            "status_detail" => &self.status_detail,
            "note" => &self.note,
            "dine" => &self.dine,
            "update_" => &self.update_,
            "source" => &self.source,
            "gen_type" => &self.gen_type,
            "perform" => &self.perform,
            "dup" => &self.dup,
            "explain" => &self.explain,
            "classify" => &self.classify,
            "dtrend" => &self.dtrend,
            "google_id" => &self.google_id,
            "be_id" => &self.be_id,
            "plus_code" => &self.plus_code,
            _ => return None,
        };
        Some(field)
    }

    /// Mutable access to an optional text field by catalog name (or alias)
    pub fn text_mut(&mut self, name: &str) -> Option<&mut Field<String>> {
        let name = catalog::lookup(name)?.name;
        let field = match name {
            "poi_vn" => &mut self.poi_vn,
            "poi_en" => &mut self.poi_en,
            "poi_ex" => &mut self.poi_ex,
            "type" => &mut self.r#type,
            "sub_type" => &mut self.sub_type,
            "poi_st_sd" => &mut self.poi_st_sd,
            "room" => &mut self.room,
            "house_num" => &mut self.house_num,
            "buaname" => &mut self.buaname,
            "st_name" => &mut self.st_name,
            "sub_com" => &mut self.sub_com,
            "phone" => &mut self.phone,
            "fax" => &mut self.fax,
            "web" => &mut self.web,
            "mail" => &mut self.mail,
            "brandname" => &mut self.brandname,
            "import" => &mut self.import,
            "status_detail" => &mut self.status_detail,
            "note" => &mut self.note,
            "dine" => &mut self.dine,
            "update_" => &mut self.update_,
            "source" => &mut self.source,
            "gen_type" => &mut self.gen_type,
            "perform" => &mut self.perform,
            "dup" => &mut self.dup,
            "explain" => &mut self.explain,
            "classify" => &mut self.classify,
            "dtrend" => &mut self.dtrend,
            "google_id" => &mut self.google_id,
            "be_id" => &mut self.be_id,
            "plus_code" => &mut self.plus_code,
            _ => return None,
        };
        Some(field)
    }

    /// Optional numeric field by catalog name
    pub fn number(&self, name: &str) -> Option<&Field<f64>> {
        match name {
            "latitude" => Some(&self.latitude),
            "longitude" => Some(&self.longitude),
            _ => None,
        }
    }

    /// Catalog names of the fields that would appear in the encoded document
    pub fn present_fields(&self) -> Vec<&'static str> {
        catalog::FIELDS
            .iter()
            .filter(|spec| {
                spec.required
                    || match spec.kind {
                        FieldKind::Text => self.text(spec.name).is_some_and(|f| !f.is_absent()),
                        FieldKind::Number => {
                            self.number(spec.name).is_some_and(|f| !f.is_absent())
                        }
                    }
            })
            .map(|spec| spec.name)
            .collect()
    }
}
