//! Static catalog of the fields of an address resolution result.

use serde::Serialize;

/// Grouping of result fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    /// Always present (status, address, administrative subdivisions)
    Required,
    /// Point-of-interest names
    PoiName,
    /// Type / sub-type classification
    Classification,
    /// Structural address parts (room, house number, street...)
    Structure,
    /// Phone, fax, web, mail
    Contact,
    /// Opaque business annotations
    Metadata,
    /// Identifiers in other systems
    ExternalId,
    /// Matched location
    Location,
}

impl FieldGroup {
    pub fn all() -> &'static [FieldGroup] {
        &[
            FieldGroup::Required,
            FieldGroup::PoiName,
            FieldGroup::Classification,
            FieldGroup::Structure,
            FieldGroup::Contact,
            FieldGroup::Metadata,
            FieldGroup::ExternalId,
            FieldGroup::Location,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldGroup::Required => "required",
            FieldGroup::PoiName => "poi_name",
            FieldGroup::Classification => "classification",
            FieldGroup::Structure => "structure",
            FieldGroup::Contact => "contact",
            FieldGroup::Metadata => "metadata",
            FieldGroup::ExternalId => "external_id",
            FieldGroup::Location => "location",
        }
    }
}

/// JSON type a field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => f.pad("text"),
            FieldKind::Number => f.pad("number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub group: FieldGroup,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        group: FieldGroup::Required,
        kind: FieldKind::Text,
        required: true,
    }
}

const fn text(name: &'static str, group: FieldGroup) -> FieldSpec {
    FieldSpec {
        name,
        group,
        kind: FieldKind::Text,
        required: false,
    }
}

const fn number(name: &'static str, group: FieldGroup) -> FieldSpec {
    FieldSpec {
        name,
        group,
        kind: FieldKind::Number,
        required: false,
    }
}

/// Every result field in canonical (wire and CSV column) order.
pub const FIELDS: &[FieldSpec] = &[
    required("status"),
    required("address"),
    required("province"),
    required("district"),
    required("ward"),
    text("poi_vn", FieldGroup::PoiName),
    text("poi_en", FieldGroup::PoiName),
    text("poi_ex", FieldGroup::PoiName),
    text("type", FieldGroup::Classification),
    text("sub_type", FieldGroup::Classification),
    text("poi_st_sd", FieldGroup::Classification),
    text("room", FieldGroup::Structure),
    text("house_num", FieldGroup::Structure),
    text("buaname", FieldGroup::Structure),
    text("st_name", FieldGroup::Structure),
    text("sub_com", FieldGroup::Structure),
    text("phone", FieldGroup::Contact),
    text("fax", FieldGroup::Contact),
    text("web", FieldGroup::Contact),
    text("mail", FieldGroup::Contact),
    text("brandname", FieldGroup::Metadata),
    text("import", FieldGroup::Metadata),
    text("status_detail", FieldGroup::Metadata),
    text("note", FieldGroup::Metadata),
    text("dine", FieldGroup::Metadata),
    text("update_", FieldGroup::Metadata),
    text("source", FieldGroup::Metadata),
    text("gen_type", FieldGroup::Metadata),
    text("perform", FieldGroup::Metadata),
    text("dup", FieldGroup::Metadata),
    text("explain", FieldGroup::Metadata),
    text("classify", FieldGroup::Metadata),
    text("dtrend", FieldGroup::Metadata),
    text("google_id", FieldGroup::ExternalId),
    text("be_id", FieldGroup::ExternalId),
    text("plus_code", FieldGroup::Location),
    number("latitude", FieldGroup::Location),
    number("longitude", FieldGroup::Location),
];

/// Alternate spellings accepted on input, mapped to their catalog name
pub const ALIASES: &[(&str, &str)] = &[("done", "dine")];

/// Find a field by name (aliases included)
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical);
    FIELDS.iter().find(|f| f.name == name)
}

/// The always-present fields
pub fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(|f| f.required)
}

/// Fields belonging to a group, in catalog order
pub fn in_group(group: FieldGroup) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FIELDS.len());
    }

    #[test]
    fn test_required_fields() {
        let names: Vec<_> = required_fields().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["status", "address", "province", "district", "ward"]
        );
    }

    #[test]
    fn test_lookup_alias() {
        assert_eq!(lookup("done").map(|f| f.name), Some("dine"));
        assert_eq!(lookup("latitude").map(|f| f.kind), Some(FieldKind::Number));
        assert!(lookup("nonexistent").is_none());
    }

    #[test]
    fn test_every_group_populated() {
        for group in FieldGroup::all() {
            assert!(in_group(*group).next().is_some(), "{}", group.label());
        }
    }
}
