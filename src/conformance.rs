//! Shape conformance checks on raw JSON records.
//!
//! These check only what the contract states: required keys exist with the
//! right JSON type, optional keys hold their type or `null`. Content and
//! coordinate ranges are not inspected, and unknown keys are allowed.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::codec;
use crate::error::Result;
use crate::models::catalog::{self, FieldKind};

/// Which shape a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Result,
    Query,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Result => write!(f, "result"),
            RecordKind::Query => write!(f, "query"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    NotAnObject,
    Missing {
        field: String,
    },
    WrongType {
        field: String,
        expected: &'static str,
    },
    /// A field given under more than one of its spellings
    Duplicate {
        field: String,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NotAnObject => write!(f, "record is not an object"),
            Violation::Missing { field } => write!(f, "missing required field '{}'", field),
            Violation::WrongType { field, expected } => {
                write!(f, "field '{}' must be {}", field, expected)
            }
            Violation::Duplicate { field } => {
                write!(f, "field '{}' appears under more than one name", field)
            }
        }
    }
}

fn check_required(record: &Map<String, Value>, field: &str, kind: FieldKind) -> Option<Violation> {
    let expected = match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "a number",
    };

    match record.get(field) {
        None => Some(Violation::Missing {
            field: field.to_string(),
        }),
        Some(value) if !has_kind(value, kind) => Some(Violation::WrongType {
            field: field.to_string(),
            expected,
        }),
        Some(_) => None,
    }
}

fn has_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Number => value.is_number(),
    }
}

/// Check one raw address resolution result
pub fn check_result(value: &Value) -> Vec<Violation> {
    let Some(record) = value.as_object() else {
        return vec![Violation::NotAnObject];
    };

    let mut violations = Vec::new();

    for spec in catalog::required_fields() {
        violations.extend(check_required(record, spec.name, spec.kind));
    }

    let mut seen = HashSet::new();

    for (key, value) in record {
        let Some(spec) = catalog::lookup(key) else {
            debug!("Ignoring unknown field '{}'", key);
            continue;
        };
        if !seen.insert(spec.name) {
            violations.push(Violation::Duplicate {
                field: spec.name.to_string(),
            });
            continue;
        }
        if spec.required || value.is_null() || has_kind(value, spec.kind) {
            continue;
        }
        violations.push(Violation::WrongType {
            field: key.clone(),
            expected: match spec.kind {
                FieldKind::Text => "text or null",
                FieldKind::Number => "a number or null",
            },
        });
    }

    violations
}

/// Check one raw coordinate query
pub fn check_query(value: &Value) -> Vec<Violation> {
    let Some(record) = value.as_object() else {
        return vec![Violation::NotAnObject];
    };

    ["lat", "lng"]
        .iter()
        .filter_map(|field| check_required(record, field, FieldKind::Number))
        .collect()
}

/// Violations found across a whole document
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConformanceReport {
    pub records: usize,
    /// (record index, violation)
    pub violations: Vec<(usize, Violation)>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of distinct records with at least one violation
    pub fn failing_records(&self) -> usize {
        let mut indices: Vec<usize> = self.violations.iter().map(|(i, _)| *i).collect();
        indices.dedup();
        indices.len()
    }
}

/// Check every record of a JSON document
pub fn check_document(input: &str, kind: RecordKind) -> Result<ConformanceReport> {
    let values = codec::decode_values(input)?;
    let check: fn(&Value) -> Vec<Violation> = match kind {
        RecordKind::Result => check_result,
        RecordKind::Query => check_query,
    };

    let violations = values
        .iter()
        .enumerate()
        .flat_map(|(index, value)| check(value).into_iter().map(move |v| (index, v)))
        .collect();

    Ok(ConformanceReport {
        records: values.len(),
        violations,
    })
}
