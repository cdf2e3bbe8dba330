//! Core data models for the lookup contract.

pub mod catalog;
pub mod field;
pub mod query;
pub mod result;

pub use catalog::{FieldGroup, FieldKind, FieldSpec, FIELDS};
pub use field::Field;
pub use query::{CoordinateQuery, MapProvider};
pub use result::AddressResolutionResult;
