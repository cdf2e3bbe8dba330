//! Geobridge - data contract for an external reverse geocoding service
//!
//! This library provides the coordinate query and address resolution result
//! shapes, their JSON codec, shape conformance checks, conversion of Google
//! geocoding payloads, and CSV export. The `inspect` binary drives them.

pub mod codec;
pub mod config;
pub mod conformance;
pub mod error;
pub mod export;
pub mod google;
pub mod models;

pub use error::{Error, Result};
pub use models::{AddressResolutionResult, CoordinateQuery, Field};
