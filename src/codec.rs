//! JSON encoding and decoding of result and query documents.
//!
//! A document is a JSON array of records, a single record, or JSON lines
//! (one record per line; any whitespace-separated stream of values works).

use std::io::Write;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{AddressResolutionResult, CoordinateQuery};

/// Split a document into its raw record values
pub fn decode_values(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let values = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Value>>(trimmed)?
    } else {
        serde_json::Deserializer::from_str(trimmed)
            .into_iter::<Value>()
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!("Decoded {} raw records", values.len());
    Ok(values)
}

/// Decode every record of a document into `T`
pub fn decode_records<T: DeserializeOwned>(input: &str) -> Result<Vec<T>> {
    decode_values(input)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| Error::Decode { index, source })
        })
        .collect()
}

pub fn decode_results(input: &str) -> Result<Vec<AddressResolutionResult>> {
    decode_records(input)
}

pub fn decode_queries(input: &str) -> Result<Vec<CoordinateQuery>> {
    decode_records(input)
}

/// Records whose numbers must survive encoding.
///
/// serde_json writes NaN and infinities as `null`, which no longer decodes
/// into the same record, so these are refused before encoding.
pub trait FiniteNumbers {
    /// Name of the first field holding a non-finite number
    fn non_finite_field(&self) -> Option<&'static str>;

    fn ensure_finite(&self) -> Result<()> {
        match self.non_finite_field() {
            Some(field) => Err(Error::NonFinite { field }),
            None => Ok(()),
        }
    }
}

impl FiniteNumbers for CoordinateQuery {
    fn non_finite_field(&self) -> Option<&'static str> {
        if !self.lat.is_finite() {
            Some("lat")
        } else if !self.lng.is_finite() {
            Some("lng")
        } else {
            None
        }
    }
}

impl FiniteNumbers for AddressResolutionResult {
    fn non_finite_field(&self) -> Option<&'static str> {
        ["latitude", "longitude"].into_iter().find(|name| {
            self.number(name)
                .and_then(|field| field.as_value())
                .is_some_and(|v| !v.is_finite())
        })
    }
}

impl<T: FiniteNumbers> FiniteNumbers for [T] {
    fn non_finite_field(&self) -> Option<&'static str> {
        self.iter().find_map(FiniteNumbers::non_finite_field)
    }
}

fn encode<T: Serialize + FiniteNumbers + ?Sized>(record: &T, pretty: bool) -> Result<String> {
    record.ensure_finite()?;
    let text = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(text)
}

pub fn encode_result(result: &AddressResolutionResult, pretty: bool) -> Result<String> {
    encode(result, pretty)
}

pub fn encode_query(query: &CoordinateQuery, pretty: bool) -> Result<String> {
    encode(query, pretty)
}

/// Encode results as a JSON array
pub fn encode_results(results: &[AddressResolutionResult], pretty: bool) -> Result<String> {
    encode(results, pretty)
}

/// Write one compact record per line
pub fn write_json_lines<W: Write, T: Serialize + FiniteNumbers>(
    mut writer: W,
    records: &[T],
) -> Result<()> {
    for record in records {
        record.ensure_finite()?;
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    const SAMPLE: &str = r#"{"status":"OK","address":"1 Hoan Kiem","province":"Hanoi","district":"Hoan Kiem","ward":"Hang Trong","poi_vn":null}"#;

    #[test]
    fn test_single_object() {
        let results = decode_results(SAMPLE).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].poi_vn.is_null());
        assert!(results[0].poi_en.is_absent());
    }

    #[test]
    fn test_array_and_lines_agree() {
        let array = format!("[{SAMPLE}, {SAMPLE}]");
        let lines = format!("{SAMPLE}\n\n{SAMPLE}\n");
        assert_eq!(decode_results(&array).unwrap(), decode_results(&lines).unwrap());
    }

    #[test]
    fn test_round_trip_preserves_presence() {
        let mut result = AddressResolutionResult::new("OK", "addr", "p", "d", "w");
        result.poi_vn = Field::Null;
        result.phone = Field::Value(String::new());
        result.longitude = Field::Value(105.8542);

        let encoded = encode_result(&result, false).unwrap();
        let decoded = decode_results(&encoded).unwrap();
        assert_eq!(decoded, vec![result]);
        assert_eq!(encoded, encode_result(&decoded[0], false).unwrap());
    }

    #[test]
    fn test_decode_error_names_record() {
        let input = format!("{SAMPLE}\n{{\"status\":\"OK\"}}");
        match decode_results(&input) {
            Err(Error::Decode { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(decode_queries("  \n"), Err(Error::EmptyInput)));
        assert!(matches!(decode_queries("[]"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(decode_queries("{\"lat\": "), Err(Error::Json(_))));
    }

    #[test]
    fn test_non_finite_numbers_refused() {
        assert!(matches!(
            encode_query(&CoordinateQuery::new(f64::NAN, 1.0), false),
            Err(Error::NonFinite { field: "lat" })
        ));

        let mut result = AddressResolutionResult::new("OK", "a", "p", "d", "w");
        result.longitude = Field::Value(f64::INFINITY);
        assert!(matches!(
            encode_result(&result, true),
            Err(Error::NonFinite { field: "longitude" })
        ));
        assert!(matches!(
            encode_results(&[result], false),
            Err(Error::NonFinite { field: "longitude" })
        ));

        let mut out = Vec::new();
        let queries = [
            CoordinateQuery::new(1.0, 2.0),
            CoordinateQuery::new(1.0, f64::NEG_INFINITY),
        ];
        assert!(matches!(
            write_json_lines(&mut out, &queries),
            Err(Error::NonFinite { field: "lng" })
        ));
    }

    #[test]
    fn test_queries_json_lines() {
        let mut out = Vec::new();
        let queries = vec![
            CoordinateQuery::new(21.0285, 105.8542),
            CoordinateQuery::new(10.7769, 106.7009),
        ];
        write_json_lines(&mut out, &queries).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(decode_queries(&text).unwrap(), queries);
        assert_eq!(
            encode_query(&queries[0], false).unwrap(),
            r#"{"lat":21.0285,"lng":105.8542}"#
        );
    }
}
