//! CSV export of address resolution results.
//!
//! Columns follow the field catalog order. CSV has no null, so an explicit
//! null is written as the configured marker and an absent field as an empty
//! cell; the two only stay distinguishable with a non-empty marker.

use std::io::Write;

use tracing::info;

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::models::catalog::{FieldKind, FIELDS};
use crate::models::{AddressResolutionResult, Field};

pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    null_marker: String,
    rows: usize,
}

impl<W: Write> CsvExporter<W> {
    /// Create an exporter and write the header row
    pub fn new(inner: W, config: &ExportConfig) -> Result<Self> {
        if !config.delimiter.is_ascii() {
            return Err(Error::InvalidDelimiter(config.delimiter));
        }
        let delimiter = config.delimiter as u8;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(inner);
        writer.write_record(FIELDS.iter().map(|f| f.name))?;

        Ok(Self {
            writer,
            null_marker: config.null_marker.clone(),
            rows: 0,
        })
    }

    fn cell<T: ToString>(&self, field: Option<&Field<T>>) -> String {
        match field {
            Some(Field::Value(v)) => v.to_string(),
            Some(Field::Null) => self.null_marker.clone(),
            Some(Field::Absent) | None => String::new(),
        }
    }

    fn row(&self, result: &AddressResolutionResult) -> Vec<String> {
        FIELDS
            .iter()
            .map(|spec| {
                if spec.required {
                    return result.required(spec.name).unwrap_or_default().to_string();
                }
                match spec.kind {
                    FieldKind::Text => self.cell(result.text(spec.name)),
                    FieldKind::Number => self.cell(result.number(spec.name)),
                }
            })
            .collect()
    }

    pub fn write(&mut self, result: &AddressResolutionResult) -> Result<()> {
        let row = self.row(result);
        self.writer.write_record(&row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all(&mut self, results: &[AddressResolutionResult]) -> Result<()> {
        for result in results {
            self.write(result)?;
        }
        Ok(())
    }

    /// Flush and return the number of data rows written
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        info!("Exported {} results", self.rows);
        Ok(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(results: &[AddressResolutionResult], config: &ExportConfig) -> String {
        let mut out = Vec::new();
        let mut exporter = CsvExporter::new(&mut out, config).unwrap();
        exporter.write_all(results).unwrap();
        assert_eq!(exporter.finish().unwrap(), results.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_matches_catalog() {
        let text = export(&[], &ExportConfig::default());
        let header: Vec<&str> = text.trim_end().split(',').collect();
        assert_eq!(header.len(), FIELDS.len());
        assert_eq!(header[0], "status");
        assert_eq!(header[FIELDS.len() - 1], "longitude");
    }

    #[test]
    fn test_null_marker_and_absent() {
        let mut result =
            AddressResolutionResult::new("OK", "1 Hoan Kiem", "Hanoi", "Hoan Kiem", "Hang Trong");
        result.poi_vn = Field::Null;
        result.poi_en = Field::Value("Sword Lake".to_string());
        result.latitude = Field::Value(21.0285);

        let config = ExportConfig {
            delimiter: ';',
            null_marker: "NULL".to_string(),
        };
        let text = export(&[result], &config);
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(';').collect();

        assert_eq!(
            &row[..5],
            &["OK", "1 Hoan Kiem", "Hanoi", "Hoan Kiem", "Hang Trong"]
        );
        assert_eq!(row[5], "NULL");
        assert_eq!(row[6], "Sword Lake");
        assert_eq!(row[7], "");
        assert_eq!(row[FIELDS.len() - 2], "21.0285");
        assert_eq!(row[FIELDS.len() - 1], "");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = ExportConfig {
            delimiter: '→',
            null_marker: String::new(),
        };
        assert!(matches!(
            CsvExporter::new(Vec::new(), &config),
            Err(Error::InvalidDelimiter('→'))
        ));
    }
}
