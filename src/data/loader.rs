// src/data/loader.rs

use super::PointRecord;
use crate::error::{MapperError, MapperResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Wert der Besucht-Spalte, der als `true` gilt. Alles andere ist `false`.
pub const VISITED_MARKER: &str = "Y";

/// Anzahl der Spalten, die positionsbasiert gelesen werden.
const REQUIRED_COLUMNS: usize = 4;

/// Die vier Rollen einer Zeile, rein nach Position: Name, erste Koordinate,
/// zweite Koordinate, Besucht-Flag. Die Kopfzeile ist kosmetisch.
#[derive(Debug, Deserialize)]
struct RawPointRow(String, f64, f64, String);

impl From<RawPointRow> for PointRecord {
    fn from(row: RawPointRow) -> Self {
        let RawPointRow(label, x, y, flag) = row;
        PointRecord::new(label, x, y, flag == VISITED_MARKER)
    }
}

/// Liest die Punkttabelle ein.
pub struct PointSetLoader {
    delimiter: u8,
}

impl Default for PointSetLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl PointSetLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> MapperResult<Vec<PointRecord>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("Loading point table from '{}'", path.display());
        self.load(file)
    }

    /// Liest alle Datensätze in Eingabereihenfolge.
    ///
    /// Fehler mit `Schema`, wenn die Tabelle weniger als vier Spalten oder
    /// keine Datenzeilen hat, oder eine Koordinate keine Zahl ist.
    pub fn load<R: Read>(&self, reader: R) -> MapperResult<Vec<PointRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let header_len = csv_reader.headers().map_err(schema_error)?.len();
        if header_len < REQUIRED_COLUMNS {
            return Err(MapperError::Schema {
                message: format!(
                    "expected at least {} columns, header has {}",
                    REQUIRED_COLUMNS, header_len
                ),
            });
        }

        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(schema_error)?;
            // Zeile 1 ist die Kopfzeile
            let line = index + 2;
            if record.len() < REQUIRED_COLUMNS {
                return Err(MapperError::Schema {
                    message: format!(
                        "row {} has {} columns, expected at least {}",
                        line,
                        record.len(),
                        REQUIRED_COLUMNS
                    ),
                });
            }

            let positional: StringRecord = record.iter().take(REQUIRED_COLUMNS).collect();
            let row: RawPointRow = positional.deserialize(None).map_err(|e| MapperError::Schema {
                message: format!("row {}: {}", line, e),
            })?;
            if !row.1.is_finite() || !row.2.is_finite() {
                return Err(MapperError::Schema {
                    message: format!("row {}: coordinates must be finite", line),
                });
            }
            records.push(PointRecord::from(row));
        }

        if records.is_empty() {
            return Err(MapperError::Schema {
                message: "table contains no data rows".to_string(),
            });
        }

        debug!("Loaded {} point records", records.len());
        Ok(records)
    }
}

fn schema_error(error: csv::Error) -> MapperError {
    MapperError::Schema {
        message: error.to_string(),
    }
}
