//! CSV directory loader.
//!
//! # Feature
//!
//! Requires the `directory-csv` feature.
//!
//! # Supported Format
//!
//! ```csv
//! name,region,phone number,fax number,email,address
//! Clinique Pediatrie Alma,SAGUENAY LAC-SAINT-JEAN,(418) 487-2494,,,935 ave du Pont Alma
//! ```
//!
//! Column order doesn't matter as long as headers are present. Only the
//! name column is required.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ClinicEntry;
use crate::error::DirectoryError;
use crate::input::RawInput;

/// Parses a CSV directory from a string.
pub fn parse_csv_directory(csv: &str) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    load_csv_directory(csv.as_bytes())
}

/// Loads a CSV directory from a file.
pub fn load_csv_directory_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    let file = File::open(path)?;
    load_csv_directory(file)
}

/// Loads a CSV directory from a reader.
///
/// Rows with a blank name are skipped.
///
/// # Example
///
/// ```
/// use phone_normalizer::directory::csv::load_csv_directory;
///
/// let data = "Name,Phone number,Fax number\nAlma,(418) 487-2494,4186964673\n";
/// let entries = load_csv_directory(data.as_bytes()).unwrap();
/// assert_eq!(entries[0].0, "Alma");
/// ```
pub fn load_csv_directory<R: Read>(reader: R) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let col_map = ColumnMap::from_headers(&headers)?;

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if let Some(parsed) = col_map.parse_record(&record) {
            entries.push(parsed);
        }
    }

    Ok(entries)
}

/// Maps CSV column names to indices.
struct ColumnMap {
    name: usize,
    region: Option<usize>,
    phone: Option<usize>,
    fax: Option<usize>,
    email: Option<usize>,
    address: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DirectoryError> {
        let mut name_col = None;
        let mut region_col = None;
        let mut phone_col = None;
        let mut fax_col = None;
        let mut email_col = None;
        let mut address_col = None;

        for (i, header) in headers.iter().enumerate() {
            match header.to_lowercase().trim() {
                "name" | "clinic" | "clinic name" => name_col = Some(i),
                "region" => region_col = Some(i),
                "phone" | "phone number" | "telephone" => phone_col = Some(i),
                "fax" | "fax number" => fax_col = Some(i),
                "email" | "e-mail" => email_col = Some(i),
                "address" => address_col = Some(i),
                _ => {}
            }
        }

        let name = name_col.ok_or(DirectoryError::MissingColumn("name"))?;

        Ok(Self {
            name,
            region: region_col,
            phone: phone_col,
            fax: fax_col,
            email: email_col,
            address: address_col,
        })
    }

    fn parse_record(&self, record: &csv::StringRecord) -> Option<(String, ClinicEntry)> {
        let name = record.get(self.name)?.trim();
        if name.is_empty() {
            return None;
        }

        // Cells are kept untrimmed; cleaning decides what blank means.
        let get_field =
            |idx: Option<usize>| -> Option<String> { idx.and_then(|i| record.get(i)).map(str::to_string) };

        Some((
            name.to_string(),
            ClinicEntry {
                region: get_field(self.region),
                phone: RawInput::from(get_field(self.phone)),
                fax: RawInput::from(get_field(self.fax)),
                email: get_field(self.email),
                address: get_field(self.address),
            },
        ))
    }
}
