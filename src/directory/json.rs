//! JSON directory loader.
//!
//! # Feature
//!
//! Requires the `directory-json` feature.
//!
//! # Supported Formats
//!
//! ## Object format (keyed by clinic name)
//!
//! ```json
//! {
//!   "Clinique Pediatrie Alma": {
//!     "Region": "SAGUENAY LAC-SAINT-JEAN",
//!     "Phone number": "(418) 487-2494",
//!     "Fax number": null
//!   }
//! }
//! ```
//!
//! ## Array format
//!
//! ```json
//! [
//!   { "name": "Clinique Pediatrie Alma", "phone": "(418) 487-2494" }
//! ]
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::ClinicEntry;
use crate::error::DirectoryError;

#[derive(Deserialize)]
struct NamedEntry {
    #[serde(alias = "Name", alias = "clinic")]
    name: String,
    #[serde(flatten)]
    entry: ClinicEntry,
}

/// Parses a JSON directory into `(name, entry)` pairs.
///
/// Entries come back in document order for both layouts, so duplicate
/// handling in [`clean_directory`](super::clean_directory) keeps the first
/// record in the file.
///
/// # Example
///
/// ```
/// use phone_normalizer::directory::json::parse_json_directory;
///
/// let entries = parse_json_directory(r#"{"Alma": {"Phone number": "(418) 487-2494", "Fax number": 4186964673}}"#).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].0, "Alma");
/// ```
pub fn parse_json_directory(json: &str) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (name, raw) in map {
                let entry: ClinicEntry = serde_json::from_value(raw)?;
                entries.push((name, entry));
            }
            Ok(entries)
        }
        Value::Array(items) => {
            let mut entries = Vec::with_capacity(items.len());
            for raw in items {
                let named: NamedEntry = serde_json::from_value(raw)?;
                entries.push((named.name, named.entry));
            }
            Ok(entries)
        }
        other => Err(DirectoryError::Layout(format!(
            "expected an object or array at the top level, found {}",
            json_kind(&other)
        ))),
    }
}

/// Loads a JSON directory from a reader.
pub fn load_json_directory<R: Read>(mut reader: R) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_json_directory(&content)
}

/// Loads a JSON directory from a file.
pub fn load_json_directory_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, ClinicEntry)>, DirectoryError> {
    let content = fs::read_to_string(path)?;
    parse_json_directory(&content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawInput;

    const OBJECT_DIRECTORY: &str = r#"{
        "Clinique de Pediatrie du Saguenay": {
            "Region": "SAGUENAY LAC-SAINT-JEAN",
            "Phone number": "(418) 549-1034",
            "Fax number": 4186964673,
            "Email": "clinique@pediatriesaguenay.ca",
            "Address": "475 Bd Talbot, Chicoutimi, QC G7H 4A3"
        },
        "ESTRIE": {
            "Region": "COTE NORD",
            "Phone number": null,
            "Fax number": null,
            "Email": null,
            "Address": "Quebec (Quebec) G1V 4T3"
        },
        "The Children's Care Clinic Pierrefonds": {
            "Region": "CIUSSS Ouest",
            "Fax number": null
        }
    }"#;

    #[test]
    fn test_parse_object_format() {
        let entries = parse_json_directory(OBJECT_DIRECTORY).unwrap();
        assert_eq!(entries.len(), 3);

        let saguenay = entries
            .iter()
            .find(|(name, _)| name == "Clinique de Pediatrie du Saguenay")
            .map(|(_, e)| e)
            .unwrap();
        assert_eq!(saguenay.fax, RawInput::Numeric(4186964673));
        assert_eq!(saguenay.phone, RawInput::Text("(418) 549-1034".into()));

        let estrie = entries.iter().find(|(name, _)| name == "ESTRIE").unwrap();
        assert!(estrie.1.phone.is_absent());
        assert_eq!(estrie.1.email, None);

        let pierrefonds = entries
            .iter()
            .find(|(name, _)| name.starts_with("The Children"))
            .unwrap();
        assert!(pierrefonds.1.phone.is_absent());
    }

    #[test]
    fn test_parse_array_format() {
        let json = r#"[
            {"name": "Lotus Medical", "phone": "(438) 793-2853", "fax": "438-858-2077"},
            {"clinic": "Tiny Tots", "Phone number": "(514) 342-9911"}
        ]"#;
        let entries = parse_json_directory(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Lotus Medical");
        assert_eq!(entries[0].1.fax, RawInput::Text("438-858-2077".into()));
        assert_eq!(entries[1].0, "Tiny Tots");
    }

    #[test]
    fn test_object_format_keeps_document_order() {
        let json = r#"{
            "Zeta Clinic ": {"Phone number": "514-696-2442"},
            "Alpha Clinic": {"Phone number": "418-487-2494"},
            "Zeta Clinic": {"Phone number": "514-000-0000"}
        }"#;
        let entries = parse_json_directory(json).unwrap();
        let names: Vec<_> = entries.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Zeta Clinic ", "Alpha Clinic", "Zeta Clinic"]);

        let report = crate::directory::clean_directory(entries);
        let kept: Vec<_> = report.clinics().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(kept, vec!["Zeta Clinic", "Alpha Clinic"]);
        assert_eq!(report.clinics()[0].phone.as_deref(), Some("(514) 696-2442"));
        assert_eq!(report.skipped(), ["Zeta Clinic".to_string()]);
    }

    #[test]
    fn test_rejects_scalar_document() {
        let err = parse_json_directory("42").unwrap_err();
        assert!(matches!(err, DirectoryError::Layout(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_json_directory("{ not json").unwrap_err();
        assert!(matches!(err, DirectoryError::Json(_)));
    }

    #[test]
    fn test_load_from_reader() {
        let entries = load_json_directory(OBJECT_DIRECTORY.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
    }
}
