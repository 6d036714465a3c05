//! Clinic directory cleaning.
//!
//! Outbound clinic directories are maintained by hand across regions, and
//! their contact fields are inconsistent: blank strings where a value is
//! missing, several e-mail addresses in one cell, addresses broken over
//! lines, fax numbers stored as integers. This module turns raw entries into
//! [`CleanedClinic`] records ready to be stored.
//!
//! # Features
//!
//! - `directory` - record types and cleaning
//! - `directory-json` - JSON loader
//! - `directory-csv` - CSV loader
//!
//! # Example
//!
//! ```
//! use phone_normalizer::directory::{clean_entry, ClinicEntry};
//! use phone_normalizer::RawInput;
//!
//! let entry = ClinicEntry {
//!     region: Some("SAGUENAY LAC-SAINT-JEAN".into()),
//!     phone: RawInput::from("(418) 549-1034"),
//!     fax: RawInput::from(4186964673_i64),
//!     email: Some("clinique@pediatriesaguenay.ca".into()),
//!     address: Some("475 Bd Talbot,\nChicoutimi".into()),
//! };
//!
//! let clinic = clean_entry(" Clinique de Pediatrie du Saguenay ", &entry);
//! assert_eq!(clinic.name, "Clinique de Pediatrie du Saguenay");
//! assert_eq!(clinic.fax.as_deref(), Some("(418) 696-4673"));
//! assert_eq!(clinic.address.as_deref(), Some("475 Bd Talbot, Chicoutimi"));
//! ```

#[cfg(feature = "directory-csv")]
pub mod csv;
#[cfg(feature = "directory-json")]
pub mod json;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::input::RawInput;
use crate::standardize::{standardize_fax_number, standardize_phone_number};

/// Region label used when a clinic has none.
pub const NO_REGION: &str = "No region";

/// A clinic entry as it appears in a raw directory export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicEntry {
    /// Administrative region.
    #[serde(rename = "Region", alias = "region", default)]
    pub region: Option<String>,
    /// Phone field, as typed.
    #[serde(rename = "Phone number", alias = "phone", default)]
    pub phone: RawInput,
    /// Fax field; may be numeric.
    #[serde(rename = "Fax number", alias = "fax", default)]
    pub fax: RawInput,
    /// E-mail field; may hold several addresses.
    #[serde(rename = "Email", alias = "email", default)]
    pub email: Option<String>,
    /// Street address, possibly spread over several lines.
    #[serde(rename = "Address", alias = "address", default)]
    pub address: Option<String>,
}

/// A clinic record with every contact field standardized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedClinic {
    /// Trimmed clinic name.
    pub name: String,
    /// Region, or `None` if blank.
    pub region: Option<String>,
    /// Single-line address, or `None` if blank.
    pub address: Option<String>,
    /// Canonical phone number.
    pub phone: Option<String>,
    /// Canonical fax number.
    pub fax: Option<String>,
    /// First e-mail address.
    pub email: Option<String>,
}

/// Replaces line breaks and whitespace runs with single spaces, then trims.
///
/// # Example
///
/// ```
/// use phone_normalizer::directory::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace(" 300 Rue King E,\n  Sherbrooke "), "300 Rue King E, Sherbrooke");
/// ```
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Cleans an e-mail cell down to a single address.
///
/// Blank cells become `None`; when several addresses are listed (separated
/// by whitespace or line breaks) the first one is kept.
///
/// # Example
///
/// ```
/// use phone_normalizer::directory::clean_email;
///
/// assert_eq!(
///     clean_email(Some("pediatrie.cnmtl@ssss.gouv.qc.ca          coralie@ssss.gouv.qc.ca")).as_deref(),
///     Some("pediatrie.cnmtl@ssss.gouv.qc.ca")
/// );
/// assert_eq!(clean_email(Some(" ")), None);
/// ```
pub fn clean_email(value: Option<&str>) -> Option<String> {
    non_blank(value)?.split_whitespace().next().map(str::to_string)
}

/// Cleans one directory entry.
pub fn clean_entry(name: &str, entry: &ClinicEntry) -> CleanedClinic {
    CleanedClinic {
        name: name.trim().to_string(),
        region: non_blank(entry.region.as_deref()).map(str::to_string),
        address: non_blank(entry.address.as_deref()).map(collapse_whitespace),
        phone: standardize_phone_number(entry.phone.clone()),
        fax: standardize_fax_number(entry.fax.clone()),
        email: clean_email(entry.email.as_deref()),
    }
}

/// Outcome of cleaning a whole directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    clinics: Vec<CleanedClinic>,
    skipped: Vec<String>,
}

impl DirectoryReport {
    /// Cleaned clinics, in input order.
    pub fn clinics(&self) -> &[CleanedClinic] {
        &self.clinics
    }

    /// Names of entries skipped because the clinic was already present.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Consumes the report, returning the cleaned clinics.
    pub fn into_clinics(self) -> Vec<CleanedClinic> {
        self.clinics
    }

    /// Number of clinics per region, with blank regions under [`NO_REGION`].
    pub fn by_region(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for clinic in &self.clinics {
            let region = clinic.region.as_deref().unwrap_or(NO_REGION);
            *counts.entry(region.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Clinics with neither a phone nor a fax number.
    pub fn unreachable(&self) -> impl Iterator<Item = &CleanedClinic> {
        self.clinics
            .iter()
            .filter(|c| c.phone.is_none() && c.fax.is_none())
    }
}

/// Cleans a sequence of `(name, entry)` pairs.
///
/// Entries whose trimmed name was already seen are skipped and listed in
/// [`DirectoryReport::skipped`].
pub fn clean_directory<N, I>(entries: I) -> DirectoryReport
where
    N: AsRef<str>,
    I: IntoIterator<Item = (N, ClinicEntry)>,
{
    let mut report = DirectoryReport::default();
    let mut seen = HashSet::new();

    for (name, entry) in entries {
        let clinic = clean_entry(name.as_ref(), &entry);

        if !seen.insert(clinic.name.clone()) {
            tracing::warn!(clinic = %clinic.name, "clinic already exists, skipping");
            report.skipped.push(clinic.name);
            continue;
        }

        if clinic.phone.is_none() && !entry.phone.is_absent() {
            tracing::warn!(clinic = %clinic.name, raw = ?entry.phone, "phone number could not be standardized");
        }

        tracing::debug!(
            clinic = %clinic.name,
            region = clinic.region.as_deref().unwrap_or(NO_REGION),
            phone = clinic.phone.as_deref().unwrap_or("-"),
            fax = clinic.fax.as_deref().unwrap_or("-"),
            "cleaned clinic"
        );
        report.clinics.push(clinic);
    }

    tracing::info!(
        processed = report.clinics.len(),
        skipped = report.skipped.len(),
        "directory cleaning completed"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(phone: &str, fax: RawInput) -> ClinicEntry {
        ClinicEntry {
            region: Some("CIUSSS Ouest".into()),
            phone: RawInput::from(phone),
            fax,
            email: None,
            address: None,
        }
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a\nb\t\tc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_clean_email() {
        assert_eq!(clean_email(None), None);
        assert_eq!(clean_email(Some("")), None);
        assert_eq!(clean_email(Some("\n")), None);
        assert_eq!(
            clean_email(Some(" info@clubtinytots.ca ")).as_deref(),
            Some("info@clubtinytots.ca")
        );
        assert_eq!(
            clean_email(Some(
                "pediatrie.desrosierslanglois.cissslan@ssss.gouv.qc.ca\njulie.tonnerre.cissslan@ssss.gouv.qc.ca"
            ))
            .as_deref(),
            Some("pediatrie.desrosierslanglois.cissslan@ssss.gouv.qc.ca")
        );
    }

    #[test]
    fn test_clean_entry_fields() {
        let raw = ClinicEntry {
            region: Some("  ".into()),
            phone: RawInput::from("(514) 413-8777 x 24400 or x124399 5144138700*2 to discuss if pt has been seen"),
            fax: RawInput::from("514-362-2828"),
            email: Some(" ".into()),
            address: Some("\n".into()),
        };
        let clinic = clean_entry("Clinique  ", &raw);

        assert_eq!(clinic.name, "Clinique");
        assert_eq!(clinic.region, None);
        assert_eq!(clinic.address, None);
        assert_eq!(clinic.phone.as_deref(), Some("(514) 413-8777 x24400"));
        assert_eq!(clinic.fax.as_deref(), Some("(514) 362-2828"));
        assert_eq!(clinic.email, None);
    }

    #[test]
    fn test_clean_directory_skips_duplicates() {
        let report = clean_directory(vec![
            ("A", entry("514-696-2442", RawInput::Absent)),
            ("B ", entry("418 724-8591", RawInput::Numeric(4186964673))),
            (" A", entry("514-000-0000", RawInput::Absent)),
        ]);

        assert_eq!(report.clinics().len(), 2);
        assert_eq!(report.skipped(), ["A".to_string()]);
        assert_eq!(report.clinics()[0].phone.as_deref(), Some("(514) 696-2442"));
        assert_eq!(report.clinics()[1].fax.as_deref(), Some("(418) 696-4673"));
    }

    #[test]
    fn test_by_region_and_unreachable() {
        let mut no_region = entry("", RawInput::Absent);
        no_region.region = None;

        let report = clean_directory(vec![
            ("A", entry("514-696-2442", RawInput::Absent)),
            ("B", entry("418 724-8591", RawInput::Absent)),
            ("C", no_region),
        ]);

        let regions = report.by_region();
        assert_eq!(regions.get("CIUSSS Ouest"), Some(&2));
        assert_eq!(regions.get(NO_REGION), Some(&1));

        let unreachable: Vec<_> = report.unreachable().map(|c| c.name.as_str()).collect();
        assert_eq!(unreachable, vec!["C"]);
    }
}
