//! Clinic directory cleaning example.
//!
//! Run with: `cargo run --example clinic_directory --features directory-json`

use phone_normalizer::directory::{clean_directory, json::parse_json_directory};

const DIRECTORY: &str = r#"{
    "Clinique de Pediatrie du Saguenay": {
        "Region": "SAGUENAY LAC-SAINT-JEAN",
        "Phone number": "(418) 549-1034",
        "Fax number": 4186964673,
        "Email": "clinique@pediatriesaguenay.ca",
        "Address": "475 Bd Talbot, Chicoutimi,\nQC G7H 4A3"
    },
    "Hopital Pierre-Le Gardeur Pediatrie": {
        "Region": "LANAUDIERE",
        "Phone number": " 450-654-7525",
        "Fax number": "450-470-9705",
        "Email": "pediatrie.desrosierslanglois.cissslan@ssss.gouv.qc.ca\njulie.tonnerre.cissslan@ssss.gouv.qc.ca",
        "Address": "911 Mnt des Pionniers, Terrebonne"
    },
    "Clinique Medicale Sainte-Catherine": {
        "Region": "CIUSSS Ouest",
        "Phone number": "(514) 413-8777 x 24400 or x124399 5144138700*2 to discuss if pt has been seen",
        "Fax number": null,
        "Email": "",
        "Address": null
    },
    "ESTRIE": {
        "Region": "",
        "Phone number": null,
        "Fax number": null
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Clinic Directory Cleaning ===\n");

    let entries = parse_json_directory(DIRECTORY)?;
    let report = clean_directory(entries);

    for clinic in report.clinics() {
        println!("{}", clinic.name);
        println!("  Region:  {}", clinic.region.as_deref().unwrap_or("-"));
        println!("  Phone:   {}", clinic.phone.as_deref().unwrap_or("-"));
        println!("  Fax:     {}", clinic.fax.as_deref().unwrap_or("-"));
        println!("  Email:   {}", clinic.email.as_deref().unwrap_or("-"));
        println!("  Address: {}", clinic.address.as_deref().unwrap_or("-"));
    }
    println!();

    println!("Clinics by region:");
    for (region, count) in report.by_region() {
        println!("  {:28} {}", region, count);
    }
    println!();

    let unreachable: Vec<_> = report.unreachable().map(|c| c.name.as_str()).collect();
    println!("Without phone or fax: {:?}", unreachable);

    Ok(())
}
