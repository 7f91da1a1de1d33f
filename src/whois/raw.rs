//! Field extraction from raw WHOIS text.
//!
//! Registrars return `Label: value` lines whose labels vary slightly between
//! servers. Only the contact and registrar labels below are recognized;
//! everything else in the raw text is ignored.

use super::types::{WhoisRecord, WhoisValue};

/// Raw label (lowercased) to record key.
const RAW_LABELS: &[(&str, &str)] = &[
    ("registrar", "registrar"),
    ("registrant name", "registrant_name"),
    ("registrant organization", "org"),
    ("registrant organisation", "org"),
    ("registrant email", "registrant_email"),
    ("registrant phone", "registrant_phone"),
    ("registrant street", "registrant_address"),
    ("registrant address", "registrant_address"),
    ("registrant city", "registrant_city"),
    ("registrant state/province", "registrant_state"),
    ("registrant state", "registrant_state"),
    ("registrant postal code", "registrant_postal_code"),
    ("registrant country", "registrant_country"),
    ("admin name", "admin_name"),
    ("admin email", "admin_email"),
    ("admin phone", "admin_phone"),
    ("tech name", "tech_name"),
    ("tech email", "tech_email"),
    ("tech phone", "tech_phone"),
    ("billing name", "billing_name"),
    ("billing email", "billing_email"),
    ("billing phone", "billing_phone"),
    ("organization", "organization"),
    ("org", "org"),
];

/// Scans raw WHOIS text for recognized `Label: value` lines.
///
/// Comment lines (`%`, `#`, `>>>`) and empty values are skipped. A label seen
/// more than once becomes a list in order of appearance.
pub(crate) fn parse_raw_fields(raw_text: &str) -> WhoisRecord {
    let mut record = WhoisRecord::new();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') || line.starts_with(">>>")
        {
            continue;
        }

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let label = label.trim().to_lowercase();
        let Some(key) = RAW_LABELS
            .iter()
            .find(|(raw_label, _)| *raw_label == label)
            .map(|(_, key)| *key)
        else {
            continue;
        };

        match record.get_mut(key) {
            Some(existing) => existing.push(value.to_string()),
            None => {
                record.insert(key.to_string(), WhoisValue::from(value));
            }
        }
    }

    record
}
